use axum::{
    routing::{get, put},
    Router,
};
use crate::handlers::notification::{
    create_notification, delete_notification, list_notifications, mark_all_read, mark_read,
    unread_count,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(list_notifications).post(create_notification))
        .route("/notifications/unread-count", get(unread_count))
        .route("/notifications/read-all", put(mark_all_read))
        .route("/notifications/{id}", axum::routing::delete(delete_notification))
        .route("/notifications/{id}/read", put(mark_read))
}

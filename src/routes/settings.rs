use axum::{
    routing::get,
    Router,
};
use crate::handlers::settings::{get_settings, update_settings};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
}

pub mod notifications;
pub mod products;
pub mod settings;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(notifications::routes())
        .merge(settings::routes())
}

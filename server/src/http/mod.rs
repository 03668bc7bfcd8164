use axum::Router;
use axum::routing::get;

use crate::App;
use crate::error;

pub mod health;

pub fn routes(app: App) -> Router {
    Router::new()
        .route("/health", get(health::status))
        .fallback(error::not_found)
        .with_state(app)
}

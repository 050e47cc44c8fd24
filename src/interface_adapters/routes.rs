use crate::interface_adapters::handlers::{add, click, confirm, page, reset, update};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

// Wire the page and its form posts to their handlers.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/products/add", post(add))
        .route("/products/update", post(update))
        .route("/products/reset", post(reset))
        .route("/products/clear", post(reset))
        .route("/products/click", post(click))
        .route("/products/confirm", post(confirm))
        .with_state(state)
}

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::app::AppState;

use super::handlers::serve_page;
use super::static_files::serve_asset;

pub fn create_page_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/assets/{*path}", get(serve_asset))
        .fallback(serve_page)
        .with_state(state)
}

use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;

use super::handlers::{close_view, health_check, list_charts, load_chart};

pub fn create_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/charts", get(list_charts))
        .route("/charts/{chart}", get(load_chart))
        .route("/views/{view}", delete(close_view))
        .with_state(state)
}

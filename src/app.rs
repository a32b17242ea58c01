use axum::{http::Method, Router};
use chrono_tz::Tz;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::config::Config;
use crate::loader::ViewRegistry;
use crate::pages;
use crate::source::DataSource;

pub struct AppState {
    pub config: Arc<Config>,
    pub views: ViewRegistry,
    pub default_timezone: Tz,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn DataSource>) -> anyhow::Result<Self> {
        let default_timezone = config.display.timezone()?;
        let views = ViewRegistry::new(source, &config.views);

        Ok(Self {
            config: Arc::new(config),
            views,
            default_timezone,
        })
    }
}

/// Pages at the root, the JSON API under `/api`
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::create_api_router(Arc::clone(&state)).layer(cors))
        .merge(pages::create_page_router(state))
        .layer(TraceLayer::new_for_http())
}

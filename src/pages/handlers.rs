use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::app::AppState;
use crate::navigation::DateNavigator;

use super::templates;
use super::view::{resolve, View};

/// Render whichever page the request path selects
pub async fn serve_page(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    match resolve(uri.path()) {
        View::Home => Html(templates::home_page()).into_response(),
        View::Category(category) => Html(templates::category_page(category)).into_response(),
        View::Chart(kind) => {
            let view_id = state.views.open().await;
            let today = DateNavigator::for_timezone(state.default_timezone).today();
            tracing::debug!(chart = kind.id(), view = %view_id, "opened chart view");

            Html(templates::chart_page(
                kind,
                &view_id,
                state.default_timezone.name(),
                today,
            ))
            .into_response()
        }
        View::UnknownCategory(category) => {
            tracing::debug!(%category, "unknown category requested");
            (
                StatusCode::NOT_FOUND,
                Html(templates::not_found_page("Category not found")),
            )
                .into_response()
        }
        View::UnknownChart { category, chart } => {
            tracing::debug!(%category, %chart, "unknown chart requested");
            (
                StatusCode::NOT_FOUND,
                Html(templates::not_found_page("Chart not found")),
            )
                .into_response()
        }
        View::Redirect(target) => Redirect::to(target).into_response(),
    }
}

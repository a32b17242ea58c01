use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app::AppState;
use crate::charts::{Category, ChartKind};
use crate::error::AppError;
use crate::loader::{LoadOutcome, LoadState};
use crate::navigation::{parse_timezone, DateNavigator, Navigation};
use crate::render::{ChartSpec, RenderContext};

#[derive(Debug, Deserialize)]
pub struct ChartParams {
    /// View that owns the load; omitted for one-off loads
    pub view: Option<String>,
    /// IANA timezone of the viewer
    pub timezone: Option<String>,
    /// Selected day (`YYYY-MM-DD`) for date-navigable charts
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ChartStatus {
    Loaded { spec: ChartSpec },
    Empty { message: String },
    Failed { message: String },
    Superseded,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub chart: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub status: ChartStatus,
    pub timezone: String,
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
}

#[derive(Serialize)]
pub struct ChartSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date_navigable: bool,
}

#[derive(Serialize)]
pub struct CategorySummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub href: String,
    pub charts: Vec<ChartSummary>,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

/// Load one chart through the view's loader and render it
pub async fn load_chart(
    State(state): State<Arc<AppState>>,
    Path(chart): Path<String>,
    Query(params): Query<ChartParams>,
) -> Result<Json<ChartResponse>, AppError> {
    let kind = ChartKind::from_id(&chart)
        .ok_or_else(|| AppError::NotFound("Chart not found".to_string()))?;

    let tz = match params.timezone.as_deref().filter(|tz| !tz.trim().is_empty()) {
        Some(name) => parse_timezone(name).map_err(|e| AppError::BadRequest(e.to_string()))?,
        None => state.default_timezone,
    };
    let navigator = DateNavigator::for_timezone(tz);

    let date = match params.date.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(input) if kind.is_date_navigable() => Some(
            navigator
                .parse_input(input)
                .map_err(|e| AppError::BadRequest(e.to_string()))?,
        ),
        _ => None,
    }
    // Today is always served by the live endpoint, however it was reached
    .filter(|selected| *selected != navigator.today());

    let query = kind.query(tz.name(), date);
    let outcome = match params.view.as_deref() {
        Some(view_id) => state.views.loader(view_id).await.load(query).await,
        None => state.views.detached().load(query).await,
    };

    let status = match outcome {
        LoadOutcome::Committed(LoadState::Loaded(records)) => {
            let ctx = RenderContext::new(tz.name(), date);
            ChartStatus::Loaded {
                spec: kind.renderer().render(&records, &ctx),
            }
        }
        LoadOutcome::Committed(LoadState::Empty) => ChartStatus::Empty {
            message: kind.empty_message().to_string(),
        },
        LoadOutcome::Committed(LoadState::Failed(message)) => ChartStatus::Failed { message },
        LoadOutcome::Committed(other) => {
            tracing::error!(state = ?other, "loader committed a non-terminal state");
            ChartStatus::Failed {
                message: crate::error::FETCH_FAILED_MESSAGE.to_string(),
            }
        }
        LoadOutcome::Superseded => ChartStatus::Superseded,
    };

    let navigation = kind
        .is_date_navigable()
        .then(|| navigator.navigation(date.unwrap_or_else(|| navigator.today())));

    Ok(Json(ChartResponse {
        chart: kind.id(),
        title: kind.title(),
        status,
        timezone: tz.name().to_string(),
        date,
        navigation,
    }))
}

/// Catalog of categories and their charts
pub async fn list_charts() -> Json<Vec<CategorySummary>> {
    let categories = Category::ALL
        .into_iter()
        .map(|category| CategorySummary {
            slug: category.slug(),
            title: category.title(),
            href: category.href(),
            charts: category
                .charts()
                .into_iter()
                .map(|chart| ChartSummary {
                    id: chart.id(),
                    title: chart.title(),
                    description: chart.description(),
                    date_navigable: chart.is_date_navigable(),
                })
                .collect(),
        })
        .collect();

    Json(categories)
}

/// Discard a view's load state when its page goes away
pub async fn close_view(
    State(state): State<Arc<AppState>>,
    Path(view_id): Path<String>,
) -> StatusCode {
    if state.views.close(&view_id).await {
        tracing::debug!(view = %view_id, "closed chart view");
    }
    StatusCode::NO_CONTENT
}

/// Health check endpoint
pub async fn health_check() -> Json<SuccessResponse> {
    Json(SuccessResponse {
        message: "OK".to_string(),
    })
}

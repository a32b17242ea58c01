//! Integration tests for the chart API
//!
//! A stand-in statistics API is served on an ephemeral port so the full
//! path (HTTP data source, loader, renderer, JSON response) is exercised.

use axum::{
    body::Body,
    extract::Query,
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use arxiv_stats::app::{build_app, AppState};
use arxiv_stats::config::Config;
use arxiv_stats::source::{DataSource, HttpDataSource};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

/// Fake upstream answering the four statistics endpoints
async fn spawn_upstream() -> String {
    async fn get_data(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        match params.get("group_by").map(String::as_str) {
            Some("archive") => Json(json!([
                {"archive": "cs", "data": 120},
                {"archive": "math", "data": 80}
            ]))
            .into_response(),
            Some("country") => Json(json!([
                {"country": "United States", "data": "3500.0"},
                {"country": "Germany", "data": 1200}
            ]))
            .into_response(),
            Some("category") => Json(json!([
                {"category": "cs.AI", "data": 40},
                {"category": "hep-th", "data": 15}
            ]))
            .into_response(),
            _ => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Missing required parameters"})),
            )
                .into_response(),
        }
    }

    async fn get_todays_downloads() -> Json<Value> {
        Json(json!([
            {"hour": 0, "total_primary": 410},
            {"hour": 1, "total_primary": 385}
        ]))
    }

    async fn get_daily_downloads() -> Json<Value> {
        Json(json!([]))
    }

    // Error status with a perfectly valid body
    async fn get_global_sum() -> impl IntoResponse {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!([{"time_group": "2024-01-01", "total_sum": 3}])),
        )
    }

    let upstream = Router::new()
        .route("/api/get_data", get(get_data))
        .route("/api/get_todays_downloads", get(get_todays_downloads))
        .route("/api/get_daily_downloads", get(get_daily_downloads))
        .route("/api/get_global_sum", get(get_global_sum));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    format!("http://{}/api", addr)
}

async fn create_test_app() -> Router {
    let mut config = Config::default();
    config.upstream.base_url = spawn_upstream().await;

    let source: Arc<dyn DataSource> = Arc::new(HttpDataSource::new(&config.upstream).unwrap());
    build_app(Arc::new(AppState::new(config, source).unwrap()))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_archive_chart_renders_labelled_bars() {
    let app = create_test_app().await;

    let (status, body) = get_json(&app, "/api/charts/downloads-by-archive").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "loaded");
    assert_eq!(body["chart"], "downloads-by-archive");

    let trace = &body["spec"]["data"][0];
    assert_eq!(trace["type"], "bar");
    assert_eq!(trace["orientation"], "h");
    assert_eq!(trace["y"], json!(["cs", "math"]));
    assert_eq!(
        trace["text"],
        json!(["cs: 120 Downloads", "math: 80 Downloads"])
    );
    assert!(body.get("navigation").is_none());
}

#[tokio::test]
async fn test_country_chart_accepts_decimal_totals() {
    let app = create_test_app().await;

    let (status, body) = get_json(&app, "/api/charts/downloads-by-country").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "loaded");
    assert_eq!(body["spec"]["data"][0]["type"], "choropleth");
    assert_eq!(body["spec"]["data"][0]["z"], json!([3500, 1200]));
}

#[tokio::test]
async fn test_todays_hourly_chart_reports_timezone_and_navigation() {
    let app = create_test_app().await;

    let (status, body) = get_json(&app, "/api/charts/hourly?timezone=Europe/Paris").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "loaded");
    assert_eq!(body["timezone"], "Europe/Paris");
    assert_eq!(
        body["spec"]["layout"]["title"]["text"],
        "Today's Downloads by the Hour (Europe/Paris)"
    );
    assert_eq!(body["navigation"]["selected"], body["navigation"]["today"]);
    assert_eq!(body["navigation"]["next"], Value::Null);
    assert!(body["navigation"]["previous"].is_string());
}

#[tokio::test]
async fn test_selecting_today_uses_the_live_hourly_chart() {
    let app = create_test_app().await;
    let today = Utc::now().format("%Y-%m-%d").to_string();

    let (status, body) = get_json(
        &app,
        &format!("/api/charts/hourly?timezone=UTC&date={today}"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "loaded");
    assert_eq!(body["date"], Value::Null);
    assert_eq!(
        body["spec"]["layout"]["title"]["text"],
        "Today's Downloads by the Hour (UTC)"
    );
    assert_eq!(body["navigation"]["selected"], today.as_str());
}

#[tokio::test]
async fn test_empty_day_is_reported_as_empty() {
    let app = create_test_app().await;

    let (status, body) = get_json(&app, "/api/charts/hourly?timezone=UTC&date=2024-01-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "empty");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Looks like it's a new day!"));
    assert_eq!(body["date"], "2024-01-15");
    assert_eq!(body["navigation"]["next"], "2024-01-16");
    assert_eq!(body["navigation"]["previous"], "2024-01-14");
}

#[tokio::test]
async fn test_error_status_fails_regardless_of_body() {
    let app = create_test_app().await;

    let (status, body) = get_json(&app, "/api/charts/monthly").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "failed");
    assert_eq!(body["message"], "Failed to fetch data");
    assert!(body.get("spec").is_none());
}

#[tokio::test]
async fn test_unreachable_upstream_fails() {
    let mut config = Config::default();
    config.upstream.base_url = "http://127.0.0.1:9/api".to_string();
    let source: Arc<dyn DataSource> = Arc::new(HttpDataSource::new(&config.upstream).unwrap());
    let app = build_app(Arc::new(AppState::new(config, source).unwrap()));

    let (status, body) = get_json(&app, "/api/charts/downloads-by-category").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "failed");
    assert_eq!(body["message"], "Failed to fetch data");
}

#[tokio::test]
async fn test_future_date_is_rejected() {
    let app = create_test_app().await;
    let future = (Utc::now() + Duration::days(3)).format("%Y-%m-%d");

    let (status, body) = get_json(
        &app,
        &format!("/api/charts/hourly?timezone=UTC&date={future}"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("later than today"));
}

#[tokio::test]
async fn test_invalid_parameters_are_rejected() {
    let app = create_test_app().await;

    let (status, _) = get_json(&app, "/api/charts/hourly?timezone=Nowhere/City").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app, "/api/charts/hourly?date=15-01-2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_chart_is_not_found() {
    let app = create_test_app().await;

    let (status, body) = get_json(&app, "/api/charts/subject-by-submissions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Chart not found");
}

#[tokio::test]
async fn test_catalog_and_health() {
    let app = create_test_app().await;

    let (status, body) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "OK");

    let (status, body) = get_json(&app, "/api/charts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["slug"], "downloads");
    assert_eq!(body[0]["charts"].as_array().unwrap().len(), 5);
    assert_eq!(body[0]["charts"][0]["date_navigable"], true);
    assert_eq!(body[1]["slug"], "submissions");
    assert!(body[1]["charts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_close_view() {
    let app = create_test_app().await;

    let (status, body) = get_json(&app, "/api/charts/downloads-by-archive?view=feedbeef").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "loaded");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/views/feedbeef")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

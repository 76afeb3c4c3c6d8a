use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use learnlytics::analytics::report::views::{DashboardSummary, LearningInsights};
use learnlytics::analytics::{DashboardReport, FilterSelection, PeriodGranularity};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardReportRequest {
    #[serde(default)]
    pub(crate) selection: FilterSelection,
    #[serde(default = "default_granularity")]
    pub(crate) granularity: PeriodGranularity,
}

fn default_granularity() -> PeriodGranularity {
    PeriodGranularity::Month
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardReportResponse {
    pub(crate) granularity: PeriodGranularity,
    pub(crate) summary: DashboardSummary,
    pub(crate) insights: LearningInsights,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/dashboard/report",
            axum::routing::post(dashboard_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<DashboardReportRequest>,
) -> Json<DashboardReportResponse> {
    let DashboardReportRequest {
        selection,
        granularity,
    } = payload;

    let report = DashboardReport::build(&state.dataset, &selection, granularity);
    let summary = report.summary();
    let insights = summary.insights(&report);

    Json(DashboardReportResponse {
        granularity,
        summary,
        insights,
    })
}

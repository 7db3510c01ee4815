use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::state::AppState;

/// Content type for the Prometheus text exposition format.
const TEXT_EXPOSITION: &str = "text/plain; version=0.0.4; charset=utf-8";

/// GET /metrics -- pull-based exposition of the attendance counters.
async fn scrape_metrics(State(state): State<AppState>) -> impl IntoResponse {
    ([(CONTENT_TYPE, TEXT_EXPOSITION)], state.metrics.render())
}

/// Mount metrics routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(scrape_metrics))
}

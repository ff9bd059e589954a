use super::engine::TrendService;
use super::types::{Period, TrendSeries};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct TrendParams {
    pub tag: String,
    pub period: Option<String>,
}

/// Unlike the service, this rejects unknown periods.
pub async fn handle_get_trend(
    Query(params): Query<TrendParams>,
    Extension(service): Extension<Arc<TrendService>>,
) -> Result<Json<TrendSeries>, StatusCode> {
    let period = params.period.unwrap_or_else(|| Period::Day.to_string());
    tracing::info!("Trend request: tag={}, period={}", params.tag, period);

    if let Err(e) = period.parse::<Period>() {
        tracing::warn!("Rejecting trend request: {}", e);
        return Err(StatusCode::BAD_REQUEST);
    }

    Ok(Json(service.get_trend(&params.tag, &period)))
}

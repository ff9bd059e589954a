//! HTTP Router
//!
//! Wires the search and trend handlers into one Axum router. Services are
//! shared with the handlers through `Extension` layers.

use crate::search::engine::QuestionService;
use crate::search::handlers::{handle_get_question, handle_search, handle_suggest};
use crate::trends::engine::TrendService;
use crate::trends::handlers::handle_get_trend;

use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;

pub fn router(questions: Arc<QuestionService>, trends: Arc<TrendService>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .route("/search/suggest", get(handle_suggest))
        .route("/questions/:id", get(handle_get_question))
        .route("/trends", get(handle_get_trend))
        .route("/health", get(handle_health))
        .layer(Extension(questions))
        .layer(Extension(trends))
}

async fn handle_health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

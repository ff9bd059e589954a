use super::engine::QuestionService;
use super::types::{Question, SearchCriteria, SearchResult};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    /// Comma-separated tag list.
    pub tags: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    pub prefix: String,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<QuestionService>>,
) -> Json<SearchResult> {
    tracing::info!(
        "Search request: query={:?}, tags={:?}, limit={:?}",
        params.q,
        params.tags,
        params.limit
    );

    let criteria = SearchCriteria {
        query: params.q,
        tags: params.tags.as_deref().map(parse_tag_list),
        limit: params.limit.unwrap_or(DEFAULT_LIMIT),
    };

    Json(service.search_questions(&criteria))
}

pub async fn handle_suggest(
    Query(params): Query<SuggestParams>,
    Extension(service): Extension<Arc<QuestionService>>,
) -> Json<Vec<String>> {
    tracing::info!("Suggest request: prefix={}", params.prefix);

    let max = service.settings().max_suggestions;
    Json(service.suggest_titles(&params.prefix, max))
}

pub async fn handle_get_question(
    Path(id): Path<String>,
    Extension(service): Extension<Arc<QuestionService>>,
) -> Result<Json<Question>, StatusCode> {
    tracing::info!("Question request: id={}", id);

    service.get_question(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Splits `a,b,,c` into `["a", "b", "c"]`.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: String,
    pub body: String,
    pub score: i64,
    pub is_accepted: bool,
    pub owner_reputation: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Store row key.
    pub id: String,
    pub title: String,
    pub body: String,
    pub creation_date: NaiveDateTime,
    pub score: i64,
    pub owner_reputation: i64,
    pub tags: Vec<String>,
    pub answers: Vec<Answer>,
}

/// A search request as it reaches the service.
///
/// `limit == 0` means "use the configured maximum".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub tags: Option<Vec<String>>,
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Store scan order, not re-ranked.
    pub results: Vec<Question>,
    pub total_results: usize,
    pub search_time_ms: u64,
}

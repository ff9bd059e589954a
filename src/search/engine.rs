use super::answers::select_top_answers;
use super::mapping::question_from_record;
use super::query::build_query;
use super::types::{Question, SearchCriteria, SearchResult};
use crate::config::SearchSettings;
use crate::storage::RecordStore;
use crate::storage::filter::Predicate;
use crate::storage::record::QUESTION_FAMILY;

use std::sync::Arc;
use std::time::Instant;

/// Prefixes shorter than this never reach the store.
pub const MIN_SUGGEST_PREFIX_CHARS: usize = 2;

/// Question search over a record store.
///
/// Store failures are logged and degrade to empty results; nothing here
/// returns an error to the caller.
pub struct QuestionService {
    store: Arc<dyn RecordStore>,
    settings: SearchSettings,
}

impl QuestionService {
    pub fn new(store: Arc<dyn RecordStore>, settings: SearchSettings) -> Arc<Self> {
        Arc::new(Self { store, settings })
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Runs a filtered scan and reduces every hit's answers to the top three.
    ///
    /// Results come back in store order. Rows without a title are skipped
    /// and do not count toward the limit.
    pub fn search_questions(&self, criteria: &SearchCriteria) -> SearchResult {
        let started = Instant::now();
        let limit = self.effective_limit(criteria.limit);
        let query = build_query(criteria.query.as_deref(), criteria.tags.as_deref());

        tracing::debug!(
            "Searching {} with {} conditions, limit {}",
            self.settings.table,
            query.condition_count(),
            limit
        );

        // Untitled rows never map to a question, so they must not use up the limit.
        let predicate = Predicate::All(vec![
            Predicate::column_present(QUESTION_FAMILY, "title"),
            query,
        ]);

        let records = match self.store.scan(&self.settings.table, &predicate, limit) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Error searching questions in {}: {}", self.settings.table, e);
                Vec::new()
            }
        };

        let results: Vec<Question> = records
            .iter()
            .filter_map(question_from_record)
            .map(with_top_answers)
            .collect();

        SearchResult {
            total_results: results.len(),
            results,
            search_time_ms: started.elapsed().as_millis() as u64,
        }
    }

    /// Titles containing `prefix`, in store order.
    pub fn suggest_titles(&self, prefix: &str, max_suggestions: usize) -> Vec<String> {
        if prefix.chars().count() < MIN_SUGGEST_PREFIX_CHARS {
            return Vec::new();
        }

        let predicate = Predicate::column_contains(QUESTION_FAMILY, "title", prefix);
        match self
            .store
            .scan(&self.settings.table, &predicate, max_suggestions)
        {
            Ok(records) => records
                .iter()
                .filter_map(|record| record.text(QUESTION_FAMILY, "title"))
                .map(|title| title.into_owned())
                .collect(),
            Err(e) => {
                tracing::error!(
                    "Error suggesting question titles in {}: {}",
                    self.settings.table,
                    e
                );
                Vec::new()
            }
        }
    }

    pub fn get_question(&self, id: &str) -> Option<Question> {
        match self.store.get(&self.settings.table, id) {
            Ok(record) => record
                .as_ref()
                .and_then(question_from_record)
                .map(with_top_answers),
            Err(e) => {
                tracing::error!("Error fetching question {}: {}", id, e);
                None
            }
        }
    }

    fn effective_limit(&self, requested: usize) -> usize {
        if requested == 0 {
            self.settings.max_results
        } else {
            requested.min(self.settings.max_results)
        }
    }
}

fn with_top_answers(mut question: Question) -> Question {
    question.answers = select_top_answers(&question.answers);
    question
}

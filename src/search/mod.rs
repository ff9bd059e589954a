//! Question Search Module
//!
//! Executes free-text and tag searches against the question table and shapes
//! every hit into a `Question` carrying at most three representative answers.
//!
//! ## Pipeline
//! `SearchCriteria` -> predicate (`query`) -> store scan -> row mapping
//! (`mapping`) -> top-answer reduction (`answers`) -> `SearchResult`.
//!
//! There is no relevance ranking: hits keep the store's scan order and the
//! scan stops as soon as the limit is reached.
//!
//! ## Submodules
//! - **`answers`**: Deterministic top-3 answer selection.
//! - **`engine`**: `QuestionService`, the search, suggest, and lookup operations.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`mapping`**: Decoding stored rows into questions and answers.
//! - **`query`**: Building scan predicates from search criteria.
//! - **`types`**: Questions, answers, criteria, and results.

pub mod answers;
pub mod engine;
pub mod handlers;
pub mod mapping;
pub mod query;
pub mod types;

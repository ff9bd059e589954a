//! Q&A Search and Trends Library
//!
//! This library crate holds everything behind the `sightstack` binary: the
//! query-and-ranking core, the record store it reads from, and the HTTP layer.
//!
//! ## Architecture Modules
//! - **`storage`**: The wide-column record model, scan predicates, the
//!   `RecordStore` boundary, and an in-memory backend with JSON fixtures.
//! - **`search`**: Question search. Builds predicates from criteria, maps rows
//!   to questions, and reduces every question's answers to a top three.
//! - **`trends`**: Expands per-bucket tag counters into evenly spaced series.
//! - **`config`**: Command-line and environment configuration.
//! - **`app`**: The Axum router exposing the services.

pub mod app;
pub mod config;
pub mod search;
pub mod storage;
pub mod trends;

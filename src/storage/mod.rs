//! Record Storage Module
//!
//! The wide-column store the search and trend services read from.
//!
//! ## Core Concepts
//! - **Records**: A row key plus column families of raw byte cells (`record`).
//! - **Predicates**: Column-value filter trees evaluated during scans (`filter`).
//! - **Store boundary**: `RecordStore` is the only way services touch data. It is
//!   passed into each service at construction, never reached through a global.
//! - **Backend**: `MemoryStore` keeps tables in concurrent hash maps (`memory`).
//! - **Fixtures**: JSON seed files encoded into the column layout (`fixtures`).

pub mod filter;
pub mod fixtures;
pub mod memory;
pub mod record;


use anyhow::Result;
use filter::Predicate;
use record::Record;

/// Read access to a wide-column store.
///
/// Errors are store failures (missing table, I/O). Callers in the service
/// layer log them and degrade to empty values.
pub trait RecordStore: Send + Sync {
    /// Returns at most `limit` records matching `predicate`, in the store's
    /// native order. Scanning stops once `limit` matches are collected.
    fn scan(&self, table: &str, predicate: &Predicate, limit: usize) -> Result<Vec<Record>>;

    /// Point lookup by row key.
    fn get(&self, table: &str, key: &str) -> Result<Option<Record>>;
}

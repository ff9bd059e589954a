//! Tag Trends Module
//!
//! Turns the per-bucket counters stored for a `(tag, period)` pair into an
//! evenly spaced, oldest-first time series.
//!
//! ## Periods
//! | period  | buckets | bucket width |
//! |---------|---------|--------------|
//! | `hour`  | 60      | 1 minute     |
//! | `day`   | 24      | 1 hour       |
//! | `month` | 30      | 1 day        |
//!
//! Unknown periods take the `day` shape here; the HTTP handler is the layer
//! that rejects them. Counters are refreshed by an external periodic job.
//!
//! ## Submodules
//! - **`engine`**: `TrendService`, reading counter rows from the store.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`series`**: Counter to time-series expansion.
//! - **`types`**: `Period`, `TrendPoint`, `TrendSeries`.

pub mod engine;
pub mod handlers;
pub mod series;
pub mod types;

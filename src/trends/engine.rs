use super::series::build_series;
use super::types::{Period, TrendSeries};
use crate::storage::RecordStore;
use crate::storage::record::{TREND_FAMILY, Record, trend_column, trend_row_key, trends_table};

use std::sync::Arc;

/// Tag trend lookups over the trends table.
pub struct TrendService {
    store: Arc<dyn RecordStore>,
    table: String,
}

impl TrendService {
    /// `question_table` is the base table; trend rows live in its `_trends` sibling.
    pub fn new(store: Arc<dyn RecordStore>, question_table: &str) -> Arc<Self> {
        Arc::new(Self {
            store,
            table: trends_table(question_table),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Always returns a full series. An absent row or a store failure yields
    /// all-zero counts.
    pub fn get_trend(&self, tag: &str, period: &str) -> TrendSeries {
        let counts = self.read_counts(tag, period);
        build_series(tag, period, &counts)
    }

    fn read_counts(&self, tag: &str, period: &str) -> Vec<i64> {
        let key = trend_row_key(tag, period);

        match self.store.get(&self.table, &key) {
            Ok(Some(record)) => counts_from_record(&record, Period::parse_lenient(period)),
            Ok(None) => {
                tracing::debug!("No trend row {} in {}", key, self.table);
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Error fetching trend data for {}: {}", key, e);
                Vec::new()
            }
        }
    }
}

/// Reads counters `p1..=pN`; absent or malformed counters are 0.
pub fn counts_from_record(record: &Record, period: Period) -> Vec<i64> {
    (1..=period.bucket_count())
        .map(|index| record.int(TREND_FAMILY, &trend_column(index)).unwrap_or(0))
        .collect()
}

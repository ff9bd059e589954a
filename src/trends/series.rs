use super::types::{Period, TrendPoint, TrendSeries};
use chrono::{Local, NaiveDateTime};

/// Expands raw bucket counters into a series anchored at the current time.
pub fn build_series(tag: &str, period: &str, raw_counts: &[i64]) -> TrendSeries {
    build_series_at(tag, period, raw_counts, Local::now().naive_local())
}

/// Expands raw bucket counters into a series whose last point is `now`.
///
/// The output always has exactly the period's bucket count of points. Point
/// `i` sits `N - 1 - i` bucket widths before `now`. Missing counters are 0 and
/// surplus counters are ignored.
pub fn build_series_at(
    tag: &str,
    period: &str,
    raw_counts: &[i64],
    now: NaiveDateTime,
) -> TrendSeries {
    let shape = Period::parse_lenient(period);
    let buckets = shape.bucket_count();
    let width = shape.bucket_width();

    if raw_counts.len() > buckets {
        tracing::debug!(
            "Trend {}/{}: ignoring {} counters beyond {} buckets",
            tag,
            period,
            raw_counts.len() - buckets,
            buckets
        );
    }

    let data = (0..buckets)
        .map(|i| TrendPoint {
            timestamp: now - width * (buckets - 1 - i) as i32,
            count: raw_counts.get(i).copied().unwrap_or(0),
        })
        .collect();

    TrendSeries {
        tag: tag.to_string(),
        period: period.to_string(),
        data,
    }
}

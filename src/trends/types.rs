use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trend window shape: how many buckets, and how wide each bucket is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// 60 one-minute buckets.
    Hour,
    /// 24 one-hour buckets.
    Day,
    /// 30 one-day buckets.
    Month,
}

impl Period {
    /// Case-insensitive; anything unrecognized falls back to `Day`.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or(Period::Day)
    }

    pub fn bucket_count(self) -> usize {
        match self {
            Period::Hour => 60,
            Period::Day => 24,
            Period::Month => 30,
        }
    }

    pub fn bucket_width(self) -> Duration {
        match self {
            Period::Hour => Duration::minutes(1),
            Period::Day => Duration::hours(1),
            Period::Month => Duration::days(1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Hour => "hour",
            Period::Day => "day",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "hour" => Ok(Period::Hour),
            "day" => Ok(Period::Day),
            "month" => Ok(Period::Month),
            _ => Err(anyhow::anyhow!("Unknown trend period: {}", raw)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub timestamp: NaiveDateTime,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub tag: String,
    /// The period label as requested, even when it fell back to `day`.
    pub period: String,
    /// Oldest first.
    pub data: Vec<TrendPoint>,
}

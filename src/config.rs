//! Runtime Configuration
//!
//! Command-line flags with environment fallbacks, plus the settings structs
//! handed to the services.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "sightstack", version, about = "Q&A search and tag trends API")]
pub struct Args {
    /// HTTP listen address.
    #[arg(long, env = "SIGHTSTACK_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Question table name. Trend rows live in `<table>_trends`.
    #[arg(long, env = "SIGHTSTACK_TABLE", default_value = "stackoverflow_qna")]
    pub table: String,

    /// Upper bound for search result limits.
    #[arg(long, env = "SIGHTSTACK_MAX_RESULTS", default_value_t = 50)]
    pub max_results: usize,

    #[arg(long, env = "SIGHTSTACK_MAX_SUGGESTIONS", default_value_t = 10)]
    pub max_suggestions: usize,

    /// Interval of the scheduled trend refresh job.
    #[arg(long, env = "SIGHTSTACK_TREND_REFRESH_SECS", default_value_t = 300)]
    pub trend_refresh_secs: u64,

    /// JSON file used to seed the in-memory store at startup.
    #[arg(long, env = "SIGHTSTACK_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    /// Log filter directives, e.g. `info` or `sightstack=debug`.
    #[arg(long, env = "SIGHTSTACK_LOG", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.table.trim().is_empty() {
            return Err(anyhow::anyhow!("--table must be non-empty"));
        }
        if self.max_results == 0 {
            return Err(anyhow::anyhow!("--max-results must be greater than zero"));
        }
        if self.max_suggestions == 0 {
            return Err(anyhow::anyhow!(
                "--max-suggestions must be greater than zero"
            ));
        }
        if self.trend_refresh_secs == 0 {
            return Err(anyhow::anyhow!(
                "--trend-refresh-secs must be greater than zero"
            ));
        }
        Ok(())
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            table: self.table.clone(),
            max_results: self.max_results,
            max_suggestions: self.max_suggestions,
        }
    }

    pub fn trend_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.trend_refresh_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub table: String,
    pub max_results: usize,
    pub max_suggestions: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            table: "stackoverflow_qna".to_string(),
            max_results: 50,
            max_suggestions: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_and_validate() {
        let args = Args::try_parse_from(["sightstack"]).unwrap();

        assert!(args.validate().is_ok());
        assert_eq!(args.search_settings(), SearchSettings::default());
        assert_eq!(args.trend_refresh_interval(), Duration::from_secs(300));
        assert!(args.fixtures.is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "sightstack",
            "--bind",
            "0.0.0.0:9000",
            "--table",
            "qna",
            "--max-results",
            "5",
        ])
        .unwrap();

        assert_eq!(args.bind.port(), 9000);
        assert_eq!(args.search_settings().table, "qna");
        assert_eq!(args.search_settings().max_results, 5);
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let args = Args::try_parse_from(["sightstack", "--max-results", "0"]).unwrap();
        assert!(args.validate().is_err());

        let args = Args::try_parse_from(["sightstack", "--trend-refresh-secs", "0"]).unwrap();
        assert!(args.validate().is_err());

        let args = Args::try_parse_from(["sightstack", "--table", " "]).unwrap();
        assert!(args.validate().is_err());
    }
}

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Configuration problems. All of these are fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("`{0}` is required")]
    Missing(&'static str),

    #[error("invalid value `{value}` for `{field}` (expected {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("`from_date` ({from}) is after `to_date` ({to})")]
    DateWindow { from: NaiveDate, to: NaiveDate },

    #[error("`from_time` ({from}) is after `to_time` ({to})")]
    TimeWindow { from: NaiveTime, to: NaiveTime },
}

/// Failures while fetching candidate slots from the booking site.
/// Recovered per tick: the loop logs them and carries on.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("appointment search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("appointment site returned HTTP {0}")]
    Status(u16),

    #[error("cannot parse appointment page: {0}")]
    Parse(String),
}

/// Failures while delivering a notification. Recovered per slot: the slot
/// stays marked as seen, so a failed send is never retried.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("telegram send failed: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

//! Configuration loading.
//!
//! The YAML file is deserialized into a raw struct first, then validated
//! into the typed [`Config`] in one place. Anything malformed fails the load
//! with a [`ConfigError`]; nothing loosely-typed escapes this module.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::info;

use crate::utils::datetime::{parse_config_date, parse_config_time};
use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_chat_id, validate_days};

/// Validated user settings, immutable once loaded.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lower bound of the acceptable date window. `None` means no bound;
    /// an absent config key defaults to today at load time.
    pub from_date: Option<NaiveDate>,
    /// Upper bound of the acceptable date window, inclusive.
    pub to_date: NaiveDate,
    /// Lower bound of the acceptable time-of-day window. `None` means no bound.
    pub from_time: Option<NaiveTime>,
    /// Upper bound of the acceptable time-of-day window. `None` means no bound.
    pub to_time: Option<NaiveTime>,
    /// Accepted ISO weekday numbers, Monday = 1 through Sunday = 7.
    pub days: BTreeSet<u8>,
    /// Minimum number of consecutive places a slot must accommodate.
    pub person_number: u32,
    /// Polling interval in seconds.
    pub refresh: u64,
    /// Where notifications go.
    pub telegram: TelegramTarget,
}

/// Credentials and address for the Telegram notification channel.
#[derive(Debug, Clone)]
pub struct TelegramTarget {
    pub token: String,
    pub chat_id: i64,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    to_date: String,
    #[serde(default)]
    from_date: Option<String>,
    #[serde(default)]
    from_time: Option<String>,
    #[serde(default)]
    to_time: Option<String>,
    #[serde(default)]
    days: Option<Vec<u8>>,
    #[serde(default)]
    person_number: Option<u32>,
    refresh: u64,
    #[serde(default)]
    send: Option<RawSend>,
}

#[derive(Debug, Deserialize)]
struct RawSend {
    #[serde(default)]
    telegram: Option<RawTelegram>,
}

#[derive(Debug, Deserialize)]
struct RawTelegram {
    token: String,
    chat_id: String,
}

impl Config {
    /// Loads and validates the configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("loading configuration from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig = serde_yaml::from_str(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let to_date = parse_config_date("to_date", &raw.to_date)?;
        let from_date = match raw.from_date.as_deref() {
            None | Some("") => Some(Local::now().date_naive()),
            Some(text) => Some(parse_config_date("from_date", text)?),
        };
        if let Some(from) = from_date {
            if from > to_date {
                return Err(ConfigError::DateWindow { from, to: to_date });
            }
        }

        let from_time = raw
            .from_time
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| parse_config_time("from_time", s))
            .transpose()?;
        let to_time = raw
            .to_time
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| parse_config_time("to_time", s))
            .transpose()?;
        if let (Some(from), Some(to)) = (from_time, to_time) {
            if from > to {
                return Err(ConfigError::TimeWindow { from, to });
            }
        }

        let days: BTreeSet<u8> = match raw.days {
            None => (1..=7).collect(),
            Some(list) => list.into_iter().collect(),
        };
        validate_days(&days)?;

        let person_number = raw.person_number.unwrap_or(1);
        if person_number == 0 {
            return Err(ConfigError::InvalidValue {
                field: "person_number",
                value: person_number.to_string(),
                expected: "an integer >= 1",
            });
        }

        if raw.refresh == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh",
                value: raw.refresh.to_string(),
                expected: "a positive number of seconds",
            });
        }

        let telegram = raw
            .send
            .and_then(|send| send.telegram)
            .ok_or(ConfigError::Missing("send.telegram"))?;
        if telegram.token.trim().is_empty() {
            return Err(ConfigError::Missing("send.telegram.token"));
        }
        let chat_id: i64 =
            telegram
                .chat_id
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    field: "send.telegram.chat_id",
                    value: telegram.chat_id.clone(),
                    expected: "an integer Telegram chat id",
                })?;
        validate_chat_id(chat_id)?;

        Ok(Config {
            from_date,
            to_date,
            from_time,
            to_time,
            days,
            person_number,
            refresh: raw.refresh,
            telegram: TelegramTarget {
                token: telegram.token,
                chat_id,
            },
        })
    }
}

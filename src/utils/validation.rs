use std::collections::BTreeSet;

use crate::utils::error::ConfigError;

/// Checks that a chat id falls inside Telegram's known id ranges.
///
/// Positive ids are user chats (at most 2^31-1); negative ids are groups or
/// supergroups (supergroup ids start around -1000000000000).
pub fn validate_chat_id(chat_id: i64) -> Result<(), ConfigError> {
    let valid = chat_id != 0 && chat_id <= 2_147_483_647 && chat_id >= -2_000_000_000_000;
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: "send.telegram.chat_id",
            value: chat_id.to_string(),
            expected: "a Telegram user, group, or supergroup chat id",
        })
    }
}

/// Checks that the weekday set is non-empty and uses ISO numbering
/// (Monday = 1 through Sunday = 7).
pub fn validate_days(days: &BTreeSet<u8>) -> Result<(), ConfigError> {
    if days.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "days",
            value: "[]".to_owned(),
            expected: "at least one weekday number",
        });
    }
    if let Some(bad) = days.iter().find(|d| !(1..=7).contains(*d)) {
        return Err(ConfigError::InvalidValue {
            field: "days",
            value: bad.to_string(),
            expected: "weekday numbers between 1 (Monday) and 7 (Sunday)",
        });
    }
    Ok(())
}

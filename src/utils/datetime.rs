//! Date and time parsing for the two formats the checker deals with: the
//! `DD/MM/YYYY` / `HH:MM` strings of the config file, and the French
//! "12 juin 2024 10:20" entries of the booking page.

use chrono::{NaiveDate, NaiveTime};

use crate::utils::error::ConfigError;

/// Month names as they appear on the booking page.
const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Parses a `DD/MM/YYYY` config value.
pub fn parse_config_date(field: &'static str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), "%d/%m/%Y").map_err(|_| ConfigError::InvalidValue {
        field,
        value: value.to_owned(),
        expected: "a DD/MM/YYYY date",
    })
}

/// Parses an `HH:MM` config value.
pub fn parse_config_time(field: &'static str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| ConfigError::InvalidValue {
        field,
        value: value.to_owned(),
        expected: "an HH:MM time",
    })
}

/// Parses a slot entry like "12 juin 2024 10:20".
///
/// Returns `None` on anything that does not match; callers drop such
/// entries instead of failing the whole page.
pub fn parse_slot_datetime(text: &str) -> Option<(NaiveDate, NaiveTime)> {
    let mut parts = text.split_whitespace();
    let day: u32 = parts.next()?.parse().ok()?;
    let month_name = parts.next()?.to_lowercase();
    let month = FRENCH_MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;
    let year: i32 = parts.next()?.parse().ok()?;
    let time = NaiveTime::parse_from_str(parts.next()?, "%H:%M").ok()?;
    if parts.next().is_some() {
        return None;
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some((date, time))
}

/// Formats a slot datetime the way the booking page displays it, for use in
/// notification messages.
pub fn format_slot_datetime(date: NaiveDate, time: NaiveTime) -> String {
    use chrono::{Datelike, Timelike};
    format!(
        "{} {} {} {:02}:{:02}",
        date.day(),
        FRENCH_MONTHS[date.month0() as usize],
        date.year(),
        time.hour(),
        time.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_config_date() {
        assert_eq!(
            parse_config_date("to_date", "30/06/2022").unwrap(),
            date(2022, 6, 30)
        );
        assert_eq!(
            parse_config_date("to_date", " 01/01/2024 ").unwrap(),
            date(2024, 1, 1)
        );
    }

    #[test]
    fn rejects_bad_config_date() {
        assert!(parse_config_date("to_date", "2022-06-30").is_err());
        assert!(parse_config_date("to_date", "31/02/2022").is_err());
        assert!(parse_config_date("to_date", "").is_err());
    }

    #[test]
    fn parses_config_time() {
        assert_eq!(
            parse_config_time("from_time", "06:00").unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap()
        );
    }

    #[test]
    fn rejects_bad_config_time() {
        assert!(parse_config_time("from_time", "25:00").is_err());
        assert!(parse_config_time("from_time", "6am").is_err());
    }

    #[test]
    fn parses_slot_datetime() {
        let (d, t) = parse_slot_datetime("12 juin 2024 10:20").unwrap();
        assert_eq!(d, date(2024, 6, 12));
        assert_eq!(t, NaiveTime::from_hms_opt(10, 20, 0).unwrap());

        // capitalized month and extra whitespace, as the page sometimes renders
        let (d, _) = parse_slot_datetime("  3 Décembre 2024  09:00 ").unwrap();
        assert_eq!(d, date(2024, 12, 3));
    }

    #[test]
    fn rejects_malformed_slot_datetime() {
        assert!(parse_slot_datetime("").is_none());
        assert!(parse_slot_datetime("12 june 2024 10:20").is_none());
        assert!(parse_slot_datetime("31 février 2024 10:20").is_none());
        assert!(parse_slot_datetime("12 juin 2024").is_none());
        assert!(parse_slot_datetime("12 juin 2024 10:20 extra").is_none());
    }

    #[test]
    fn formats_slot_datetime() {
        assert_eq!(
            format_slot_datetime(date(2024, 6, 12), NaiveTime::from_hms_opt(9, 5, 0).unwrap()),
            "12 juin 2024 09:05"
        );
    }
}

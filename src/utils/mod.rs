/// Parsing and formatting for config and booking-page datetimes
pub mod datetime;
/// Error taxonomy: config, fetch, and notification failures
pub mod error;
/// Escaping for Telegram HTML messages
pub mod html;
/// Reusable validation helpers used by config loading
pub mod validation;

//! The slot filter: a pure conjunction of the four configured predicates.

use chrono::Datelike;

use crate::config::Config;
use crate::models::Slot;

/// Whether a slot qualifies for notification.
///
/// All bounds are inclusive; an absent bound does not constrain. The weekday
/// check uses ISO numbering (Monday = 1) to match the `days` config key.
pub fn matches(slot: &Slot, config: &Config) -> bool {
    if config.from_date.is_some_and(|from| slot.date < from) {
        return false;
    }
    if slot.date > config.to_date {
        return false;
    }
    if config.from_time.is_some_and(|from| slot.time < from) {
        return false;
    }
    if config.to_time.is_some_and(|to| slot.time > to) {
        return false;
    }
    let weekday = slot.date.weekday().number_from_monday() as u8;
    if !config.days.contains(&weekday) {
        return false;
    }
    slot.places >= config.person_number
}

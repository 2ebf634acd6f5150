use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A bookable appointment unit as reported by the booking site.
///
/// Ephemeral: slots live for one tick and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub location: String,
    pub address: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// How many consecutive places the slot can accommodate.
    pub places: u32,
}

/// The identity used for notification dedup: date plus time.
///
/// Two places offering the same datetime count as one slot for dedup
/// purposes; one notification per datetime is the intended behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Slot {
    pub fn id(&self) -> SlotId {
        SlotId {
            date: self.date,
            time: self.time,
        }
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Concert event ─────────────────────────────────────────────────────────────

/// One concert occurrence, as serialized to the output CSV. The rename
/// attributes double as the CSV header row.
///
/// Dates serialize in ISO-8601 (`1986-05-31`). Venue and city are empty
/// strings, not absent, when the title does not carry them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConcertEvent {
    #[serde(rename = "Tour Name")]
    pub tour_name: String,

    #[serde(rename = "Event Title")]
    pub title: String,

    #[serde(rename = "Event Date")]
    pub date: NaiveDate,

    #[serde(rename = "Event Brief")]
    pub brief: String,

    #[serde(rename = "Event Venue")]
    pub venue: String,

    #[serde(rename = "Event City")]
    pub city: String,
}

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub event_id: Uuid,
    pub event_name: String,
    /// Local wall-clock time of the event, stored without zone.
    pub event_date: NaiveDateTime,
    /// Minutes.
    pub duration: Option<i32>,
    pub event_description: Option<String>,
    pub poster: String,
    pub reg_link: Option<String>,
    pub whatsapp_link: Option<String>,
    pub venue: Option<String>,
    pub visibility: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const EVENT_DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Accepts `datetime-local` form values (with or without seconds) and RFC 3339.
/// RFC 3339 input is converted to UTC before the zone is dropped.
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    EVENT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

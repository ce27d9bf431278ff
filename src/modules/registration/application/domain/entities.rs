use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub reg_id: Uuid,
    pub user_id: UserId,
    pub event_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// How a student names the event they want to join. The id wins when both are given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventRef {
    ById(Uuid),
    ByName(String),
    #[default]
    Missing,
}

impl EventRef {
    pub fn from_parts(event_id: Option<Uuid>, event_name: Option<String>) -> Self {
        match (event_id, event_name.map(|n| n.trim().to_string())) {
            (Some(id), _) => EventRef::ById(id),
            (None, Some(name)) if !name.is_empty() => EventRef::ByName(name),
            _ => EventRef::Missing,
        }
    }
}

/// One row of the export: a registration joined with its user's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Registrant {
    pub user_name: Option<String>,
    pub user_email: String,
    pub roll_no: Option<String>,
    pub semester: Option<String>,
    pub branch: Option<String>,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationExport {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

fn unsafe_filename_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9 _.-]+").expect("static pattern"))
}

/// `<event name>_registrations.<ext>` with characters outside `[A-Za-z0-9 _.-]`
/// replaced, so the name is safe inside a quoted `Content-Disposition` header.
pub fn export_filename(event_name: &str, extension: &str) -> String {
    let cleaned = unsafe_filename_chars().replace_all(event_name.trim(), "_");
    let cleaned = cleaned.trim_matches(|c: char| matches!(c, '.' | ' ' | '_'));
    let stem = if cleaned.is_empty() { "event" } else { cleaned };

    format!("{}_registrations.{}", stem, extension)
}

use chrono::NaiveDateTime;

use crate::modules::event::application::domain::entities::parse_event_date;
use crate::shared::patch_field::PatchField;

pub(super) fn required_text(field: &str, value: Option<String>) -> Result<String, String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("{} is required", field)),
    }
}

pub(super) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(super) fn event_date(raw: &str) -> Result<NaiveDateTime, String> {
    parse_event_date(raw).ok_or_else(|| {
        "event_date must look like YYYY-MM-DDTHH:MM or an RFC 3339 timestamp".to_string()
    })
}

pub(super) fn duration(minutes: i32) -> Result<i32, String> {
    if minutes > 0 {
        Ok(minutes)
    } else {
        Err("duration must be a positive number of minutes".to_string())
    }
}

/// Required column: `null` or blank is rejected, omission keeps the stored value.
pub(super) fn patch_required_text(
    field: &str,
    value: PatchField<String>,
) -> Result<PatchField<String>, String> {
    match value {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Null => Err(format!("{} cannot be null", field)),
        PatchField::Value(v) => required_text(field, Some(v)).map(PatchField::Value),
    }
}

pub(super) fn patch_event_date(
    value: PatchField<String>,
) -> Result<PatchField<NaiveDateTime>, String> {
    match value {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Null => Err("event_date cannot be null".to_string()),
        PatchField::Value(raw) => event_date(&raw).map(PatchField::Value),
    }
}

pub(super) fn patch_duration(value: PatchField<i32>) -> Result<PatchField<i32>, String> {
    match value {
        PatchField::Value(minutes) => duration(minutes).map(PatchField::Value),
        other => Ok(other),
    }
}

pub(super) fn patch_visibility(value: PatchField<bool>) -> Result<PatchField<bool>, String> {
    match value {
        PatchField::Null => Err("visibility cannot be null".to_string()),
        other => Ok(other),
    }
}

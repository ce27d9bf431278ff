// src/shared/patch_field.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (nullable fields only)
// - Value(v): replace with v
//
// Request DTOs mark every PatchField with #[serde(default)] so an
// omitted key deserializes to Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[default]
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }
}

impl PatchField<String> {
    /// Trims the value; a value that is blank after trimming becomes Null.
    pub fn trimmed(self) -> PatchField<String> {
        match self {
            PatchField::Value(v) => {
                let v = v.trim();
                if v.is_empty() {
                    PatchField::Null
                } else {
                    PatchField::Value(v.to_string())
                }
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct VenuePatch {
        #[serde(default)]
        venue: PatchField<String>,
    }

    #[test]
    fn omitted_key_is_unset() {
        let patch: VenuePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.venue.is_unset());
    }

    #[test]
    fn explicit_null_is_null() {
        let patch: VenuePatch = serde_json::from_str(r#"{"venue": null}"#).unwrap();
        assert_eq!(patch.venue, PatchField::Null);
    }

    #[test]
    fn value_is_value() {
        let patch: VenuePatch = serde_json::from_str(r#"{"venue": "Hall A"}"#).unwrap();
        assert_eq!(patch.venue, PatchField::Value("Hall A".to_string()));
    }

    #[test]
    fn trimmed_turns_blank_into_null() {
        assert_eq!(PatchField::Value("   ".to_string()).trimmed(), PatchField::Null);
        assert_eq!(
            PatchField::Value(" CSE ".to_string()).trimmed(),
            PatchField::Value("CSE".to_string())
        );
        assert!(PatchField::<String>::Unset.trimmed().is_unset());
    }
}

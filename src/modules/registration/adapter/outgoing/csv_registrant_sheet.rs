use std::borrow::Cow;

use crate::modules::registration::application::domain::entities::Registrant;
use crate::modules::registration::application::ports::outgoing::registrant_sheet::{
    RegistrantSheet, RegistrantSheetError,
};

const HEADER: [&str; 7] = [
    "Sl No.",
    "Name",
    "Email",
    "Roll No.",
    "Semester",
    "Branch",
    "Registered At",
];

/// Leading characters that make spreadsheet applications evaluate a cell.
const FORMULA_TRIGGERS: [char; 6] = ['=', '+', '-', '@', '\t', '\r'];

/// Student-entered text is written as a literal: a cell that would start a
/// formula gets a leading `'`.
fn text_cell(value: &str) -> Cow<'_, str> {
    if value.starts_with(FORMULA_TRIGGERS) {
        Cow::Owned(format!("'{}", value))
    } else {
        Cow::Borrowed(value)
    }
}

/// Spreadsheet-friendly CSV export, one row per registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRegistrantSheet;

impl RegistrantSheet for CsvRegistrantSheet {
    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, registrants: &[Registrant]) -> Result<Vec<u8>, RegistrantSheetError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(HEADER).map_err(render_failed)?;

        for (index, registrant) in registrants.iter().enumerate() {
            let cells = [
                Cow::Owned((index + 1).to_string()),
                text_cell(registrant.user_name.as_deref().unwrap_or("")),
                text_cell(&registrant.user_email),
                text_cell(registrant.roll_no.as_deref().unwrap_or("")),
                text_cell(registrant.semester.as_deref().unwrap_or("")),
                text_cell(registrant.branch.as_deref().unwrap_or("")),
                Cow::Owned(registrant.registered_at.to_rfc3339()),
            ];

            writer
                .write_record(cells.iter().map(|cell| cell.as_bytes()))
                .map_err(render_failed)?;
        }

        writer
            .into_inner()
            .map_err(|e| RegistrantSheetError::RenderFailed(e.to_string()))
    }
}

fn render_failed(e: csv::Error) -> RegistrantSheetError {
    RegistrantSheetError::RenderFailed(e.to_string())
}

use crate::modules::registration::application::domain::entities::Registrant;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrantSheetError {
    #[error("Failed to render registrant sheet: {0}")]
    RenderFailed(String),
}

/// Renders export rows into a downloadable document.
pub trait RegistrantSheet: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn extension(&self) -> &'static str;

    fn render(&self, registrants: &[Registrant]) -> Result<Vec<u8>, RegistrantSheetError>;
}

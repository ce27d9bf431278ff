use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;
use crate::shared::patch_field::PatchField;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEventCommand {
    pub event_name: PatchField<String>,
    pub event_date: PatchField<String>,
    pub duration: PatchField<i32>,
    pub event_description: PatchField<String>,
    pub poster: PatchField<String>,
    pub reg_link: PatchField<String>,
    pub whatsapp_link: PatchField<String>,
    pub venue: PatchField<String>,
    pub visibility: PatchField<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateEventError {
    #[error("administrator privileges required")]
    Forbidden,

    #[error("{0}")]
    ValidationError(String),

    #[error("event not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateEventUseCase: Send + Sync {
    async fn execute(
        &self,
        actor_email: &str,
        event_id: Uuid,
        command: UpdateEventCommand,
    ) -> Result<Event, UpdateEventError>;
}

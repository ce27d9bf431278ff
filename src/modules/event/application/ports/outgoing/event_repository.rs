use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;
use crate::shared::patch_field::PatchField;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateEventData {
    pub event_name: String,
    pub event_date: NaiveDateTime,
    pub duration: Option<i32>,
    pub event_description: Option<String>,
    pub poster: String,
    pub reg_link: Option<String>,
    pub whatsapp_link: Option<String>,
    pub venue: Option<String>,
    pub visibility: bool,
}

/// Validated sparse update. Required columns can only be `Unset` or `Value`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchEventData {
    pub event_name: PatchField<String>,
    pub event_date: PatchField<NaiveDateTime>,
    pub duration: PatchField<i32>,
    pub event_description: PatchField<String>,
    pub poster: PatchField<String>,
    pub reg_link: PatchField<String>,
    pub whatsapp_link: PatchField<String>,
    pub venue: PatchField<String>,
    pub visibility: PatchField<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventRepositoryError {
    #[error("Event not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError>;

    /// Applies the patch and refreshes `updated_at`; `NotFound` when no row matches.
    async fn patch_event(
        &self,
        event_id: Uuid,
        data: PatchEventData,
    ) -> Result<Event, EventRepositoryError>;

    /// Succeeds whether or not the row existed. Registrations cascade.
    async fn delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError>;
}

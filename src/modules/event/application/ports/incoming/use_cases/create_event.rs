use async_trait::async_trait;

use crate::modules::event::application::domain::entities::Event;

/// Raw event fields as submitted. Required ones are optional here so that
/// validation can name whichever is missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateEventCommand {
    pub event_name: Option<String>,
    pub event_date: Option<String>,
    pub duration: Option<i32>,
    pub event_description: Option<String>,
    pub poster: Option<String>,
    pub reg_link: Option<String>,
    pub whatsapp_link: Option<String>,
    pub venue: Option<String>,
    pub visibility: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateEventError {
    #[error("administrator privileges required")]
    Forbidden,

    #[error("{0}")]
    ValidationError(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateEventUseCase: Send + Sync {
    async fn execute(
        &self,
        actor_email: &str,
        command: CreateEventCommand,
    ) -> Result<Event, CreateEventError>;
}

use async_trait::async_trait;

use crate::modules::registration::application::domain::entities::{EventRef, Registration};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterForEventError {
    #[error("{0}")]
    ValidationError(String),

    #[error("user not found")]
    UserNotFound,

    #[error("event not found")]
    EventNotFound,

    #[error("already registered for this event")]
    AlreadyRegistered,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterForEventUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
        event: EventRef,
    ) -> Result<Registration, RegisterForEventError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetEventError {
    #[error("event not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetEventUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid) -> Result<Event, GetEventError>;
}

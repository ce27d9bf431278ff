use async_trait::async_trait;

use crate::modules::event::application::domain::entities::Event;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListEventsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListEventsUseCase: Send + Sync {
    async fn execute(&self, include_hidden: bool) -> Result<Vec<Event>, ListEventsError>;
}

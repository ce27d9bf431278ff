use async_trait::async_trait;

use crate::modules::event::application::domain::entities::Event;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListMyRegistrationsError {
    #[error("user not found")]
    UserNotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListMyRegistrationsUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<Vec<Event>, ListMyRegistrationsError>;
}

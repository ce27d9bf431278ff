use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteEventError {
    #[error("administrator privileges required")]
    Forbidden,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteEventUseCase: Send + Sync {
    async fn execute(&self, actor_email: &str, event_id: Uuid) -> Result<(), DeleteEventError>;
}

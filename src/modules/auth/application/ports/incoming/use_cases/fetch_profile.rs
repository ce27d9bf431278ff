use async_trait::async_trait;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchProfileError {
    #[error("user not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<User, FetchProfileError>;
}

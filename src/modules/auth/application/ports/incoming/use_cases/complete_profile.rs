use async_trait::async_trait;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteProfileCommand {
    pub roll_no: Option<String>,
    pub semester: Option<String>,
    pub branch: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompleteProfileError {
    #[error("{0}")]
    ValidationError(String),

    #[error("user not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CompleteProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
        command: CompleteProfileCommand,
    ) -> Result<User, CompleteProfileError>;
}

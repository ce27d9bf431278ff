use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignInResult {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user_id: UserId,
    pub profile_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("invalid identity assertion: {0}")]
    InvalidIdentity(String),

    #[error("e-mail domain is not allowed")]
    DomainRejected,

    #[error("could not persist user: {0}")]
    PersistenceError(String),

    #[error("could not issue session token: {0}")]
    TokenIssueFailed(String),
}

#[async_trait]
pub trait SignInUseCase: Send + Sync {
    async fn execute(&self, id_token: &str) -> Result<SignInResult, SignInError>;
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_repository::SignInProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveOrCreateUserError {
    #[error("e-mail domain is not allowed")]
    AuthDomainRejected,

    #[error("could not persist user: {0}")]
    AuthPersistenceError(String),
}

#[async_trait]
pub trait ResolveOrCreateUserUseCase: Send + Sync {
    async fn execute(&self, profile: SignInProfile) -> Result<User, ResolveOrCreateUserError>;
}

use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveUserIdError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Maps a session e-mail to the stored user id.
#[derive(Clone)]
pub struct UserIdentityResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl UserIdentityResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    pub async fn by_email(&self, email: &str) -> Result<UserId, ResolveUserIdError> {
        match self.user_query.find_by_email(email).await {
            Ok(Some(user)) => Ok(user.user_id),
            Ok(None) => Err(ResolveUserIdError::NotFound),
            Err(UserQueryError::DatabaseError(msg)) => Err(ResolveUserIdError::RepositoryError(msg)),
        }
    }
}

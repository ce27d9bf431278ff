use async_trait::async_trait;

use crate::auth::application::domain::entities::{EmailDomainPolicy, User};
use crate::auth::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

pub struct FetchProfileService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<User, FetchProfileError> {
        let email = EmailDomainPolicy::normalize(email);

        match self.user_query.find_by_email(&email).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(FetchProfileError::NotFound),
            Err(UserQueryError::DatabaseError(msg)) => Err(FetchProfileError::RepositoryError(msg)),
        }
    }
}

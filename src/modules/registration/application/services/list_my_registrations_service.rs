use async_trait::async_trait;

use crate::auth::application::helpers::{ResolveUserIdError, UserIdentityResolver};
use crate::modules::event::application::domain::entities::Event;
use crate::modules::registration::application::ports::incoming::use_cases::{
    ListMyRegistrationsError, ListMyRegistrationsUseCase,
};
use crate::modules::registration::application::ports::outgoing::registration_query::{
    RegistrationQuery, RegistrationQueryError,
};

pub struct ListMyRegistrationsService<Q>
where
    Q: RegistrationQuery,
{
    registration_query: Q,
    identity: UserIdentityResolver,
}

impl<Q> ListMyRegistrationsService<Q>
where
    Q: RegistrationQuery,
{
    pub fn new(registration_query: Q, identity: UserIdentityResolver) -> Self {
        Self {
            registration_query,
            identity,
        }
    }
}

#[async_trait]
impl<Q> ListMyRegistrationsUseCase for ListMyRegistrationsService<Q>
where
    Q: RegistrationQuery + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<Vec<Event>, ListMyRegistrationsError> {
        let user_id = self.identity.by_email(email).await.map_err(|e| match e {
            ResolveUserIdError::NotFound => ListMyRegistrationsError::UserNotFound,
            ResolveUserIdError::RepositoryError(msg) => {
                ListMyRegistrationsError::RepositoryError(msg)
            }
        })?;

        self.registration_query
            .events_for_user(user_id)
            .await
            .map_err(|RegistrationQueryError::DatabaseError(msg)| {
                ListMyRegistrationsError::RepositoryError(msg)
            })
    }
}

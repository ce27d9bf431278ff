use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::helpers::{ResolveUserIdError, UserIdentityResolver};
use crate::modules::event::application::ports::outgoing::event_query::{
    EventQuery, EventQueryError,
};
use crate::modules::registration::application::domain::entities::{EventRef, Registration};
use crate::modules::registration::application::ports::incoming::use_cases::{
    RegisterForEventError, RegisterForEventUseCase,
};
use crate::modules::registration::application::ports::outgoing::registration_repository::{
    RegistrationRepository, RegistrationRepositoryError,
};

pub struct RegisterForEventService<R, E>
where
    R: RegistrationRepository,
    E: EventQuery,
{
    registration_repository: R,
    event_query: E,
    identity: UserIdentityResolver,
}

impl<R, E> RegisterForEventService<R, E>
where
    R: RegistrationRepository,
    E: EventQuery,
{
    pub fn new(registration_repository: R, event_query: E, identity: UserIdentityResolver) -> Self {
        Self {
            registration_repository,
            event_query,
            identity,
        }
    }

    async fn resolve_event(&self, event: EventRef) -> Result<Uuid, RegisterForEventError> {
        match event {
            // Existence is checked by the foreign key on insert.
            EventRef::ById(event_id) => Ok(event_id),
            EventRef::ByName(name) => match self.event_query.find_by_name(&name).await {
                Ok(Some(event)) => Ok(event.event_id),
                Ok(None) => Err(RegisterForEventError::EventNotFound),
                Err(EventQueryError::DatabaseError(msg)) => {
                    Err(RegisterForEventError::RepositoryError(msg))
                }
            },
            EventRef::Missing => Err(RegisterForEventError::ValidationError(
                "event_id or event_name is required".to_string(),
            )),
        }
    }
}

#[async_trait]
impl<R, E> RegisterForEventUseCase for RegisterForEventService<R, E>
where
    R: RegistrationRepository + Send + Sync,
    E: EventQuery + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
        event: EventRef,
    ) -> Result<Registration, RegisterForEventError> {
        let user_id = self.identity.by_email(email).await.map_err(|e| match e {
            ResolveUserIdError::NotFound => RegisterForEventError::UserNotFound,
            ResolveUserIdError::RepositoryError(msg) => RegisterForEventError::RepositoryError(msg),
        })?;

        let event_id = self.resolve_event(event).await?;

        let registration = self
            .registration_repository
            .register(user_id, event_id)
            .await
            .map_err(|e| match e {
                RegistrationRepositoryError::AlreadyRegistered => {
                    RegisterForEventError::AlreadyRegistered
                }
                RegistrationRepositoryError::EventNotFound => RegisterForEventError::EventNotFound,
                RegistrationRepositoryError::UserNotFound => RegisterForEventError::UserNotFound,
                RegistrationRepositoryError::DatabaseError(msg) => {
                    RegisterForEventError::RepositoryError(msg)
                }
            })?;

        tracing::info!(
            user_id = %user_id,
            event_id = %event_id,
            reg_id = %registration.reg_id,
            "Registered for event"
        );
        Ok(registration)
    }
}

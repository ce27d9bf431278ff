use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::auth_helper::TEST_USER_ID;
use super::fixtures::sample_user;
use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::auth::application::helpers::{AccessControl, UserIdentityResolver};
use crate::auth::application::ports::incoming::use_cases::{
    CompleteProfileCommand, CompleteProfileError, CompleteProfileUseCase, FetchProfileError,
    FetchProfileUseCase, SignInError, SignInResult, SignInUseCase, UpdateProfileError,
    UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::auth::application::ports::outgoing::user_repository::PatchProfileData;
use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::incoming::use_cases::{
    CreateEventCommand, CreateEventError, CreateEventUseCase, DeleteEventError,
    DeleteEventUseCase, GetEventError, GetEventUseCase, ListEventsError, ListEventsUseCase,
    UpdateEventCommand, UpdateEventError, UpdateEventUseCase,
};
use crate::modules::registration::application::domain::entities::{
    EventRef, Registration, RegistrationExport,
};
use crate::modules::registration::application::ports::incoming::use_cases::{
    ExportRegistrationsError, ExportRegistrationsUseCase, ListMyRegistrationsError,
    ListMyRegistrationsUseCase, RegisterForEventError, RegisterForEventUseCase,
};

const NOT_USED: &str = "not used in this test";

/// In-memory user lookup keyed by e-mail. Admin addresses resolve to an
/// admin user, plain addresses to a student carrying `TEST_USER_ID`.
#[derive(Default, Clone)]
pub struct StubUserQuery {
    admins: HashSet<String>,
    users: HashSet<String>,
}

impl StubUserQuery {
    pub fn new(admins: &[&str], users: &[&str]) -> Self {
        Self {
            admins: admins.iter().map(|e| e.to_string()).collect(),
            users: users.iter().map(|e| e.to_string()).collect(),
        }
    }

    fn lookup(&self, email: &str) -> Option<User> {
        if self.admins.contains(email) {
            let mut admin = sample_user(email);
            admin.user_id = UserId::from(Uuid::new_v4());
            admin.role = Role::Admin;
            return Some(admin);
        }
        self.users.contains(email).then(|| sample_user(email))
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        if user_id.value() != TEST_USER_ID {
            return Ok(None);
        }
        Ok(self.users.iter().next().map(|email| sample_user(email)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.lookup(email))
    }
}

pub fn access_control_with_admins(admins: &[&str]) -> AccessControl {
    AccessControl::new(Arc::new(StubUserQuery::new(admins, &[])))
}

pub fn identity_resolver_with_users(users: &[&str]) -> UserIdentityResolver {
    UserIdentityResolver::new(Arc::new(StubUserQuery::new(&[], users)))
}

// Defaults for `TestAppStateBuilder`; each one fails loudly if a test reaches it.

pub struct UnusedSignIn;

#[async_trait]
impl SignInUseCase for UnusedSignIn {
    async fn execute(&self, _id_token: &str) -> Result<SignInResult, SignInError> {
        Err(SignInError::PersistenceError(NOT_USED.to_string()))
    }
}

pub struct UnusedFetchProfile;

#[async_trait]
impl FetchProfileUseCase for UnusedFetchProfile {
    async fn execute(&self, _email: &str) -> Result<User, FetchProfileError> {
        Err(FetchProfileError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct UnusedCompleteProfile;

#[async_trait]
impl CompleteProfileUseCase for UnusedCompleteProfile {
    async fn execute(
        &self,
        _email: &str,
        _command: CompleteProfileCommand,
    ) -> Result<User, CompleteProfileError> {
        Err(CompleteProfileError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct UnusedUpdateProfile;

#[async_trait]
impl UpdateProfileUseCase for UnusedUpdateProfile {
    async fn execute(
        &self,
        _email: &str,
        _patch: PatchProfileData,
    ) -> Result<User, UpdateProfileError> {
        Err(UpdateProfileError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct UnusedListEvents;

#[async_trait]
impl ListEventsUseCase for UnusedListEvents {
    async fn execute(&self, _include_hidden: bool) -> Result<Vec<Event>, ListEventsError> {
        Err(ListEventsError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct UnusedGetEvent;

#[async_trait]
impl GetEventUseCase for UnusedGetEvent {
    async fn execute(&self, _event_id: Uuid) -> Result<Event, GetEventError> {
        Err(GetEventError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct UnusedCreateEvent;

#[async_trait]
impl CreateEventUseCase for UnusedCreateEvent {
    async fn execute(
        &self,
        _actor_email: &str,
        _command: CreateEventCommand,
    ) -> Result<Event, CreateEventError> {
        Err(CreateEventError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct UnusedUpdateEvent;

#[async_trait]
impl UpdateEventUseCase for UnusedUpdateEvent {
    async fn execute(
        &self,
        _actor_email: &str,
        _event_id: Uuid,
        _command: UpdateEventCommand,
    ) -> Result<Event, UpdateEventError> {
        Err(UpdateEventError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct UnusedDeleteEvent;

#[async_trait]
impl DeleteEventUseCase for UnusedDeleteEvent {
    async fn execute(&self, _actor_email: &str, _event_id: Uuid) -> Result<(), DeleteEventError> {
        Err(DeleteEventError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct UnusedRegisterForEvent;

#[async_trait]
impl RegisterForEventUseCase for UnusedRegisterForEvent {
    async fn execute(
        &self,
        _email: &str,
        _event: EventRef,
    ) -> Result<Registration, RegisterForEventError> {
        Err(RegisterForEventError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct UnusedListMyRegistrations;

#[async_trait]
impl ListMyRegistrationsUseCase for UnusedListMyRegistrations {
    async fn execute(&self, _email: &str) -> Result<Vec<Event>, ListMyRegistrationsError> {
        Err(ListMyRegistrationsError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct UnusedExportRegistrations;

#[async_trait]
impl ExportRegistrationsUseCase for UnusedExportRegistrations {
    async fn execute(
        &self,
        _actor_email: &str,
        _event_id: Option<Uuid>,
    ) -> Result<RegistrationExport, ExportRegistrationsError> {
        Err(ExportRegistrationsError::RepositoryError(NOT_USED.to_string()))
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::registration::application::domain::entities::Registration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationRepositoryError {
    #[error("User is already registered for this event")]
    AlreadyRegistered,

    /// The event row vanished between lookup and insert.
    #[error("Event not found")]
    EventNotFound,

    /// The user row vanished after the session e-mail was resolved.
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Single insert guarded by the (user, event) unique index. A duplicate is
    /// reported as `AlreadyRegistered` rather than a database error.
    async fn register(
        &self,
        user_id: UserId,
        event_id: Uuid,
    ) -> Result<Registration, RegistrationRepositoryError>;
}

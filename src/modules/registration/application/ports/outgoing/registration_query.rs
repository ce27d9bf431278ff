use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::domain::entities::Event;
use crate::modules::registration::application::domain::entities::Registrant;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RegistrationQuery: Send + Sync {
    /// Events the user registered for, newest `event_date` first.
    async fn events_for_user(&self, user_id: UserId) -> Result<Vec<Event>, RegistrationQueryError>;

    /// Registrations for one event joined with user profiles, latest registration first.
    async fn registrants_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<Registrant>, RegistrationQueryError>;
}

use async_trait::async_trait;

use super::validation::{duration, event_date, optional_text, required_text};
use crate::auth::application::helpers::AccessControl;
use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::incoming::use_cases::{
    CreateEventCommand, CreateEventError, CreateEventUseCase,
};
use crate::modules::event::application::ports::outgoing::event_repository::{
    CreateEventData, EventRepository, EventRepositoryError,
};

pub struct CreateEventService<R>
where
    R: EventRepository,
{
    event_repository: R,
    access_control: AccessControl,
}

impl<R> CreateEventService<R>
where
    R: EventRepository,
{
    pub fn new(event_repository: R, access_control: AccessControl) -> Self {
        Self {
            event_repository,
            access_control,
        }
    }

    fn validate(command: CreateEventCommand) -> Result<CreateEventData, CreateEventError> {
        let event_name =
            required_text("event_name", command.event_name).map_err(CreateEventError::ValidationError)?;
        let raw_date =
            required_text("event_date", command.event_date).map_err(CreateEventError::ValidationError)?;
        let event_date = event_date(&raw_date).map_err(CreateEventError::ValidationError)?;
        let poster =
            required_text("poster", command.poster).map_err(CreateEventError::ValidationError)?;
        let duration = command
            .duration
            .map(duration)
            .transpose()
            .map_err(CreateEventError::ValidationError)?;

        Ok(CreateEventData {
            event_name,
            event_date,
            duration,
            event_description: optional_text(command.event_description),
            poster,
            reg_link: optional_text(command.reg_link),
            whatsapp_link: optional_text(command.whatsapp_link),
            venue: optional_text(command.venue),
            visibility: command.visibility.unwrap_or(true),
        })
    }
}

#[async_trait]
impl<R> CreateEventUseCase for CreateEventService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor_email: &str,
        command: CreateEventCommand,
    ) -> Result<Event, CreateEventError> {
        if !self.access_control.is_admin(actor_email).await {
            return Err(CreateEventError::Forbidden);
        }

        let data = Self::validate(command)?;

        let event = self
            .event_repository
            .create_event(data)
            .await
            .map_err(|e| match e {
                EventRepositoryError::DatabaseError(msg) => CreateEventError::RepositoryError(msg),
                EventRepositoryError::NotFound => CreateEventError::RepositoryError(
                    "unexpected not found while creating event".to_string(),
                ),
            })?;

        tracing::info!(event_id = %event.event_id, "Event created");
        Ok(event)
    }
}

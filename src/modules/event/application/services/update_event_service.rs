use async_trait::async_trait;
use uuid::Uuid;

use super::validation::{
    patch_duration, patch_event_date, patch_required_text, patch_visibility,
};
use crate::auth::application::helpers::AccessControl;
use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::incoming::use_cases::{
    UpdateEventCommand, UpdateEventError, UpdateEventUseCase,
};
use crate::modules::event::application::ports::outgoing::event_repository::{
    EventRepository, EventRepositoryError, PatchEventData,
};

pub struct UpdateEventService<R>
where
    R: EventRepository,
{
    event_repository: R,
    access_control: AccessControl,
}

impl<R> UpdateEventService<R>
where
    R: EventRepository,
{
    pub fn new(event_repository: R, access_control: AccessControl) -> Self {
        Self {
            event_repository,
            access_control,
        }
    }

    fn validate(command: UpdateEventCommand) -> Result<PatchEventData, UpdateEventError> {
        let invalid = UpdateEventError::ValidationError;

        Ok(PatchEventData {
            event_name: patch_required_text("event_name", command.event_name).map_err(invalid)?,
            event_date: patch_event_date(command.event_date).map_err(invalid)?,
            duration: patch_duration(command.duration).map_err(invalid)?,
            event_description: command.event_description.trimmed(),
            poster: patch_required_text("poster", command.poster).map_err(invalid)?,
            reg_link: command.reg_link.trimmed(),
            whatsapp_link: command.whatsapp_link.trimmed(),
            venue: command.venue.trimmed(),
            visibility: patch_visibility(command.visibility).map_err(invalid)?,
        })
    }
}

#[async_trait]
impl<R> UpdateEventUseCase for UpdateEventService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor_email: &str,
        event_id: Uuid,
        command: UpdateEventCommand,
    ) -> Result<Event, UpdateEventError> {
        if !self.access_control.is_admin(actor_email).await {
            return Err(UpdateEventError::Forbidden);
        }

        let patch = Self::validate(command)?;

        let event = self
            .event_repository
            .patch_event(event_id, patch)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => UpdateEventError::NotFound,
                EventRepositoryError::DatabaseError(msg) => UpdateEventError::RepositoryError(msg),
            })?;

        tracing::info!(event_id = %event_id, "Event updated");
        Ok(event)
    }
}

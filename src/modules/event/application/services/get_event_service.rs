use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::incoming::use_cases::{
    GetEventError, GetEventUseCase,
};
use crate::modules::event::application::ports::outgoing::event_query::{
    EventQuery, EventQueryError,
};

pub struct GetEventService<Q>
where
    Q: EventQuery,
{
    event_query: Q,
}

impl<Q> GetEventService<Q>
where
    Q: EventQuery,
{
    pub fn new(event_query: Q) -> Self {
        Self { event_query }
    }
}

#[async_trait]
impl<Q> GetEventUseCase for GetEventService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self, event_id: Uuid) -> Result<Event, GetEventError> {
        match self.event_query.get_by_id(event_id).await {
            Ok(Some(event)) => Ok(event),
            Ok(None) => Err(GetEventError::NotFound),
            Err(EventQueryError::DatabaseError(msg)) => Err(GetEventError::RepositoryError(msg)),
        }
    }
}

use async_trait::async_trait;

use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::incoming::use_cases::{
    ListEventsError, ListEventsUseCase,
};
use crate::modules::event::application::ports::outgoing::event_query::{
    EventQuery, EventQueryError,
};

pub struct ListEventsService<Q>
where
    Q: EventQuery,
{
    event_query: Q,
}

impl<Q> ListEventsService<Q>
where
    Q: EventQuery,
{
    pub fn new(event_query: Q) -> Self {
        Self { event_query }
    }
}

#[async_trait]
impl<Q> ListEventsUseCase for ListEventsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self, include_hidden: bool) -> Result<Vec<Event>, ListEventsError> {
        self.event_query
            .list(include_hidden)
            .await
            .map_err(|EventQueryError::DatabaseError(msg)| ListEventsError::RepositoryError(msg))
    }
}

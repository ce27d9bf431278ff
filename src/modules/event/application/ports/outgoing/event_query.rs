use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::domain::entities::Event;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EventQuery: Send + Sync {
    async fn get_by_id(&self, event_id: Uuid) -> Result<Option<Event>, EventQueryError>;

    /// Newest `event_date` first. Hidden events only when `include_hidden`.
    async fn list(&self, include_hidden: bool) -> Result<Vec<Event>, EventQueryError>;

    /// Exact name match; the most recent event wins when names repeat.
    async fn find_by_name(&self, event_name: &str) -> Result<Option<Event>, EventQueryError>;
}

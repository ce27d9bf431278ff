use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::events::{Column, Entity, Model};
use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::outgoing::event_query::{
    EventQuery, EventQueryError,
};

#[derive(Clone, Debug)]
pub struct EventQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_event(model: Model) -> Event {
    Event {
        event_id: model.event_id,
        event_name: model.event_name,
        event_date: model.event_date,
        duration: model.duration,
        event_description: model.event_description,
        poster: model.poster,
        reg_link: model.reg_link,
        whatsapp_link: model.whatsapp_link,
        venue: model.venue,
        visibility: model.visibility,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    }
}

fn map_db_err(e: sea_orm::DbErr) -> EventQueryError {
    EventQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EventQuery for EventQueryPostgres {
    async fn get_by_id(&self, event_id: Uuid) -> Result<Option<Event>, EventQueryError> {
        let event = Entity::find_by_id(event_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(event.map(model_to_event))
    }

    async fn list(&self, include_hidden: bool) -> Result<Vec<Event>, EventQueryError> {
        let mut query = Entity::find();
        if !include_hidden {
            query = query.filter(Column::Visibility.eq(true));
        }

        let events = query
            .order_by_desc(Column::EventDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(events.into_iter().map(model_to_event).collect())
    }

    async fn find_by_name(&self, event_name: &str) -> Result<Option<Event>, EventQueryError> {
        let event = Entity::find()
            .filter(Column::EventName.eq(event_name.trim()))
            .order_by_desc(Column::EventDate)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(event.map(model_to_event))
    }
}

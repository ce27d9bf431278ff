use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::event_query_postgres::model_to_event;
use super::sea_orm_entity::events::{ActiveModel, Column, Entity};
use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::outgoing::event_repository::{
    CreateEventData, EventRepository, EventRepositoryError, PatchEventData,
};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            event_id: Set(Uuid::new_v4()),
            event_name: Set(data.event_name),
            event_date: Set(data.event_date),
            duration: Set(data.duration),
            event_description: Set(data.event_description),
            poster: Set(data.poster),
            reg_link: Set(data.reg_link),
            whatsapp_link: Set(data.whatsapp_link),
            venue: Set(data.venue),
            visibility: Set(data.visibility),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_event(result))
    }

    async fn patch_event(
        &self,
        event_id: Uuid,
        data: PatchEventData,
    ) -> Result<Event, EventRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        apply_required(&mut model.event_name, data.event_name);
        apply_required(&mut model.event_date, data.event_date);
        apply_required(&mut model.poster, data.poster);
        apply_required(&mut model.visibility, data.visibility);
        apply_nullable(&mut model.duration, data.duration);
        apply_nullable(&mut model.event_description, data.event_description);
        apply_nullable(&mut model.reg_link, data.reg_link);
        apply_nullable(&mut model.whatsapp_link, data.whatsapp_link);
        apply_nullable(&mut model.venue, data.venue);

        // Always touched, so an empty patch still reports whether the row exists.
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::EventId.eq(event_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_event)
            .ok_or(EventRepositoryError::NotFound)
    }

    async fn delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError> {
        let result = Entity::delete_by_id(event_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            tracing::debug!(event_id = %event_id, "Delete matched no event");
        }

        Ok(())
    }
}

/// Required columns never receive `Null`; validation upstream rejects it.
fn apply_required<T>(target: &mut ActiveValue<T>, field: PatchField<T>)
where
    T: Into<sea_orm::Value>,
{
    if let PatchField::Value(v) = field {
        *target = Set(v);
    }
}

fn apply_nullable<T>(target: &mut ActiveValue<Option<T>>, field: PatchField<T>)
where
    Option<T>: Into<sea_orm::Value>,
{
    match field {
        PatchField::Unset => {}
        PatchField::Null => *target = Set(None),
        PatchField::Value(v) => *target = Set(Some(v)),
    }
}

fn map_db_err(e: DbErr) -> EventRepositoryError {
    EventRepositoryError::DatabaseError(e.to_string())
}

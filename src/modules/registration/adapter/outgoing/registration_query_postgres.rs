use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::registrations;
use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::event::adapter::outgoing::event_query_postgres::model_to_event;
use crate::modules::event::adapter::outgoing::sea_orm_entity::events;
use crate::modules::event::application::domain::entities::Event;
use crate::modules::registration::application::domain::entities::Registrant;
use crate::modules::registration::application::ports::outgoing::registration_query::{
    RegistrationQuery, RegistrationQueryError,
};

#[derive(Clone, Debug)]
pub struct RegistrationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegistrationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct RegistrantRow {
    user_name: Option<String>,
    user_email: String,
    roll_no: Option<String>,
    semester: Option<String>,
    branch: Option<String>,
    registered_at: DateTimeWithTimeZone,
}

impl From<RegistrantRow> for Registrant {
    fn from(row: RegistrantRow) -> Self {
        Self {
            user_name: row.user_name,
            user_email: row.user_email,
            roll_no: row.roll_no,
            semester: row.semester,
            branch: row.branch,
            registered_at: row.registered_at.with_timezone(&chrono::Utc),
        }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> RegistrationQueryError {
    RegistrationQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl RegistrationQuery for RegistrationQueryPostgres {
    async fn events_for_user(&self, user_id: UserId) -> Result<Vec<Event>, RegistrationQueryError> {
        let events = events::Entity::find()
            .inner_join(registrations::Entity)
            .filter(registrations::Column::UserId.eq(user_id.value()))
            .order_by_desc(events::Column::EventDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(events.into_iter().map(model_to_event).collect())
    }

    async fn registrants_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<Registrant>, RegistrationQueryError> {
        let rows = registrations::Entity::find()
            .select_only()
            .column(users::Column::UserName)
            .column(users::Column::UserEmail)
            .column(users::Column::RollNo)
            .column(users::Column::Semester)
            .column(users::Column::Branch)
            .column_as(registrations::Column::CreatedAt, "registered_at")
            .join(JoinType::InnerJoin, registrations::Relation::User.def())
            .filter(registrations::Column::EventId.eq(event_id))
            .order_by_desc(registrations::Column::CreatedAt)
            .into_model::<RegistrantRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Registrant::from).collect())
    }
}

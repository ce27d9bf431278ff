use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::registrations::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::registration::application::domain::entities::Registration;
use crate::modules::registration::application::ports::outgoing::registration_repository::{
    RegistrationRepository, RegistrationRepositoryError,
};

#[derive(Clone, Debug)]
pub struct RegistrationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegistrationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryPostgres {
    async fn register(
        &self,
        user_id: UserId,
        event_id: Uuid,
    ) -> Result<Registration, RegistrationRepositoryError> {
        let reg_id = Uuid::new_v4();
        let now = Utc::now();

        let model = ActiveModel {
            reg_id: Set(reg_id),
            user_id: Set(user_id.value()),
            event_id: Set(event_id),
            created_at: Set(now.fixed_offset()),
        };

        // The unique (user_id, event_id) index decides; no prior existence check.
        let inserted = Entity::insert(model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::EventId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_insert_err)?;

        if inserted == 0 {
            return Err(RegistrationRepositoryError::AlreadyRegistered);
        }

        Ok(Registration {
            reg_id,
            user_id,
            event_id,
            created_at: now,
        })
    }
}

const EVENT_FK: &str = "fk_registrations_event_id";
const USER_FK: &str = "fk_registrations_user_id";

/// Foreign-key violations are told apart by the constraint names the
/// registrations migration declares.
fn map_insert_err(e: DbErr) -> RegistrationRepositoryError {
    let message = match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(message)) => message,
        _ => e.to_string(),
    };

    if !message.contains("violates foreign key constraint") {
        return RegistrationRepositoryError::DatabaseError(e.to_string());
    }
    if message.contains(EVENT_FK) {
        RegistrationRepositoryError::EventNotFound
    } else if message.contains(USER_FK) {
        RegistrationRepositoryError::UserNotFound
    } else {
        tracing::error!("Unexpected foreign key violation on registrations: {}", message);
        RegistrationRepositoryError::DatabaseError(e.to_string())
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{ActiveModel, Column, Entity};
use super::user_query_postgres::model_to_user;
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_repository::{
    CompleteProfileData, PatchProfileData, SignInProfile, UserRepository, UserRepositoryError,
};
use crate::shared::patch_field::PatchField;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn upsert_on_sign_in(&self, profile: SignInProfile) -> Result<User, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            user_id: Set(Uuid::new_v4()),
            user_email: Set(profile.email.trim().to_lowercase()),
            user_name: Set(profile.display_name),
            profile_pic: Set(profile.avatar_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        // Existing rows keep their values; only NULL name/picture are filled in.
        let on_conflict = OnConflict::column(Column::UserEmail)
            .value(
                Column::UserName,
                Expr::cust("COALESCE(users.user_name, EXCLUDED.user_name)"),
            )
            .value(
                Column::ProfilePic,
                Expr::cust("COALESCE(users.profile_pic, EXCLUDED.profile_pic)"),
            )
            .to_owned();

        let result = Entity::insert(model)
            .on_conflict(on_conflict)
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_user(result))
    }

    async fn complete_profile(
        &self,
        email: &str,
        data: CompleteProfileData,
    ) -> Result<User, UserRepositoryError> {
        let model = ActiveModel {
            roll_no: Set(Some(data.roll_no)),
            semester: Set(Some(data.semester)),
            branch: Set(Some(data.branch)),
            user_name: match data.user_name {
                Some(name) => Set(Some(name)),
                None => NotSet,
            },
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::UserEmail.eq(email.trim().to_lowercase()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_user)
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn patch_profile(
        &self,
        email: &str,
        data: PatchProfileData,
    ) -> Result<User, UserRepositoryError> {
        let email = email.trim().to_lowercase();
        let mut model = <ActiveModel as Default>::default();

        apply(&mut model.user_name, data.user_name);
        apply(&mut model.profile_pic, data.profile_pic);
        apply(&mut model.roll_no, data.roll_no);
        apply(&mut model.semester, data.semester);
        apply(&mut model.branch, data.branch);
        apply(&mut model.college_name, data.college_name);

        let has_changes = model.user_name.is_set()
            || model.profile_pic.is_set()
            || model.roll_no.is_set()
            || model.semester.is_set()
            || model.branch.is_set()
            || model.college_name.is_set();

        if !has_changes {
            return Entity::find()
                .filter(Column::UserEmail.eq(email))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(model_to_user)
                .ok_or(UserRepositoryError::NotFound);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::UserEmail.eq(email))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_user)
            .ok_or(UserRepositoryError::NotFound)
    }
}

fn apply(target: &mut sea_orm::ActiveValue<Option<String>>, field: PatchField<String>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *target = Set(None),
        PatchField::Value(v) => *target = Set(Some(v)),
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    fn user_model(name: Option<&str>, branch: Option<&str>) -> UserModel {
        let now = Utc::now();
        UserModel {
            user_id: Uuid::new_v4(),
            user_email: "student@gitam.in".to_string(),
            user_name: name.map(str::to_string),
            profile_pic: None,
            roll_no: None,
            semester: None,
            branch: branch.map(str::to_string),
            college_name: None,
            role: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn upsert_is_a_single_statement_with_backfill() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(Some("Existing Name"), None)]])
            .into_connection();
        let db = Arc::new(db);

        let repo = UserRepositoryPostgres::new(db.clone());
        let user = repo
            .upsert_on_sign_in(SignInProfile {
                email: "Student@gitam.in".to_string(),
                display_name: Some("Provider Name".to_string()),
                avatar_url: None,
            })
            .await
            .unwrap();

        assert_eq!(user.user_name.as_deref(), Some("Existing Name"));

        drop(repo);
        let log: Vec<Transaction> = match Arc::try_unwrap(db) {
            Ok(conn) => conn.into_transaction_log(),
            Err(_) => panic!("connection still shared"),
        };
        assert_eq!(log.len(), 1);

        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("ON CONFLICT"));
        assert!(sql.contains("COALESCE(users.user_name, EXCLUDED.user_name)"));
        assert!(sql.contains("COALESCE(users.profile_pic, EXCLUDED.profile_pic)"));
    }

    #[tokio::test]
    async fn upsert_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("pool timed out".to_string())])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .upsert_on_sign_in(SignInProfile {
                email: "student@gitam.in".to_string(),
                display_name: None,
                avatar_url: None,
            })
            .await;

        assert!(matches!(result, Err(UserRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn complete_profile_returns_updated_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(Some("Student"), Some("CSE"))]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo
            .complete_profile(
                "student@gitam.in",
                CompleteProfileData {
                    roll_no: "R1".to_string(),
                    semester: "5".to_string(),
                    branch: "CSE".to_string(),
                    user_name: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(user.branch.as_deref(), Some("CSE"));
    }

    #[tokio::test]
    async fn complete_profile_without_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .complete_profile(
                "ghost@gitam.in",
                CompleteProfileData {
                    roll_no: "R1".to_string(),
                    semester: "5".to_string(),
                    branch: "CSE".to_string(),
                    user_name: None,
                },
            )
            .await;

        assert_eq!(result.unwrap_err(), UserRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn patch_profile_sets_null_for_cleared_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(Some("Student"), None)]])
            .into_connection();
        let db = Arc::new(db);

        let repo = UserRepositoryPostgres::new(db.clone());
        let user = repo
            .patch_profile(
                "student@gitam.in",
                PatchProfileData {
                    branch: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(user.branch.is_none());

        drop(repo);
        let log = match Arc::try_unwrap(db) {
            Ok(conn) => conn.into_transaction_log(),
            Err(_) => panic!("connection still shared"),
        };
        assert_eq!(log.len(), 1);
        assert!(format!("{:?}", log[0]).contains("UPDATE"));
    }

    #[tokio::test]
    async fn patch_profile_without_changes_reads_current_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(Some("Student"), Some("EEE"))]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let user = repo
            .patch_profile("student@gitam.in", PatchProfileData::default())
            .await
            .unwrap();

        assert_eq!(user.branch.as_deref(), Some("EEE"));
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::helpers::AccessControl;
use crate::modules::event::application::ports::incoming::use_cases::{
    DeleteEventError, DeleteEventUseCase,
};
use crate::modules::event::application::ports::outgoing::event_repository::{
    EventRepository, EventRepositoryError,
};

pub struct DeleteEventService<R>
where
    R: EventRepository,
{
    event_repository: R,
    access_control: AccessControl,
}

impl<R> DeleteEventService<R>
where
    R: EventRepository,
{
    pub fn new(event_repository: R, access_control: AccessControl) -> Self {
        Self {
            event_repository,
            access_control,
        }
    }
}

#[async_trait]
impl<R> DeleteEventUseCase for DeleteEventService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, actor_email: &str, event_id: Uuid) -> Result<(), DeleteEventError> {
        if !self.access_control.is_admin(actor_email).await {
            return Err(DeleteEventError::Forbidden);
        }

        match self.event_repository.delete_event(event_id).await {
            Ok(()) => {
                tracing::info!(event_id = %event_id, "Event deleted");
                Ok(())
            }
            // Deleting a missing row is still a success.
            Err(EventRepositoryError::NotFound) => Ok(()),
            Err(EventRepositoryError::DatabaseError(msg)) => {
                Err(DeleteEventError::RepositoryError(msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::event::application::domain::entities::Event;
    use crate::modules::event::application::ports::outgoing::event_repository::{
        CreateEventData, PatchEventData,
    };
    use crate::tests::support::stubs::access_control_with_admins;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub EventRepo {}
        #[async_trait]
        impl EventRepository for EventRepo {
            async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError>;
            async fn patch_event(&self, event_id: Uuid, data: PatchEventData) -> Result<Event, EventRepositoryError>;
            async fn delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError>;
        }
    }

    fn service(repo: MockEventRepo) -> DeleteEventService<MockEventRepo> {
        DeleteEventService::new(repo, access_control_with_admins(&["admin@gitam.in"]))
    }

    #[tokio::test]
    async fn admin_deletes_event() {
        let event_id = Uuid::new_v4();
        let mut repo = MockEventRepo::new();
        repo.expect_delete_event()
            .with(eq(event_id))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).execute("admin@gitam.in", event_id).await.is_ok());
    }

    #[tokio::test]
    async fn missing_row_is_still_success() {
        let mut repo = MockEventRepo::new();
        repo.expect_delete_event()
            .returning(|_| Err(EventRepositoryError::NotFound));

        assert!(service(repo)
            .execute("admin@gitam.in", Uuid::new_v4())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn non_admin_is_forbidden() {
        let mut repo = MockEventRepo::new();
        repo.expect_delete_event().times(0);

        assert_eq!(
            service(repo)
                .execute("student@gitam.in", Uuid::new_v4())
                .await
                .unwrap_err(),
            DeleteEventError::Forbidden
        );
    }

    #[tokio::test]
    async fn database_error_is_reported() {
        let mut repo = MockEventRepo::new();
        repo.expect_delete_event()
            .returning(|_| Err(EventRepositoryError::DatabaseError("lock timeout".to_string())));

        assert!(matches!(
            service(repo).execute("admin@gitam.in", Uuid::new_v4()).await,
            Err(DeleteEventError::RepositoryError(_))
        ));
    }
}

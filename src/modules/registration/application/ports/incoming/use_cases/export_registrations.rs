use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::registration::application::domain::entities::RegistrationExport;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportRegistrationsError {
    #[error("administrator privileges required")]
    Forbidden,

    #[error("{0}")]
    ValidationError(String),

    #[error("event not found")]
    EventNotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ExportRegistrationsUseCase: Send + Sync {
    async fn execute(
        &self,
        actor_email: &str,
        event_id: Option<Uuid>,
    ) -> Result<RegistrationExport, ExportRegistrationsError>;
}

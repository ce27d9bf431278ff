use async_trait::async_trait;

use crate::auth::application::domain::entities::{EmailDomainPolicy, User};
use crate::auth::application::ports::incoming::use_cases::{
    CompleteProfileCommand, CompleteProfileError, CompleteProfileUseCase,
};
use crate::auth::application::ports::outgoing::user_repository::{
    CompleteProfileData, UserRepository, UserRepositoryError,
};

pub struct CompleteProfileService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> CompleteProfileService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, CompleteProfileError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CompleteProfileError::ValidationError(format!("{} is required", field)))
}

#[async_trait]
impl<R> CompleteProfileUseCase for CompleteProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
        command: CompleteProfileCommand,
    ) -> Result<User, CompleteProfileError> {
        let data = CompleteProfileData {
            roll_no: require("roll_no", command.roll_no)?,
            semester: require("semester", command.semester)?,
            branch: require("branch", command.branch)?,
            user_name: command
                .user_name
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        };

        let email = EmailDomainPolicy::normalize(email);

        self.user_repository
            .complete_profile(&email, data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => CompleteProfileError::NotFound,
                UserRepositoryError::DatabaseError(msg) => {
                    CompleteProfileError::RepositoryError(msg)
                }
            })
    }
}

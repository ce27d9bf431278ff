use async_trait::async_trait;

use crate::auth::application::domain::entities::{EmailDomainPolicy, User};
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::user_repository::{
    PatchProfileData, UserRepository, UserRepositoryError,
};

pub struct UpdateProfileService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
        patch: PatchProfileData,
    ) -> Result<User, UpdateProfileError> {
        if patch.is_empty() {
            return Err(UpdateProfileError::ValidationError(
                "at least one field must be provided".to_string(),
            ));
        }

        // Blank strings clear the column.
        let patch = PatchProfileData {
            user_name: patch.user_name.trimmed(),
            profile_pic: patch.profile_pic.trimmed(),
            roll_no: patch.roll_no.trimmed(),
            semester: patch.semester.trimmed(),
            branch: patch.branch.trimmed(),
            college_name: patch.college_name.trimmed(),
        };

        let email = EmailDomainPolicy::normalize(email);

        self.user_repository
            .patch_profile(&email, patch)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UpdateProfileError::NotFound,
                UserRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::user_repository::{
        CompleteProfileData, SignInProfile,
    };
    use crate::shared::patch_field::PatchField;
    use crate::tests::support::fixtures::sample_user;
    use mockall::mock;

    mock! {
        pub UserRepo {}
        #[async_trait]
        impl UserRepository for UserRepo {
            async fn upsert_on_sign_in(&self, profile: SignInProfile) -> Result<User, UserRepositoryError>;
            async fn complete_profile(&self, email: &str, data: CompleteProfileData) -> Result<User, UserRepositoryError>;
            async fn patch_profile(&self, email: &str, data: PatchProfileData) -> Result<User, UserRepositoryError>;
        }
    }

    #[tokio::test]
    async fn empty_patch_is_rejected() {
        let mut repo = MockUserRepo::new();
        repo.expect_patch_profile().times(0);

        let result = UpdateProfileService::new(repo)
            .execute("student@gitam.in", PatchProfileData::default())
            .await;

        assert!(matches!(result, Err(UpdateProfileError::ValidationError(_))));
    }

    #[tokio::test]
    async fn omitted_fields_stay_unset_and_blank_becomes_null() {
        let mut repo = MockUserRepo::new();
        repo.expect_patch_profile()
            .withf(|_, data| {
                data.branch == PatchField::Value("ECE".to_string())
                    && data.college_name == PatchField::Null
                    && data.roll_no.is_unset()
                    && data.user_name.is_unset()
            })
            .times(1)
            .returning(|email, _| Ok(sample_user(email)));

        let patch = PatchProfileData {
            branch: PatchField::Value(" ECE ".to_string()),
            college_name: PatchField::Value("".to_string()),
            ..Default::default()
        };

        let result = UpdateProfileService::new(repo)
            .execute("student@gitam.in", patch)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let mut repo = MockUserRepo::new();
        repo.expect_patch_profile()
            .returning(|_, _| Err(UserRepositoryError::NotFound));

        let patch = PatchProfileData {
            semester: PatchField::Value("6".to_string()),
            ..Default::default()
        };

        let result = UpdateProfileService::new(repo)
            .execute("ghost@gitam.in", patch)
            .await;

        assert_eq!(result.unwrap_err(), UpdateProfileError::NotFound);
    }
}

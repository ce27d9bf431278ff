use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::shared::patch_field::PatchField;

/// Identity-provider data captured at sign-in.
#[derive(Debug, Clone, PartialEq)]
pub struct SignInProfile {
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompleteProfileData {
    pub roll_no: String,
    pub semester: String,
    pub branch: String,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProfileData {
    pub user_name: PatchField<String>,
    pub profile_pic: PatchField<String>,
    pub roll_no: PatchField<String>,
    pub semester: PatchField<String>,
    pub branch: PatchField<String>,
    pub college_name: PatchField<String>,
}

impl PatchProfileData {
    pub fn is_empty(&self) -> bool {
        self.user_name.is_unset()
            && self.profile_pic.is_unset()
            && self.roll_no.is_unset()
            && self.semester.is_unset()
            && self.branch.is_unset()
            && self.college_name.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user or, when the e-mail exists, only fills `user_name` and
    /// `profile_pic` that are still NULL. Runs as one statement.
    async fn upsert_on_sign_in(&self, profile: SignInProfile) -> Result<User, UserRepositoryError>;

    async fn complete_profile(
        &self,
        email: &str,
        data: CompleteProfileData,
    ) -> Result<User, UserRepositoryError>;

    async fn patch_profile(
        &self,
        email: &str,
        data: PatchProfileData,
    ) -> Result<User, UserRepositoryError>;
}

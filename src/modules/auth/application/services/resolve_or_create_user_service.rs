use async_trait::async_trait;

use crate::auth::application::domain::entities::{EmailDomainPolicy, User};
use crate::auth::application::ports::incoming::use_cases::{
    ResolveOrCreateUserError, ResolveOrCreateUserUseCase,
};
use crate::auth::application::ports::outgoing::user_repository::{
    SignInProfile, UserRepository, UserRepositoryError,
};

pub struct ResolveOrCreateUserService<R>
where
    R: UserRepository,
{
    user_repository: R,
    domain_policy: EmailDomainPolicy,
}

impl<R> ResolveOrCreateUserService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R, domain_policy: EmailDomainPolicy) -> Self {
        Self {
            user_repository,
            domain_policy,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl<R> ResolveOrCreateUserUseCase for ResolveOrCreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, profile: SignInProfile) -> Result<User, ResolveOrCreateUserError> {
        if !self.domain_policy.allows(&profile.email) {
            tracing::warn!("Sign-in rejected: e-mail outside the allowed domain");
            return Err(ResolveOrCreateUserError::AuthDomainRejected);
        }

        let profile = SignInProfile {
            email: EmailDomainPolicy::normalize(&profile.email),
            display_name: non_blank(profile.display_name),
            avatar_url: non_blank(profile.avatar_url),
        };

        self.user_repository
            .upsert_on_sign_in(profile)
            .await
            .map_err(|e| match e {
                UserRepositoryError::DatabaseError(msg) => {
                    ResolveOrCreateUserError::AuthPersistenceError(msg)
                }
                UserRepositoryError::NotFound => ResolveOrCreateUserError::AuthPersistenceError(
                    "upsert returned no row".to_string(),
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::user_repository::{
        CompleteProfileData, PatchProfileData,
    };
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

    fn service(repo: MockUserRepo) -> ResolveOrCreateUserService<MockUserRepo> {
        ResolveOrCreateUserService::new(repo, EmailDomainPolicy::new("gitam.in"))
    }

    #[tokio::test]
    async fn rejected_domain_writes_nothing() {
        let mut repo = MockUserRepo::new();
        repo.expect_upsert_on_sign_in().times(0);

        let result = service(repo)
            .execute(SignInProfile {
                email: "someone@gmail.com".to_string(),
                display_name: Some("Someone".to_string()),
                avatar_url: None,
            })
            .await;

        assert_eq!(result.unwrap_err(), ResolveOrCreateUserError::AuthDomainRejected);
    }

    #[tokio::test]
    async fn email_is_lowercased_and_blank_fields_dropped() {
        let mut repo = MockUserRepo::new();
        repo.expect_upsert_on_sign_in()
            .withf(|p| {
                p.email == "student@gitam.in"
                    && p.display_name.as_deref() == Some("Student")
                    && p.avatar_url.is_none()
            })
            .times(1)
            .returning(|p| Ok(sample_user(&p.email)));

        let user = service(repo)
            .execute(SignInProfile {
                email: "  Student@GITAM.in ".to_string(),
                display_name: Some(" Student ".to_string()),
                avatar_url: Some("   ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(user.user_email, "student@gitam.in");
    }

    #[tokio::test]
    async fn store_failure_is_persistence_error() {
        let mut repo = MockUserRepo::new();
        repo.expect_upsert_on_sign_in()
            .returning(|_| Err(UserRepositoryError::DatabaseError("conn reset".to_string())));

        let result = service(repo)
            .execute(SignInProfile {
                email: "student@gitam.in".to_string(),
                display_name: None,
                avatar_url: None,
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            ResolveOrCreateUserError::AuthPersistenceError("conn reset".to_string())
        );
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::incoming::use_cases::{
    ResolveOrCreateUserError, ResolveOrCreateUserUseCase, SignInError, SignInResult,
    SignInUseCase,
};
use crate::auth::application::ports::outgoing::identity_verifier::IdentityVerifier;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::user_repository::SignInProfile;

/// Verifies the identity assertion, resolves the user and issues a session token.
pub struct SignInOrchestrator {
    identity_verifier: Arc<dyn IdentityVerifier + Send + Sync>,
    resolve_or_create_user: Arc<dyn ResolveOrCreateUserUseCase + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl SignInOrchestrator {
    pub fn new(
        identity_verifier: Arc<dyn IdentityVerifier + Send + Sync>,
        resolve_or_create_user: Arc<dyn ResolveOrCreateUserUseCase + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            identity_verifier,
            resolve_or_create_user,
            token_provider,
        }
    }
}

#[async_trait]
impl SignInUseCase for SignInOrchestrator {
    async fn execute(&self, id_token: &str) -> Result<SignInResult, SignInError> {
        let identity = self
            .identity_verifier
            .verify(id_token)
            .await
            .map_err(|e| SignInError::InvalidIdentity(e.to_string()))?;

        let user = self
            .resolve_or_create_user
            .execute(SignInProfile {
                email: identity.email,
                display_name: identity.name,
                avatar_url: identity.picture,
            })
            .await
            .map_err(|e| match e {
                ResolveOrCreateUserError::AuthDomainRejected => SignInError::DomainRejected,
                ResolveOrCreateUserError::AuthPersistenceError(msg) => {
                    SignInError::PersistenceError(msg)
                }
            })?;

        let issued = self
            .token_provider
            .generate_session_token(user.user_id.value(), &user.user_email)
            .map_err(|e| SignInError::TokenIssueFailed(e.to_string()))?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInResult {
            access_token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in,
            user_id: user.user_id,
            profile_complete: user.is_profile_complete(),
        })
    }
}

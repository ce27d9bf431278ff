use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use super::jwt_config::IdentityAssertionConfig;
use crate::auth::application::ports::outgoing::identity_verifier::{
    IdentityVerificationError, IdentityVerifier, VerifiedIdentity,
};

#[derive(Debug, Deserialize)]
struct AssertionClaims {
    email: String,
    #[serde(default)]
    email_verified: Option<bool>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

/// Checks the HS256 assertion handed over by the identity-provider bridge.
#[derive(Clone)]
pub struct IdentityAssertionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl IdentityAssertionVerifier {
    pub fn new(config: &IdentityAssertionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.set_audience(&[config.client_id.as_str()]);
        validation.set_required_spec_claims(&["exp", "aud"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.client_secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl IdentityVerifier for IdentityAssertionVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, IdentityVerificationError> {
        let claims = decode::<AssertionClaims>(id_token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => IdentityVerificationError::Expired,
                _ => {
                    tracing::warn!("Identity assertion rejected: {}", e);
                    IdentityVerificationError::Invalid(e.to_string())
                }
            })?;

        if claims.email_verified == Some(false) {
            return Err(IdentityVerificationError::Invalid(
                "e-mail not verified by provider".to_string(),
            ));
        }

        Ok(VerifiedIdentity {
            email: claims.email,
            name: claims.name,
            picture: claims.picture,
        })
    }
}

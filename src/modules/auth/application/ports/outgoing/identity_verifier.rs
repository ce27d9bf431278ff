use async_trait::async_trait;

/// Claims the identity provider vouches for.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityVerificationError {
    #[error("Identity assertion expired")]
    Expired,

    #[error("Identity assertion rejected: {0}")]
    Invalid(String),
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, IdentityVerificationError>;
}

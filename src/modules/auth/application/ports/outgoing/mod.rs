pub mod identity_verifier;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use identity_verifier::{IdentityVerificationError, IdentityVerifier, VerifiedIdentity};
pub use token_provider::{IssuedToken, SessionClaims, TokenError, TokenProvider};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{
    CompleteProfileData, PatchProfileData, SignInProfile, UserRepository, UserRepositoryError,
};

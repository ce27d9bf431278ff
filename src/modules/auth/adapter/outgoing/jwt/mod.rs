pub mod identity_assertion;
pub mod jwt_config;
pub mod jwt_service;

pub use identity_assertion::IdentityAssertionVerifier;
pub use jwt_config::{IdentityAssertionConfig, JwtConfig};
pub use jwt_service::JwtTokenService;

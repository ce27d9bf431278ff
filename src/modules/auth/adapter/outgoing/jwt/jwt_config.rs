/// Session token signing settings, built by `AppConfig`.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_token_expiry: i64, // seconds
}

/// Shared secret and audience used to check identity-provider assertions.
#[derive(Debug, Clone)]
pub struct IdentityAssertionConfig {
    pub client_id: String,
    pub client_secret: String,
}

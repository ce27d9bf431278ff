use std::sync::Arc;

use actix_web::web;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    IssuedToken, SessionClaims, TokenError, TokenProvider,
};

pub const TEST_USER_ID: Uuid = Uuid::from_u128(0x5e55_1011_0000_4000_8000_0000_0000_0001);

const TOKEN_PREFIX: &str = "session:";

/// Accepts `session:<email>` as a valid token for `<email>`.
pub struct StubTokenProvider;

impl TokenProvider for StubTokenProvider {
    fn generate_session_token(
        &self,
        _user_id: Uuid,
        email: &str,
    ) -> Result<IssuedToken, TokenError> {
        Ok(IssuedToken {
            token: format!("{}{}", TOKEN_PREFIX, email),
            expires_in: 3600,
        })
    }

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let email = token
            .strip_prefix(TOKEN_PREFIX)
            .filter(|e| !e.is_empty())
            .ok_or(TokenError::MalformedToken)?;
        let now = Utc::now().timestamp();

        Ok(SessionClaims {
            sub: TEST_USER_ID,
            email: email.to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "session".to_string(),
        })
    }
}

pub fn bearer(email: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}{}", TOKEN_PREFIX, email))
}

pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(StubTokenProvider) as Arc<dyn TokenProvider + Send + Sync>)
}

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::auth::application::ports::outgoing::token_provider::{
    IssuedToken, SessionClaims, TokenError, TokenProvider,
};

const SESSION_TOKEN_TYPE: &str = "session";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        email: &str,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = SessionClaims {
            sub: user_id,
            email: email.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn decode_claims(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|decoded| decoded.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Session token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid session token signature");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Session token rejected: {}", e);
                        TokenError::MalformedToken
                    }
                }
            })
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_session_token(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<IssuedToken, TokenError> {
        let expires_in = self.config.session_token_expiry;
        let token = self.generate_token(user_id, email, SESSION_TOKEN_TYPE, expires_in)?;

        Ok(IssuedToken { token, expires_in })
    }

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let claims = self.decode_claims(token)?;

        if claims.token_type != SESSION_TOKEN_TYPE {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                SESSION_TOKEN_TYPE,
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(SESSION_TOKEN_TYPE.to_string()));
        }

        Ok(claims)
    }
}

use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{SignInError, SignInResult};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SignInRequest {
    /// Identity assertion issued by the identity-provider bridge
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub id_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct SignInResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    access_token: String,
    #[schema(example = "Bearer")]
    token_type: String,
    #[schema(example = 86400)]
    expires_in: i64,
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    user_id: String,
    #[schema(example = false)]
    profile_complete: bool,
}

impl From<SignInResult> for SignInResponse {
    fn from(result: SignInResult) -> Self {
        Self {
            access_token: result.access_token,
            token_type: result.token_type,
            expires_in: result.expires_in,
            user_id: result.user_id.to_string(),
            profile_complete: result.profile_complete,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/sign-in",
    tag = "auth",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Session issued", body = inline(SuccessResponse<SignInResponse>)),
        (status = 400, description = "Missing assertion", body = ErrorResponse),
        (status = 401, description = "Assertion rejected", body = ErrorResponse),
        (
            status = 403,
            description = "E-mail outside the institutional domain",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "DOMAIN_REJECTED", "message": "Sign-in is restricted to the institutional e-mail domain" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/sign-in")]
pub async fn sign_in_handler(
    req: web::Json<SignInRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id_token = req.into_inner().id_token;
    if id_token.trim().is_empty() {
        return ApiResponse::validation_error("id_token is required");
    }

    match data.auth.sign_in.execute(id_token.trim()).await {
        Ok(result) => ApiResponse::success(SignInResponse::from(result)),
        Err(SignInError::InvalidIdentity(msg)) => {
            warn!(error = %msg, "Sign-in rejected");
            ApiResponse::unauthorized("INVALID_TOKEN", "Identity assertion rejected")
        }
        Err(SignInError::DomainRejected) => ApiResponse::forbidden(
            "DOMAIN_REJECTED",
            "Sign-in is restricted to the institutional e-mail domain",
        ),
        Err(e @ SignInError::PersistenceError(_)) | Err(e @ SignInError::TokenIssueFailed(_)) => {
            error!(error = %e, "Sign-in failed");
            ApiResponse::internal_error()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::incoming::use_cases::SignInUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockSignIn {
        result: Result<SignInResult, SignInError>,
    }

    #[async_trait]
    impl SignInUseCase for MockSignIn {
        async fn execute(&self, _id_token: &str) -> Result<SignInResult, SignInError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<SignInResult, SignInError>, id_token: &str) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_sign_in(MockSignIn { result })
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(sign_in_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/sign-in")
            .set_json(serde_json::json!({ "id_token": id_token }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_session_token() {
        let user_id = UserId::from(Uuid::new_v4());
        let (status, body) = call(
            Ok(SignInResult {
                access_token: "session-token".to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 86400,
                user_id,
                profile_complete: true,
            }),
            "assertion",
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["access_token"], "session-token");
        assert_eq!(body["data"]["user_id"], user_id.to_string());
        assert_eq!(body["data"]["profile_complete"], true);
    }

    #[actix_web::test]
    async fn rejected_domain_is_forbidden() {
        let (status, body) = call(Err(SignInError::DomainRejected), "assertion").await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "DOMAIN_REJECTED");
    }

    #[actix_web::test]
    async fn invalid_assertion_is_unauthorized() {
        let (status, body) = call(
            Err(SignInError::InvalidIdentity("bad signature".to_string())),
            "assertion",
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn persistence_failure_is_internal_error() {
        let (status, body) = call(
            Err(SignInError::PersistenceError("db down".to_string())),
            "assertion",
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn blank_assertion_is_validation_error() {
        let (status, body) = call(Err(SignInError::DomainRejected), "   ").await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

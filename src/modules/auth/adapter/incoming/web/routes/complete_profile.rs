use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use super::fetch_profile::{user_not_found, UserProfileResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::auth::application::ports::incoming::use_cases::{
    CompleteProfileCommand, CompleteProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompleteProfileRequest {
    #[schema(example = "HU21CSEN0100001")]
    pub roll_no: Option<String>,
    #[schema(example = "5")]
    pub semester: Option<String>,
    #[schema(example = "CSE")]
    pub branch: Option<String>,
    pub user_name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/user-profile",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = CompleteProfileRequest,
    responses(
        (status = 200, description = "Profile completed", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 400, description = "Missing roll number, semester or branch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "No user row for the session e-mail", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/user-profile")]
pub async fn complete_profile_handler(
    user: SessionUser,
    req: web::Json<CompleteProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = CompleteProfileCommand {
        roll_no: req.roll_no,
        semester: req.semester,
        branch: req.branch,
        user_name: req.user_name,
    };

    match data.auth.complete_profile.execute(&user.email, command).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Profile completed");
            ApiResponse::success(UserProfileResponse::from(profile))
        }
        Err(CompleteProfileError::ValidationError(msg)) => ApiResponse::validation_error(&msg),
        Err(CompleteProfileError::NotFound) => user_not_found(),
        Err(CompleteProfileError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Failed to complete profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{route, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use super::fetch_profile::{user_not_found, UserProfileResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::auth::application::ports::incoming::use_cases::UpdateProfileError;
use crate::auth::application::ports::outgoing::user_repository::PatchProfileData;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

/// Omitted keys are left untouched; `null` clears the field.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub user_name: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub profile_pic: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub roll_no: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub semester: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub branch: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub college_name: PatchField<String>,
}

impl From<UpdateProfileRequest> for PatchProfileData {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            user_name: req.user_name,
            profile_pic: req.profile_pic,
            roll_no: req.roll_no,
            semester: req.semester,
            branch: req.branch,
            college_name: req.college_name,
        }
    }
}

#[utoipa::path(
    patch,
    path = "/api/user-profile",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 400, description = "Empty or malformed patch", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "No user row for the session e-mail", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[route("/api/user-profile", method = "PUT", method = "PATCH")]
pub async fn update_profile_handler(
    user: SessionUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = PatchProfileData::from(req.into_inner());

    match data.auth.update_profile.execute(&user.email, patch).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success(UserProfileResponse::from(profile))
        }
        Err(UpdateProfileError::ValidationError(msg)) => ApiResponse::validation_error(&msg),
        Err(UpdateProfileError::NotFound) => user_not_found(),
        Err(UpdateProfileError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Failed to update profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

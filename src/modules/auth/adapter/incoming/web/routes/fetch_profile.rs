use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::auth::application::domain::entities::{Role, User};
use crate::auth::application::ports::incoming::use_cases::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfileResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: String,
    #[schema(example = "student@gitam.in")]
    pub user_email: String,
    pub user_name: Option<String>,
    pub profile_pic: Option<String>,
    #[schema(example = "HU21CSEN0100001")]
    pub roll_no: Option<String>,
    #[schema(example = "5")]
    pub semester: Option<String>,
    #[schema(example = "CSE")]
    pub branch: Option<String>,
    pub college_name: Option<String>,
    #[schema(example = "user")]
    pub role: String,
    pub profile_complete: bool,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        let profile_complete = user.is_profile_complete();
        let role = match user.role {
            Role::User => "user",
            Role::Admin => "admin",
            Role::SuperAdmin => "superadmin",
        };

        Self {
            user_id: user.user_id.to_string(),
            user_email: user.user_email,
            user_name: user.user_name,
            profile_pic: user.profile_pic,
            roll_no: user.roll_no,
            semester: user.semester,
            branch: user.branch,
            college_name: user.college_name,
            role: role.to_string(),
            profile_complete,
        }
    }
}

pub(super) fn user_not_found() -> HttpResponse {
    ApiResponse::not_found("USER_NOT_FOUND", "User not found")
}

#[utoipa::path(
    get,
    path = "/api/user-profile",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile of the session user", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "No user row for the session e-mail", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/user-profile")]
pub async fn fetch_profile_handler(
    user: SessionUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.execute(&user.email).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse::from(profile)),
        Err(FetchProfileError::NotFound) => user_not_found(),
        Err(FetchProfileError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Failed to fetch profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

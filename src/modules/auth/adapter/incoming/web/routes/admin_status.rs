use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct AdminStatusResponse {
    #[schema(example = false)]
    is_admin: bool,
}

#[utoipa::path(
    get,
    path = "/api/auth/admin-status",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Whether the session user is an administrator", body = inline(SuccessResponse<AdminStatusResponse>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse)
    )
)]
#[get("/api/auth/admin-status")]
pub async fn admin_status_handler(
    user: SessionUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let is_admin = data.access_control.is_admin(&user.email).await;
    ApiResponse::success(AdminStatusResponse { is_admin })
}

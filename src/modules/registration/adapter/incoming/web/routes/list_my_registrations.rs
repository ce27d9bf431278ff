use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::modules::event::adapter::incoming::web::routes::EventResponse;
use crate::modules::registration::application::ports::incoming::use_cases::ListMyRegistrationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct MyRegistrationsResponse {
    pub events: Vec<EventResponse>,
}

pub(super) fn user_not_found() -> HttpResponse {
    ApiResponse::not_found("USER_NOT_FOUND", "User not found")
}

#[utoipa::path(
    get,
    path = "/api/event-registration",
    tag = "registrations",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Events the session user registered for, newest first", body = inline(SuccessResponse<MyRegistrationsResponse>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "No user row for the session e-mail", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/event-registration")]
pub async fn list_my_registrations_handler(
    user: SessionUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.registration.list_mine.execute(&user.email).await {
        Ok(events) => ApiResponse::success(MyRegistrationsResponse {
            events: events.into_iter().map(EventResponse::from).collect(),
        }),
        Err(ListMyRegistrationsError::UserNotFound) => user_not_found(),
        Err(ListMyRegistrationsError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Failed to list registrations: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

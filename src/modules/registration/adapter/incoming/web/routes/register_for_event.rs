use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::list_my_registrations::user_not_found;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::modules::registration::application::domain::entities::EventRef;
use crate::modules::registration::application::ports::incoming::use_cases::RegisterForEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Either field identifies the event; `event_id` wins when both are sent.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct RegisterForEventRequest {
    pub event_id: Option<Uuid>,
    #[schema(example = "Hack Night")]
    pub event_name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationCreatedResponse {
    pub reg_id: Uuid,
    pub event_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/event-registration",
    tag = "registrations",
    security(("BearerAuth" = [])),
    request_body = RegisterForEventRequest,
    responses(
        (status = 201, description = "Registered", body = inline(SuccessResponse<RegistrationCreatedResponse>)),
        (status = 400, description = "Already registered or no event reference", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 404, description = "Unknown user or event", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/event-registration")]
pub async fn register_for_event_handler(
    user: SessionUser,
    req: web::Json<RegisterForEventRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let event = EventRef::from_parts(req.event_id, req.event_name);

    match data.registration.register.execute(&user.email, event).await {
        Ok(registration) => ApiResponse::created(RegistrationCreatedResponse {
            reg_id: registration.reg_id,
            event_id: registration.event_id,
        }),
        Err(RegisterForEventError::ValidationError(msg)) => ApiResponse::validation_error(&msg),
        Err(RegisterForEventError::UserNotFound) => user_not_found(),
        Err(RegisterForEventError::EventNotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(RegisterForEventError::AlreadyRegistered) => ApiResponse::bad_request(
            "ALREADY_REGISTERED",
            "User already registered for this event",
        ),
        Err(RegisterForEventError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Failed to register: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

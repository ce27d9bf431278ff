use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::get_event::EventResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::modules::event::application::ports::incoming::use_cases::{
    CreateEventCommand, CreateEventError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    #[schema(example = "Hack Night")]
    pub event_name: Option<String>,
    /// `YYYY-MM-DDTHH:MM[:SS]` or RFC 3339.
    #[schema(example = "2025-03-14T18:30")]
    pub event_date: Option<String>,
    #[schema(example = 120)]
    pub duration: Option<i32>,
    pub event_description: Option<String>,
    #[schema(example = "https://cdn.example/poster.png")]
    pub poster: Option<String>,
    pub reg_link: Option<String>,
    pub whatsapp_link: Option<String>,
    pub venue: Option<String>,
    #[schema(example = true)]
    pub visibility: Option<bool>,
}

impl From<CreateEventRequest> for CreateEventCommand {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            event_name: req.event_name,
            event_date: req.event_date,
            duration: req.duration,
            event_description: req.event_description,
            poster: req.poster,
            reg_link: req.reg_link,
            whatsapp_link: req.whatsapp_link,
            venue: req.venue,
            visibility: req.visibility,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedEventResponse {
    pub event_id: Uuid,
    pub event: EventResponse,
}

#[utoipa::path(
    post,
    path = "/api/events",
    tag = "events",
    security(("BearerAuth" = [])),
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = inline(SuccessResponse<CreatedEventResponse>)),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/events")]
pub async fn create_event_handler(
    user: SessionUser,
    req: web::Json<CreateEventRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = CreateEventCommand::from(req.into_inner());

    match data.event.create.execute(&user.email, command).await {
        Ok(event) => ApiResponse::created(CreatedEventResponse {
            event_id: event.event_id,
            event: EventResponse::from(event),
        }),
        Err(CreateEventError::Forbidden) => ApiResponse::admin_required(),
        Err(CreateEventError::ValidationError(msg)) => ApiResponse::validation_error(&msg),
        Err(CreateEventError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Failed to create event: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

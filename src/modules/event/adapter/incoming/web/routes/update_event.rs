use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::get_event::{event_not_found, EventResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::modules::event::application::ports::incoming::use_cases::{
    UpdateEventCommand, UpdateEventError,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

/// `event_id` plus a sparse patch. Omitted keys are left untouched and
/// `null` clears an optional field.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    pub event_id: Option<Uuid>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub event_name: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2025-03-14T18:30")]
    pub event_date: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub duration: PatchField<i32>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub event_description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub poster: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub reg_link: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub whatsapp_link: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub venue: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub visibility: PatchField<bool>,
}

impl UpdateEventRequest {
    fn into_parts(self) -> (Option<Uuid>, UpdateEventCommand) {
        (
            self.event_id,
            UpdateEventCommand {
                event_name: self.event_name,
                event_date: self.event_date,
                duration: self.duration,
                event_description: self.event_description,
                poster: self.poster,
                reg_link: self.reg_link,
                whatsapp_link: self.whatsapp_link,
                venue: self.venue,
                visibility: self.visibility,
            },
        )
    }
}

#[utoipa::path(
    put,
    path = "/api/events",
    tag = "events",
    security(("BearerAuth" = [])),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated", body = inline(SuccessResponse<EventResponse>)),
        (status = 400, description = "Missing event_id or invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "No such event", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/events")]
pub async fn update_event_handler(
    user: SessionUser,
    req: web::Json<UpdateEventRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (event_id, command) = req.into_inner().into_parts();
    let Some(event_id) = event_id else {
        return ApiResponse::validation_error("event_id is required");
    };

    match data.event.update.execute(&user.email, event_id, command).await {
        Ok(event) => ApiResponse::success(EventResponse::from(event)),
        Err(UpdateEventError::Forbidden) => ApiResponse::admin_required(),
        Err(UpdateEventError::ValidationError(msg)) => ApiResponse::validation_error(&msg),
        Err(UpdateEventError::NotFound) => event_not_found(),
        Err(UpdateEventError::RepositoryError(msg)) => {
            error!(event_id = %event_id, "Failed to update event: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

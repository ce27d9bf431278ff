use actix_web::{get, web, HttpResponse, Responder};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::event::application::domain::entities::Event;
use crate::modules::event::application::ports::incoming::use_cases::GetEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub event_id: Uuid,
    #[schema(example = "Hack Night")]
    pub event_name: String,
    /// Local wall-clock time, no zone.
    #[schema(value_type = String, example = "2025-03-14T18:30:00")]
    pub event_date: NaiveDateTime,
    /// Minutes.
    #[schema(example = 120)]
    pub duration: Option<i32>,
    pub event_description: Option<String>,
    pub poster: String,
    pub reg_link: Option<String>,
    pub whatsapp_link: Option<String>,
    pub venue: Option<String>,
    pub visibility: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            event_name: event.event_name,
            event_date: event.event_date,
            duration: event.duration,
            event_description: event.event_description,
            poster: event.poster,
            reg_link: event.reg_link,
            whatsapp_link: event.whatsapp_link,
            venue: event.venue,
            visibility: event.visibility,
            created_at: event.created_at.to_rfc3339(),
            updated_at: event.updated_at.to_rfc3339(),
        }
    }
}

pub(super) fn event_not_found() -> HttpResponse {
    ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = "events",
    params(("event_id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event, hidden or not", body = inline(SuccessResponse<EventResponse>)),
        (status = 404, description = "No such event", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/events/{event_id}")]
pub async fn get_event_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = path.into_inner();

    match data.event.get.execute(event_id).await {
        Ok(event) => ApiResponse::success(EventResponse::from(event)),
        Err(GetEventError::NotFound) => event_not_found(),
        Err(GetEventError::RepositoryError(msg)) => {
            error!(event_id = %event_id, "Failed to fetch event: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

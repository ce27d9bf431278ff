use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::modules::registration::application::ports::incoming::use_cases::ExportRegistrationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportRegistrationsQuery {
    pub event_id: Option<Uuid>,
}

#[utoipa::path(
    get,
    path = "/api/export-registrations",
    tag = "registrations",
    security(("BearerAuth" = [])),
    params(ExportRegistrationsQuery),
    responses(
        (status = 200, description = "CSV attachment of the event's registrants", content_type = "text/csv", body = String),
        (status = 400, description = "Missing or malformed event_id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "No such event", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/export-registrations")]
pub async fn export_registrations_handler(
    user: SessionUser,
    query: web::Query<ExportRegistrationsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .registration
        .export
        .execute(&user.email, query.event_id)
        .await
    {
        Ok(export) => ApiResponse::attachment(export.content_type, &export.filename, export.bytes),
        Err(ExportRegistrationsError::Forbidden) => ApiResponse::admin_required(),
        Err(ExportRegistrationsError::ValidationError(msg)) => ApiResponse::validation_error(&msg),
        Err(ExportRegistrationsError::EventNotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(ExportRegistrationsError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Failed to export registrations: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

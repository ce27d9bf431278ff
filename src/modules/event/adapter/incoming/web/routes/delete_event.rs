use actix_web::{delete, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::SessionUser;
use crate::modules::event::application::ports::incoming::use_cases::DeleteEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteEventRequest {
    pub event_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedEventResponse {
    pub event_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/api/events",
    tag = "events",
    security(("BearerAuth" = [])),
    request_body = DeleteEventRequest,
    responses(
        (status = 200, description = "Event gone (deleting a missing event also succeeds)", body = inline(SuccessResponse<DeletedEventResponse>)),
        (status = 400, description = "Missing event_id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/events")]
pub async fn delete_event_handler(
    user: SessionUser,
    req: web::Json<DeleteEventRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(event_id) = req.into_inner().event_id else {
        return ApiResponse::validation_error("event_id is required");
    };

    match data.event.delete.execute(&user.email, event_id).await {
        Ok(()) => ApiResponse::success(DeletedEventResponse { event_id }),
        Err(DeleteEventError::Forbidden) => ApiResponse::admin_required(),
        Err(DeleteEventError::RepositoryError(msg)) => {
            error!(event_id = %event_id, "Failed to delete event: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

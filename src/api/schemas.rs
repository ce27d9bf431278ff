// Envelope shapes shared by every campus-events route. `ErrorDetail` is also
// what `ApiResponse::error` serializes, so the documented error body and the
// wire body are the same type.
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": ... }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

/// Machine-readable code plus a message fit for a toast.
///
/// Codes in use: `VALIDATION_ERROR`, `EVENT_NOT_FOUND`, `USER_NOT_FOUND`,
/// `ALREADY_REGISTERED`, `FORBIDDEN`, `DOMAIN_REJECTED`, `MISSING_AUTH_HEADER`,
/// `INVALID_TOKEN`, `INVALID_TOKEN_TYPE`, `INTERNAL_ERROR`.
#[derive(Serialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct ErrorDetail {
    #[schema(example = "ALREADY_REGISTERED")]
    pub code: String,

    #[schema(example = "You are already registered for this event")]
    pub message: String,
}

impl ErrorDetail {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

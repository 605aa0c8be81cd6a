use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::validation::FieldError;

/// Body of every non-2xx response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Validation failed")]
    pub error: String,
    /// Machine-readable code, e.g. `VALIDATION_ERROR` or `JOB_NOT_FOUND`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,
    /// Present only on validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// `{ success, message }` acknowledgement with no payload.
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Application submitted successfully")]
    pub message: String,
}

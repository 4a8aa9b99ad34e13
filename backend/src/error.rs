use actix_web::HttpResponse;
use thiserror::Error;

/// Domain errors surfaced by the API.
///
/// The pure parts of the system (encoder, customization normalizer) never
/// fail; they degrade to empty or default output and leave the "is this
/// ready?" decision to their callers. These variants cover everything else:
/// requests that cannot proceed and storage-layer trouble.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Nothing meaningful to render or save yet.
    #[error("Please enter content to generate QR code")]
    EmptyPayload,

    /// The bulk header is structurally unusable; no row can be interpreted.
    #[error("CSV must include {0} column(s)")]
    MissingRequiredColumns(String),

    /// No caller identity on the request.
    #[error("Must be logged in to save QR codes")]
    Unauthenticated,

    /// The record does not exist or belongs to a different owner. The two
    /// cases are deliberately indistinguishable to callers.
    #[error("QR code not found or access denied")]
    NotFoundOrForbidden,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Every variant has one canonical HTTP mapping; handlers reuse it so
    /// the statuses stay consistent across endpoints.
    pub fn to_response(&self) -> HttpResponse {
        match self {
            ApiError::EmptyPayload | ApiError::MissingRequiredColumns(_) => {
                HttpResponse::BadRequest().body(self.to_string())
            }
            ApiError::Unauthenticated => HttpResponse::Unauthorized().body(self.to_string()),
            ApiError::NotFoundOrForbidden => HttpResponse::NotFound().body(self.to_string()),
            ApiError::Storage(_) => HttpResponse::ServiceUnavailable().body(self.to_string()),
        }
    }
}

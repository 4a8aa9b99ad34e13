use crate::error::ApiError;
use actix_web::HttpRequest;

/// Resolves the opaque owner id for the current request.
///
/// The deployment's auth proxy authenticates callers and forwards the owner
/// id as a bearer token; this function only extracts it. Every owner-scoped
/// operation takes the resolved id as an explicit parameter. Nothing below
/// the handlers reads ambient request state, and the pure encoding core
/// needs no identity at all.
pub fn resolve_owner(req: &HttpRequest) -> Result<String, ApiError> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthenticated)?;

    let token = header.strip_prefix("Bearer ").unwrap_or("").trim();
    if token.is_empty() {
        return Err(ApiError::Unauthenticated);
    }
    Ok(token.to_string())
}

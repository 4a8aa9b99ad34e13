use crate::error::ApiError;
use crate::services::payloads::{encode, store};
use crate::{db, identity};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::requests::SavePayloadRequest;

pub(crate) async fn process(
    req: HttpRequest,
    payload: web::Json<SavePayloadRequest>,
) -> impl Responder {
    match save_payload(&req, &payload) {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "id": id })),
        Err(e) => e.to_response(),
    }
}

/// Encodes the field set server-side and persists it for the caller.
///
/// The stored `content` is always the encoder's output, never a string the
/// client claims to have encoded.
fn save_payload(req: &HttpRequest, request: &SavePayloadRequest) -> Result<String, ApiError> {
    let owner_id = identity::resolve_owner(req)?;

    let content = encode::encode(&request.payload);
    if content.trim().is_empty() {
        return Err(ApiError::EmptyPayload);
    }

    let conn = db::open()?;
    store::insert(
        &conn,
        &owner_id,
        &request.payload,
        &content,
        request.customization.as_ref(),
    )
}

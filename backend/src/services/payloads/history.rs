use crate::error::ApiError;
use crate::services::payloads::store;
use crate::{db, identity};
use actix_web::{HttpRequest, HttpResponse, Responder};
use common::model::payload::SavedPayload;

pub(crate) async fn process(req: HttpRequest) -> impl Responder {
    match list_history(&req) {
        Ok(history) => HttpResponse::Ok().json(history),
        Err(e) => e.to_response(),
    }
}

fn list_history(req: &HttpRequest) -> Result<Vec<SavedPayload>, ApiError> {
    // An anonymous caller simply has no history yet.
    let owner_id = match identity::resolve_owner(req) {
        Ok(owner_id) => owner_id,
        Err(ApiError::Unauthenticated) => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let conn = db::open()?;
    store::list_latest(&conn, &owner_id, store::HISTORY_LIMIT)
}

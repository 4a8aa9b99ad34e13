use crate::error::ApiError;
use crate::services::payloads::store;
use crate::{db, identity};
use actix_web::{web, HttpRequest, HttpResponse, Responder};

pub(crate) async fn process(req: HttpRequest, payload_id: web::Path<String>) -> impl Responder {
    match delete_payload(&req, &payload_id) {
        Ok(()) => HttpResponse::Ok().body("QR code deleted from history"),
        Err(e) => e.to_response(),
    }
}

fn delete_payload(req: &HttpRequest, payload_id: &str) -> Result<(), ApiError> {
    let owner_id = identity::resolve_owner(req)?;
    let conn = db::open()?;
    store::delete_by_id(&conn, payload_id, &owner_id)
}

use crate::services::payloads::{customization, encode, render};
use actix_web::{web, HttpResponse, Responder};
use common::requests::PreviewRequest;

/// Builds the preview for the current form state: the encoded payload plus
/// the URL a client would fetch the image from. Nothing is persisted.
pub(crate) async fn process(payload: web::Json<PreviewRequest>) -> impl Responder {
    let request = payload.into_inner();
    let content = encode::encode(&request.payload);
    let options = customization::normalize(request.customization.as_ref());
    let format = request.format.as_deref().unwrap_or("png");

    // An empty payload means "no QR code displayed yet", not a failure.
    let render_url = match render::build(&content, &options, format) {
        Ok(render_request) => Some(render_request.to_url()),
        Err(_) => None,
    };

    HttpResponse::Ok().json(serde_json::json!({
        "content": content,
        "renderUrl": render_url,
    }))
}

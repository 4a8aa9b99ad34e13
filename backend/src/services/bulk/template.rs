use actix_web::{HttpResponse, Responder};

/// The example blob offered to users as a starting point: the three
/// recognized columns and one row per simple payload kind. Static content,
/// nothing here is derived from application state.
const TEMPLATE: &str = "type,content,title\n\
text,Hello World,Sample Text\n\
url,https://example.com,Example Website\n\
email,test@example.com,Contact Email";

pub(crate) async fn process() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"qr-bulk-template.csv\"",
        ))
        .body(TEMPLATE)
}

//! # Bulk Service Module
//!
//! Endpoints for turning a tabular text blob into many saved QR payloads.
//!
//! - `POST /api/bulk/start`: Parses the submitted blob and schedules a
//!   background job that encodes and saves each parsed row. Returns the job
//!   id and the parsed row count immediately; a header missing the `type`
//!   or `content` column fails the request with a message naming what is
//!   missing.
//!
//! - `GET /api/bulk/status/{job_id}`: Polls the status of a running batch
//!   from the shared `JobsState` (`Pending`, `InProgress`, `Completed`, or
//!   `Failed`). The `Completed` payload is a JSON `BulkOutcome` reporting
//!   saved vs. total rows.
//!
//! - `GET /api/bulk/template`: The fixed `type,content,title` example blob,
//!   served as a CSV download.

use actix_web::{web, Scope};

pub mod ingest;

mod get_status;
mod start;
mod template;

const API_PATH: &str = "/api/bulk";

/// Configures and returns the Actix scope for bulk routes.
pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        // Route to parse a blob and start a new bulk generation job.
        .route("/start", web::post().to(start::process))
        // Route to get the status of an ongoing bulk job.
        .route("/status/{job_id}", web::get().to(get_status::process))
        // Route to download the example input blob.
        .route("/template", web::get().to(template::process))
}

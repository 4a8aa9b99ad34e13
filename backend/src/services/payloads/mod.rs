//! # Payload Service Module
//!
//! Aggregates all API endpoints for single QR payloads under the
//! `/api/payloads` path: previewing the encoded string, saving it to the
//! caller's history, listing that history, and deleting entries.
//!
//! ## Sub-modules:
//! - `encode`: the pure payload encoding engine (one branch per kind).
//! - `customization`: default-filling and range repair for styling input.
//! - `render`: builds the request URL for the external QR image service.
//! - `store`: owner-scoped SQLite persistence of saved payloads.
//! - `preview` / `save` / `history` / `delete`: the HTTP handlers.

pub mod customization;
pub mod encode;
pub mod render;
pub mod store;

mod delete;
mod history;
mod preview;
mod save;

use actix_web::{web, Scope};

/// The base path for all payload-related API endpoints.
const API_PATH: &str = "/api/payloads";

/// Configures and returns the Actix `Scope` for all payload routes.
///
/// # Registered Routes:
///
/// *   **`POST /preview`**:
///     - **Handler**: `preview::process`
///     - **Description**: Encodes the submitted field set and returns the
///       payload string plus the render URL. An incomplete field set yields
///       an empty string and no URL ("no QR code yet", not an error).
///
/// *   **`POST /save`**:
///     - **Handler**: `save::process`
///     - **Description**: Encodes server-side and persists the payload to
///       the caller's history. Rejects empty payloads and anonymous callers.
///
/// *   **`GET /history`**:
///     - **Handler**: `history::process`
///     - **Description**: The caller's saved payloads, newest first, capped
///       at 50.
///
/// *   **`DELETE /{payload_id}`**:
///     - **Handler**: `delete::process`
///     - **Description**: Removes one saved payload, but only if it
///       belongs to the caller.
pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("/preview", web::post().to(preview::process))
        .route("/save", web::post().to(save::process))
        .route("/history", web::get().to(history::process))
        .route("/{payload_id}", web::delete().to(delete::process))
}

//! # Bulk Job Start Service
//!
//! Provides `POST /api/bulk/start`, which parses a tabular text blob and
//! kicks off a background job that encodes and saves a QR payload for each
//! parsed row.
//!
//! ## Workflow:
//!
//! 1. The handler resolves the caller's identity, then parses the blob.
//!    A structurally unusable header fails the request immediately; any
//!    other problem stays row-local.
//! 2. `schedule_bulk_job` registers a new job as `Pending` in the shared
//!    `JobsState` and returns the job id right away so the client can poll.
//! 3. The batch itself runs on the blocking thread pool
//!    (`tokio::task::spawn_blocking`): SQLite access is synchronous and
//!    must stay off the async runtime.
//! 4. `run_batch` walks the rows sequentially. Each row is mapped onto a
//!    field set, encoded, and inserted. A row that fails (encoding to an
//!    empty payload, or a storage error) is recorded and the batch moves
//!    on; this is a best-effort batch, not a transaction.
//! 5. Progress is reported through the job controller after every persisted
//!    row, and the final `Completed` status carries a JSON `BulkOutcome`
//!    with saved vs. total counts and the per-row errors.
//!
//! There is no cancellation: once started, the batch runs to completion
//! over the already-parsed rows. Resubmitting the same blob re-parses and
//! re-attempts every row, since rows carry no identity across runs.

use crate::error::ApiError;
use crate::job_controller::state::{JobUpdate, JobsState};
use crate::services::bulk::ingest;
use crate::services::payloads::{encode, store};
use crate::{db, identity};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::jobs::JobStatus;
use common::model::bulk::{BulkOutcome, BulkRow, ParseOutcome, RowError};
use common::model::payload::{FieldSet, PayloadFields};
use common::requests::StartBulkRequest;
use log::{info, warn};
use tokio::sync::mpsc;
use uuid::Uuid;

pub(crate) async fn process(
    req: HttpRequest,
    state: web::Data<JobsState>,
    payload: web::Json<StartBulkRequest>,
) -> impl Responder {
    let owner_id = match identity::resolve_owner(&req) {
        Ok(owner_id) => owner_id,
        Err(e) => return e.to_response(),
    };
    let outcome = match ingest::parse(&payload.text) {
        Ok(outcome) => outcome,
        Err(e) => return e.to_response(),
    };

    let parsed = outcome.rows.len();
    let job_id = schedule_bulk_job(&state, owner_id, outcome).await;
    HttpResponse::Ok().json(serde_json::json!({
        "job_id": job_id,
        "parsed": parsed,
    }))
}

/// Registers the job and spawns the background batch. Returns the job id
/// immediately; the client polls `/api/bulk/status/{job_id}` for progress.
async fn schedule_bulk_job(
    state: &web::Data<JobsState>,
    owner_id: String,
    outcome: ParseOutcome,
) -> String {
    let job_id = Uuid::new_v4().to_string();
    state
        .jobs
        .write()
        .await
        .insert(job_id.clone(), JobStatus::Pending);

    let tx = state.tx.clone();
    let job_id_clone = job_id.clone();

    tokio::spawn(async move {
        let tx_block = tx.clone();
        let job_id_for_blocking = job_id_clone.clone();

        let handle = tokio::task::spawn_blocking(move || {
            run_batch(tx_block, &job_id_for_blocking, &owner_id, outcome)
        });

        match handle.await {
            // The worker reported its own Completed status.
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                let _ = tx
                    .send(JobUpdate {
                        job_id: job_id_clone,
                        status: JobStatus::Failed(e.to_string()),
                    })
                    .await;
            }
            Err(join_err) => {
                let _ = tx
                    .send(JobUpdate {
                        job_id: job_id_clone,
                        status: JobStatus::Failed(format!("Task join error: {}", join_err)),
                    })
                    .await;
            }
        }
    });

    job_id
}

/// The synchronous batch worker, run via `spawn_blocking`.
fn run_batch(
    tx: mpsc::Sender<JobUpdate>,
    job_id: &str,
    owner_id: &str,
    outcome: ParseOutcome,
) -> Result<(), ApiError> {
    let conn = db::open()?;
    let report = execute_batch(&conn, &tx, job_id, owner_id, outcome);

    info!(
        "bulk job {}: saved {} of {} rows",
        job_id, report.saved, report.total
    );

    let summary = serde_json::to_string(&report).map_err(|e| ApiError::Storage(e.to_string()))?;
    let _ = tx.blocking_send(JobUpdate {
        job_id: job_id.to_string(),
        status: JobStatus::Completed(summary),
    });
    Ok(())
}

/// Walks the rows sequentially and best-effort: every parsed row is encoded
/// and persisted one at a time, and one row's failure never aborts the
/// rest. There is no atomicity across the batch; partial completion is a
/// normal, reported outcome.
fn execute_batch(
    conn: &rusqlite::Connection,
    tx: &mpsc::Sender<JobUpdate>,
    job_id: &str,
    owner_id: &str,
    outcome: ParseOutcome,
) -> BulkOutcome {
    let ParseOutcome { rows, mut errors } = outcome;
    let total = rows.len() as u32;
    let mut saved = 0u32;

    for row in &rows {
        let field_set = field_set_for_row(row);
        let content = encode::encode(&field_set);
        if content.trim().is_empty() {
            errors.push(RowError {
                row_index: row.row_index,
                reason: "encoded to an empty payload".to_string(),
            });
            continue;
        }

        match store::insert(conn, owner_id, &field_set, &content, None) {
            Ok(_) => {
                saved += 1;
                let _ = tx.blocking_send(JobUpdate {
                    job_id: job_id.to_string(),
                    status: JobStatus::InProgress(saved),
                });
            }
            Err(e) => {
                warn!("bulk row {} failed to save: {}", row.row_index, e);
                errors.push(RowError {
                    row_index: row.row_index,
                    reason: e.to_string(),
                });
            }
        }
    }

    BulkOutcome {
        saved,
        total,
        errors,
    }
}

/// Maps a bulk row onto the kind's primary field so it encodes exactly like
/// a single-form submission of the same data. Rows without a title get a
/// generated `Bulk <kind>` label.
fn field_set_for_row(row: &BulkRow) -> FieldSet {
    let mut fields = PayloadFields::default();
    match row.kind.as_str() {
        "sms" => fields.phone_number = Some(row.content.clone()),
        "email" => fields.email_to = Some(row.content.clone()),
        "wifi" => fields.ssid = Some(row.content.clone()),
        "vcard" => fields.name = Some(row.content.clone()),
        // text, url, phone, and anything unrecognized.
        _ => fields.value = Some(row.content.clone()),
    }

    FieldSet {
        kind: row.kind.clone(),
        fields,
        title: Some(
            row.title
                .clone()
                .unwrap_or_else(|| format!("Bulk {}", row.kind)),
        ),
    }
}

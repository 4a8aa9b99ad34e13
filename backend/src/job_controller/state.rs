//! Tracks long-running bulk generation jobs.
//!
//! A bulk batch runs outside the request/response cycle: the start endpoint
//! registers a job and returns its id immediately, and clients poll the
//! status endpoint while the batch works through its rows. `JobsState` is
//! the shared map of job id to `JobStatus`; workers report progress by
//! sending `JobUpdate` messages through the MPSC channel, and the
//! `start_job_updater` task drains that channel into the map.

use common::jobs::JobStatus;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{mpsc, RwLock};

/// Shared, clonable state for all background jobs.
///
/// Created in `main.rs` and injected into the application as `web::Data`.
#[derive(Clone)]
pub struct JobsState {
    /// Single source of truth for job statuses. Concurrent reads come from
    /// the status endpoint; writes come from the updater task.
    pub jobs: Arc<RwLock<HashMap<String, JobStatus>>>,
    /// Sender handed to batch workers so they can report progress without
    /// taking the map's write lock themselves.
    pub tx: mpsc::Sender<JobUpdate>,
}

/// A status change for one background job.
#[derive(Debug)]
pub struct JobUpdate {
    pub(crate) job_id: String,
    pub(crate) status: JobStatus,
}

/// Drains `JobUpdate` messages into the shared map. Spawned once at startup
/// and runs for the lifetime of the server.
pub async fn start_job_updater(state: JobsState, mut rx: mpsc::Receiver<JobUpdate>) {
    while let Some(update) = rx.recv().await {
        let mut jobs = state.jobs.write().await;
        jobs.insert(update.job_id, update.status);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    /// Number of rows persisted so far.
    InProgress(u32),
    /// JSON-serialized `BulkOutcome` for the finished batch.
    Completed(String),
    Failed(String),
}

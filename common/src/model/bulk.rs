use serde::{Deserialize, Serialize};

/// One parsed line of bulk input, aligned positionally to the header row.
///
/// `content` feeds the kind's primary field when the row is encoded:
/// `value` for text/url/phone, `phoneNumber` for sms, `emailTo` for email,
/// `ssid` for wifi, `name` for vcard. Rows are transient: produced by the
/// parser, consumed by the batch job, discarded when the batch completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRow {
    /// 0-based index into the data rows (header excluded). Diagnostics only.
    pub row_index: usize,
    pub kind: String,
    pub content: String,
    pub title: Option<String>,
}

/// A problem with a single bulk row. Collected, never aborts the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowError {
    pub row_index: usize,
    pub reason: String,
}

/// Result of parsing a bulk text blob: the rows worth processing plus any
/// per-row diagnostics. Rows whose `type` or `content` cell is empty are
/// dropped silently ("not ready", like an incomplete form) and appear in
/// neither list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub rows: Vec<BulkRow>,
    pub errors: Vec<RowError>,
}

/// Final report of a bulk batch, serialized into `JobStatus::Completed`.
///
/// The batch is best-effort, not a transaction: partial completion is an
/// expected outcome, and `errors` lists the rows that did not make it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkOutcome {
    pub saved: u32,
    pub total: u32,
    pub errors: Vec<RowError>,
}

use crate::model::customization::Customization;
use crate::model::payload::FieldSet;
use serde::Deserialize;

/// Request payload for the preview endpoint: encode the field set and build
/// the render URL without persisting anything.
#[derive(Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub payload: FieldSet,
    #[serde(default)]
    pub customization: Option<Customization>,
    /// `png` (default) or `svg`.
    #[serde(default)]
    pub format: Option<String>,
}

/// Request payload for saving one payload to the caller's history.
#[derive(Deserialize)]
pub struct SavePayloadRequest {
    pub payload: FieldSet,
    #[serde(default)]
    pub customization: Option<Customization>,
}

/// Request payload for starting a bulk generation job.
/// Contains the raw tabular blob: a header row plus data rows.
#[derive(Deserialize)]
pub struct StartBulkRequest {
    pub text: String,
}

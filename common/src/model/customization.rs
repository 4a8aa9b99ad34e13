use serde::{Deserialize, Serialize};

/// Raw rendering preferences as they arrive from callers.
///
/// Everything is optional and nothing is validated here; the backend fills
/// defaults and repairs out-of-range values before rendering. Malformed
/// styling degrades to the defaults instead of failing a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customization {
    /// Requested image size in pixels. The form offers 200–500, but any
    /// integer is accepted on the wire.
    pub size: Option<i64>,
    /// Foreground color, six hex digits, with or without a leading `#`.
    pub color: Option<String>,
    pub background_color: Option<String>,
    /// One of `L`, `M`, `Q`, `H`.
    pub error_correction: Option<String>,
}

/// Fully-defaulted rendering parameters.
///
/// Produced by the backend's normalizer; every field is guaranteed usable
/// by the render request builder without further checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub size: u32,
    pub color: String,
    pub background_color: String,
    pub error_correction: String,
}

//! Render request construction.
//!
//! The QR image itself is produced by an external service; this module only
//! describes the request. Building one is pure, and the network fetch
//! belongs to whoever consumes the URL.

use crate::error::ApiError;
use crate::services::payloads::encode::encode_component;
use common::model::customization::RenderOptions;

/// Base URL of the external QR rendering service.
const RENDER_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// A fully-specified request for the external QR renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// The payload, already percent-encoded.
    pub data: String,
    /// Square dimension string, e.g. `300x300`.
    pub size: String,
    pub color: String,
    pub bgcolor: String,
    pub ecc: String,
    /// `Some("svg")` for SVG output; PNG needs no suffix.
    pub format: Option<String>,
}

/// Combines an encoded payload with normalized customization.
///
/// Fails with `EmptyPayload` when there is nothing to render: callers must
/// not cross the rendering boundary with an empty string.
pub fn build(payload: &str, options: &RenderOptions, format: &str) -> Result<RenderRequest, ApiError> {
    if payload.trim().is_empty() {
        return Err(ApiError::EmptyPayload);
    }

    Ok(RenderRequest {
        data: encode_component(payload),
        size: format!("{}x{}", options.size, options.size),
        color: options.color.clone(),
        bgcolor: options.background_color.clone(),
        ecc: options.error_correction.clone(),
        format: (format == "svg").then(|| "svg".to_string()),
    })
}

impl RenderRequest {
    /// Renders the request as the URL the external service consumes.
    pub fn to_url(&self) -> String {
        let mut url = format!(
            "{}?size={}&data={}&color={}&bgcolor={}&ecc={}",
            RENDER_ENDPOINT, self.size, self.data, self.color, self.bgcolor, self.ecc
        );
        if let Some(format) = &self.format {
            url.push_str("&format=");
            url.push_str(format);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::payloads::customization::normalize;

    #[test]
    fn empty_payload_is_rejected() {
        let options = normalize(None);
        assert!(matches!(
            build("", &options, "png"),
            Err(ApiError::EmptyPayload)
        ));
        assert!(matches!(
            build("   ", &options, "png"),
            Err(ApiError::EmptyPayload)
        ));
    }

    #[test]
    fn png_omits_the_format_suffix() {
        let options = normalize(None);
        let url = build("abc", &options, "png").unwrap().to_url();
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=abc&color=000000&bgcolor=ffffff&ecc=M"
        );
    }

    #[test]
    fn svg_appends_the_format_suffix() {
        let options = normalize(None);
        let url = build("abc", &options, "svg").unwrap().to_url();
        assert!(url.ends_with("&format=svg"));
    }

    #[test]
    fn payload_is_percent_encoded_into_the_url() {
        let options = normalize(None);
        let request = build("WIFI:T:WPA;S:Home;P:;H:false;;", &options, "png").unwrap();
        assert_eq!(request.data, "WIFI%3AT%3AWPA%3BS%3AHome%3BP%3A%3BH%3Afalse%3B%3B");

        let request = build("hello world", &options, "png").unwrap();
        assert_eq!(request.data, "hello%20world");
    }

    #[test]
    fn size_renders_as_a_square_dimension() {
        let mut options = normalize(None);
        options.size = 500;
        let request = build("abc", &options, "png").unwrap();
        assert_eq!(request.size, "500x500");
    }
}

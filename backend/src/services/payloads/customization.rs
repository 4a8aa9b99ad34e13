//! Normalization of rendering preferences.
//!
//! All default-filling lives here rather than at each call site: callers
//! hand over whatever the user typed and get back parameters that are
//! always safe to render with. Nothing in this module can fail; malformed
//! styling degrades to the defaults.

use common::model::customization::{Customization, RenderOptions};

const DEFAULT_SIZE: i64 = 300;
const MIN_SIZE: i64 = 50;
const MAX_SIZE: i64 = 2000;
const DEFAULT_COLOR: &str = "000000";
const DEFAULT_BACKGROUND: &str = "ffffff";
const DEFAULT_ECC: &str = "M";

/// Fills defaults and repairs out-of-range values. Total: never fails.
pub fn normalize(customization: Option<&Customization>) -> RenderOptions {
    let empty = Customization::default();
    let c = customization.unwrap_or(&empty);

    RenderOptions {
        size: c.size.unwrap_or(DEFAULT_SIZE).clamp(MIN_SIZE, MAX_SIZE) as u32,
        color: normalize_color(c.color.as_deref(), DEFAULT_COLOR),
        background_color: normalize_color(c.background_color.as_deref(), DEFAULT_BACKGROUND),
        error_correction: normalize_ecc(c.error_correction.as_deref()),
    }
}

/// Lower-cases, strips a leading `#`, and falls back to the default unless
/// the result is exactly six hex digits.
fn normalize_color(value: Option<&str>, default: &str) -> String {
    match value {
        Some(raw) => {
            let hex = raw.trim().trim_start_matches('#').to_lowercase();
            if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                hex
            } else {
                default.to_string()
            }
        }
        None => default.to_string(),
    }
}

fn normalize_ecc(value: Option<&str>) -> String {
    match value {
        Some(level @ ("L" | "M" | "Q" | "H")) => level.to_string(),
        _ => DEFAULT_ECC.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_customization_yields_defaults() {
        let options = normalize(None);
        assert_eq!(options.size, 300);
        assert_eq!(options.color, "000000");
        assert_eq!(options.background_color, "ffffff");
        assert_eq!(options.error_correction, "M");

        assert_eq!(normalize(Some(&Customization::default())), options);
    }

    #[test]
    fn size_is_clamped_not_rejected() {
        let c = Customization {
            size: Some(-5),
            ..Default::default()
        };
        assert_eq!(normalize(Some(&c)).size, 50);

        let c = Customization {
            size: Some(999_999),
            ..Default::default()
        };
        assert_eq!(normalize(Some(&c)).size, 2000);

        let c = Customization {
            size: Some(400),
            ..Default::default()
        };
        assert_eq!(normalize(Some(&c)).size, 400);
    }

    #[test]
    fn colors_are_lowercased_and_stripped() {
        let c = Customization {
            color: Some("#FF00Aa".into()),
            background_color: Some("EEEEEE".into()),
            ..Default::default()
        };
        let options = normalize(Some(&c));
        assert_eq!(options.color, "ff00aa");
        assert_eq!(options.background_color, "eeeeee");
    }

    #[test]
    fn malformed_colors_fall_back_to_defaults() {
        for bad in ["red", "#12345", "1234567", "gggggg", ""] {
            let c = Customization {
                color: Some(bad.into()),
                background_color: Some(bad.into()),
                ..Default::default()
            };
            let options = normalize(Some(&c));
            assert_eq!(options.color, "000000", "input {:?}", bad);
            assert_eq!(options.background_color, "ffffff", "input {:?}", bad);
        }
    }

    #[test]
    fn unknown_error_correction_becomes_medium() {
        let c = Customization {
            error_correction: Some("Z".into()),
            ..Default::default()
        };
        assert_eq!(normalize(Some(&c)).error_correction, "M");

        let c = Customization {
            error_correction: Some("Q".into()),
            ..Default::default()
        };
        assert_eq!(normalize(Some(&c)).error_correction, "Q");
    }
}

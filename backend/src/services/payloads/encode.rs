//! Payload encoding: the pure transformation from a field set to the exact
//! string a QR scanner must later decode.
//!
//! This is the one place where correctness depends on published formats:
//! the `WIFI:` configuration micro-syntax, vCard 3.0, `mailto:`, `sms:` and
//! `tel:`. Reserved characters inside user-supplied values are escaped per
//! each format before interpolation; without that, a semicolon in an SSID
//! scans back as a field separator instead of part of the network name.

use common::model::payload::FieldSet;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left intact in a URI query component. Everything else is
/// percent-encoded, space included (`%20`, never `+`).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes one query value. Applied per value, never to a whole
/// constructed string.
pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Backslash-escapes the characters the `WIFI:` micro-syntax reserves
/// (`\`, `;`, `,`, `"`, `:`) so the scanned value round-trips exactly.
fn escape_wifi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | '"' | ':') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// vCard 3.0 value escaping: `\`, `;` and `,` get a backslash, and embedded
/// line breaks become the two-character sequence `\n` rather than a literal
/// newline (which would start a new property line).
fn escape_vcard(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | ';' | ',' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Encodes a field set into its canonical payload string.
///
/// Total and deterministic: a field set missing the required field for its
/// kind encodes to the empty string ("not ready"), never an error. Unknown
/// kinds fall through to plain text.
pub fn encode(payload: &FieldSet) -> String {
    let f = &payload.fields;
    match payload.kind.as_str() {
        "wifi" => {
            let ssid = f.ssid.as_deref().unwrap_or("");
            if ssid.is_empty() {
                return String::new();
            }
            let security = f
                .security
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("WPA");
            let password = f.password.as_deref().unwrap_or("");
            format!(
                "WIFI:T:{};S:{};P:{};H:false;;",
                escape_wifi(security),
                escape_wifi(ssid),
                escape_wifi(password)
            )
        }
        "vcard" => {
            let name = f.name.as_deref().unwrap_or("");
            if name.is_empty() {
                return String::new();
            }
            let mut lines = vec![
                "BEGIN:VCARD".to_string(),
                "VERSION:3.0".to_string(),
                format!("FN:{}", escape_vcard(name)),
            ];
            if let Some(phone) = f.phone.as_deref().filter(|s| !s.is_empty()) {
                lines.push(format!("TEL:{}", escape_vcard(phone)));
            }
            if let Some(email) = f.email.as_deref().filter(|s| !s.is_empty()) {
                lines.push(format!("EMAIL:{}", escape_vcard(email)));
            }
            lines.push("END:VCARD".to_string());
            lines.join("\n")
        }
        "sms" => {
            let number = f.phone_number.as_deref().unwrap_or("");
            if number.is_empty() {
                return String::new();
            }
            match f.message.as_deref().filter(|m| !m.is_empty()) {
                Some(message) => format!("sms:{}?body={}", number, encode_component(message)),
                None => format!("sms:{}", number),
            }
        }
        "email" => {
            let to = f.email_to.as_deref().unwrap_or("");
            if to.is_empty() {
                return String::new();
            }
            let mut params = Vec::new();
            if let Some(subject) = f.subject.as_deref().filter(|s| !s.is_empty()) {
                params.push(format!("subject={}", encode_component(subject)));
            }
            if let Some(body) = f.body.as_deref().filter(|s| !s.is_empty()) {
                params.push(format!("body={}", encode_component(body)));
            }
            if params.is_empty() {
                format!("mailto:{}", to)
            } else {
                format!("mailto:{}?{}", to, params.join("&"))
            }
        }
        "phone" => {
            let value = f.value.as_deref().unwrap_or("");
            if value.is_empty() {
                String::new()
            } else {
                format!("tel:{}", value)
            }
        }
        // text, url, and anything unrecognized: the value verbatim.
        _ => f.value.clone().unwrap_or_default(),
    }
}

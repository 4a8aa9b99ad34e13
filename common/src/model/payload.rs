use crate::model::customization::Customization;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One payload request: which kind of QR content to build and the
/// kind-specific field values entered so far.
///
/// `kind` is one of `text`, `url`, `phone`, `sms`, `email`, `wifi` or
/// `vcard`; the encoder folds any other value into `text`. An incomplete
/// field set is normal state, not an error: it encodes to the empty string
/// until its required field is filled, the same way an incomplete form has
/// nothing to render yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSet {
    pub kind: String,
    #[serde(default)]
    pub fields: PayloadFields,
    /// Optional human label, independent of `kind`.
    pub title: Option<String>,
}

/// Kind-specific field values. Only the subset matching the field set's
/// kind is meaningful; the rest stay `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayloadFields {
    /// The single field of `text`, `url` and `phone` payloads.
    pub value: Option<String>,
    // WiFi
    pub ssid: Option<String>,
    pub password: Option<String>,
    /// One of `WPA`, `WEP`, `nopass`. Defaults to `WPA` when absent.
    pub security: Option<String>,
    // Contact
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    // SMS
    pub phone_number: Option<String>,
    pub message: Option<String>,
    // Email
    pub email_to: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// A payload persisted to the history store.
///
/// Records are created by an explicit save, read back newest-first, and
/// removed only by their owner. They are never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPayload {
    pub id: String,
    pub owner_id: String,
    pub kind: String,
    /// The encoded payload string handed to the QR renderer.
    pub content: String,
    pub title: Option<String>,
    pub fields: Option<PayloadFields>,
    pub customization: Option<Customization>,
    pub created_at: DateTime<Utc>,
}

//! Notification envelope sent to the webhook relay.
//!
//! The envelope wraps a created record in a fixed shape:
//! `{ "data": { "user": <record> }, "version": "1.0", "event_type": <tag> }`.
//! Field order on the wire follows the struct declaration order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ProtocolError;

/// Envelope format version understood by the relay.
pub const ENVELOPE_VERSION: &str = "1.0";

/// Event tag emitted when a user record is created.
pub const USER_CREATED: &str = "user.created";

/// Payload section of the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeData {
    /// The record exactly as the store produced it
    pub user: Value,
}

/// A single notification, built fresh per trigger invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEnvelope {
    /// Wrapped record
    pub data: EnvelopeData,
    /// Always [`ENVELOPE_VERSION`]
    pub version: String,
    /// Event tag, e.g. [`USER_CREATED`]
    pub event_type: String,
}

impl NotificationEnvelope {
    /// Wrap `user` for delivery under the given event tag.
    pub fn new(event_type: impl Into<String>, user: Value) -> Self {
        Self {
            data: EnvelopeData { user },
            version: ENVELOPE_VERSION.to_string(),
            event_type: event_type.into(),
        }
    }

    /// The wrapped record.
    pub fn user(&self) -> &Value {
        &self.data.user
    }

    /// Compact JSON body as sent on the wire.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed JSON, for humans.
    pub fn to_json_pretty(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format_matches_relay_contract() {
        let record = json!({ "name": "Alice", "email": "a@x.com" });
        let envelope = NotificationEnvelope::new(USER_CREATED, record);

        assert_eq!(
            envelope.to_json().unwrap(),
            r#"{"data":{"user":{"name":"Alice","email":"a@x.com"}},"version":"1.0","event_type":"user.created"}"#
        );
    }

    #[test]
    fn test_version_is_fixed_and_tag_is_passed_through() {
        for tag in ["user.created", "user.deleted", "custom"] {
            let envelope = NotificationEnvelope::new(tag, json!({}));
            assert_eq!(envelope.version, "1.0");
            assert_eq!(envelope.event_type, tag);
        }
    }

    #[test]
    fn test_record_is_not_modified() {
        let records = vec![
            json!({ "z": 1, "a": { "nested": [1, 2, 3] }, "m": null }),
            json!("just a string"),
            json!(42),
            Value::Null,
            json!([{ "id": "u1" }]),
        ];

        for record in records {
            let envelope = NotificationEnvelope::new(USER_CREATED, record.clone());
            assert_eq!(envelope.user(), &record);

            let wire: Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();
            assert_eq!(wire["data"]["user"], record);
        }
    }

    #[test]
    fn test_record_key_order_is_preserved() {
        let record: Value = serde_json::from_str(r#"{"zeta":1,"alpha":2}"#).unwrap();
        let body = NotificationEnvelope::new(USER_CREATED, record).to_json().unwrap();
        assert!(body.contains(r#"{"zeta":1,"alpha":2}"#));
    }
}

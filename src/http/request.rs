//! Inbound traffic capture.
//!
//! # Responsibilities
//! - Extract the method exactly as received
//! - Capture the complete header mapping, nothing filtered or redacted
//! - Classify the body as structured JSON or plain text
//! - Emit the one log record per request
//!
//! # Design Decisions
//! - JSON parsing is attempted first; text decoding is the fallback
//! - Exactly one body representation is chosen per request
//! - Bytes that are neither JSON nor valid UTF-8 decode lossily, so the
//!   representation is always deterministic text
//! - Headers are held in a sorted map for a deterministic log layout;
//!   duplicate names resolve last-value-wins

use std::collections::BTreeMap;

use axum::http::{HeaderMap, Method};
use serde_json::Value;

/// Body representation chosen for a captured request.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyRepr {
    /// The body parsed as JSON; the structured value is kept.
    Json(Value),
    /// Anything else, decoded as UTF-8 text. Empty bodies land here too.
    Text(String),
}

impl BodyRepr {
    /// Classify raw body bytes.
    pub fn classify(bytes: &[u8]) -> Self {
        if !bytes.is_empty() {
            if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
                return BodyRepr::Json(value);
            }
        }
        BodyRepr::Text(String::from_utf8_lossy(bytes).into_owned())
    }

    /// True when the request carried no usable body.
    pub fn is_empty(&self) -> bool {
        matches!(self, BodyRepr::Text(text) if text.is_empty())
    }
}

impl std::fmt::Display for BodyRepr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyRepr::Json(value) => write!(f, "{}", value),
            BodyRepr::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A fully captured request: method, header mapping, classified body.
///
/// Lives only for the duration of one request/response exchange.
#[derive(Debug, Clone)]
pub struct TrafficRecord {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: BodyRepr,
}

impl TrafficRecord {
    /// Capture a request from its already-read parts.
    pub fn capture(method: &Method, headers: &HeaderMap, body: &[u8]) -> Self {
        let mut map = BTreeMap::new();
        for (name, value) in headers {
            map.insert(
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }

        Self {
            method: method.as_str().to_string(),
            headers: map,
            body: BodyRepr::classify(body),
        }
    }

    /// Write the log record for this request.
    pub fn log(&self) {
        tracing::info!(
            method = %self.method,
            headers = ?self.headers,
            body = %self.body,
            "Received request"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    #[test]
    fn json_body_keeps_structured_value() {
        let repr = BodyRepr::classify(br#"{"a": 1}"#);
        assert_eq!(repr, BodyRepr::Json(json!({"a": 1})));
    }

    #[test]
    fn nested_json_body_parses() {
        let repr = BodyRepr::classify(br#"{"user":{"id":7,"tags":["a","b"]}}"#);
        assert_eq!(repr, BodyRepr::Json(json!({"user": {"id": 7, "tags": ["a", "b"]}})));
    }

    #[test]
    fn non_json_body_falls_back_to_text() {
        let repr = BodyRepr::classify(b"hello world");
        assert_eq!(repr, BodyRepr::Text("hello world".to_string()));
    }

    #[test]
    fn empty_body_is_empty_text() {
        let repr = BodyRepr::classify(b"");
        assert_eq!(repr, BodyRepr::Text(String::new()));
        assert!(repr.is_empty());
    }

    #[test]
    fn truncated_json_falls_back_to_text() {
        let repr = BodyRepr::classify(br#"{"a": "#);
        assert_eq!(repr, BodyRepr::Text(r#"{"a": "#.to_string()));
    }

    #[test]
    fn bare_json_scalar_is_structured() {
        assert_eq!(BodyRepr::classify(b"42"), BodyRepr::Json(json!(42)));
    }

    #[test]
    fn invalid_utf8_decodes_lossily() {
        let repr = BodyRepr::classify(&[0x68, 0x69, 0xff, 0xfe]);
        assert_eq!(repr, BodyRepr::Text("hi\u{fffd}\u{fffd}".to_string()));
    }

    #[test]
    fn capture_keeps_every_header() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("accept", HeaderValue::from_static("*/*"));
        headers.insert("x-custom", HeaderValue::from_static("observed"));

        let record = TrafficRecord::capture(&Method::POST, &headers, b"");
        assert_eq!(record.headers.len(), 3);
        assert_eq!(
            record.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(record.headers.get("accept").map(String::as_str), Some("*/*"));
        assert_eq!(record.headers.get("x-custom").map(String::as_str), Some("observed"));
    }

    #[test]
    fn duplicate_headers_resolve_last_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append("x-tag", HeaderValue::from_static("first"));
        headers.append("x-tag", HeaderValue::from_static("second"));

        let record = TrafficRecord::capture(&Method::GET, &headers, b"");
        assert_eq!(record.headers.get("x-tag").map(String::as_str), Some("second"));
    }

    #[test]
    fn method_string_is_exact() {
        let record = TrafficRecord::capture(&Method::PATCH, &HeaderMap::new(), b"");
        assert_eq!(record.method, "PATCH");
    }

    #[test]
    fn body_display_is_human_readable() {
        assert_eq!(BodyRepr::classify(br#"{"x":42}"#).to_string(), r#"{"x":42}"#);
        assert_eq!(BodyRepr::classify(b"not json").to_string(), "not json");
    }
}

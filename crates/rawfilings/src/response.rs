//! Filing responses and error-body interpretation.

use reqwest::header::HeaderMap;
use serde_json::{Map, Value};

const UNKNOWN_ERROR: &str = "Unknown error";
const UNREADABLE_ERROR: &str = "Could not retrieve filing";

/// Raw response from the filing endpoint.
///
/// Returned for every HTTP status, including errors.
#[derive(Debug, Clone)]
pub struct FilingResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, unmodified
    pub body: Vec<u8>,
    /// Response headers
    pub headers: HeaderMap,
}

impl FilingResponse {
    /// Create a response with no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Whether the filing was returned (status exactly 200).
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Human-readable error message extracted from the body.
    ///
    /// Uses the `message` field of a JSON object body, `"Unknown error"` if
    /// the object has none, and `"Could not retrieve filing"` if the body is
    /// not a JSON object at all. Never fails.
    pub fn error_message(&self) -> String {
        // Only an object body carries a message
        let Ok(mut error) = serde_json::from_slice::<Map<String, Value>>(&self.body) else {
            return UNREADABLE_ERROR.to_string();
        };

        match error.remove("message") {
            Some(Value::String(message)) => message,
            None | Some(Value::Null) => UNKNOWN_ERROR.to_string(),
            Some(other) => other.to_string(),
        }
    }
}

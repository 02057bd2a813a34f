//! # Response Interpreter
//!
//! Classifies a [`RawResponse`] into either the decoded JSON value or a [`JoError`].
//!
//! * **2xx**: the body is decoded and returned verbatim.
//! * **Anything else**: the body is decoded and its `error` member becomes the fault payload,
//!   with the status reason phrase as the message.
//!
//! A body that is not valid JSON is reported as [`JoError::Decode`] on both branches. It is
//! never turned into a fault.
use crate::error::JoError;
use bytes::Bytes;
use http::StatusCode;
use serde_json::Value;

/// A buffered HTTP response as returned by a [`crate::Transport`].
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    /// The canonical reason phrase of the status, or an empty string for unknown codes.
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or_default()
    }
}

pub fn interpret(response: RawResponse) -> Result<Value, JoError> {
    let json: Value = serde_json::from_slice(&response.body)?;

    if response.ok() {
        return Ok(json);
    }

    let fault = match json {
        Value::Object(mut members) => members.remove("error").unwrap_or(Value::Null),
        _ => Value::Null,
    };

    Err(JoError::Fault {
        status_text: response.status_text().to_string(),
        fault,
    })
}

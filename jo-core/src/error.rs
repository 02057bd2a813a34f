//! # Errors
//!
//! [`JoError`] is the single error type returned by every invocation. It keeps the layer the
//! failure came from:
//!
//! - **`Encode`**: the request could not be built (empty operation name, unserializable payload).
//! - **`Transport`**: the request never produced a response (connection refused, invalid URL...).
//! - **`Fault`**: the server answered with a non-2xx status and a JSON body. Its `error` member
//!   is the fault payload. Business faults declared by the service and plain HTTP errors that
//!   carry an `error` member take this same path.
//! - **`Decode`**: the response body was not valid JSON.
//!
//! Callers that just want a message can chain [`parse_error`] after any invocation.
use crate::{request::EncodeError, transport::TransportError};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum JoError {
    #[error("Invalid invocation: '{0}'")]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{status_text}")]
    Fault { status_text: String, fault: Value },
    #[error("Failed to decode response body: '{0}'")]
    Decode(#[from] serde_json::Error),
}

impl JoError {
    /// Whether this error carries a fault sent by the service.
    pub fn is_fault(&self) -> bool {
        matches!(self, JoError::Fault { .. })
    }

    /// The fault payload, if any.
    pub fn fault(&self) -> Option<&Value> {
        match self {
            JoError::Fault { fault, .. } => Some(fault),
            _ => None,
        }
    }

    /// Collapses the error into a single string.
    ///
    /// Faults become the compact JSON serialization of their payload, every other error
    /// becomes its message.
    pub fn normalize(&self) -> String {
        match self {
            JoError::Fault { fault, .. } => fault.to_string(),
            err => err.to_string(),
        }
    }
}

/// Collapses a [`JoError`] into a single string. See [`JoError::normalize`].
///
/// Meant to be chained after an invocation:
///
/// ```rust,no_run
/// # use jo_core::{HttpTransport, Jo, parse_error};
/// # async fn run(jo: Jo<HttpTransport>) {
/// let result: Result<_, String> = jo.operation("twice").call(None).await.map_err(parse_error);
/// # }
/// ```
pub fn parse_error(error: JoError) -> String {
    error.normalize()
}

/// Helpers grouped under a single name, for callers that prefer `JoHelp::parse_error`.
pub struct JoHelp;

impl JoHelp {
    pub fn parse_error(error: JoError) -> String {
        parse_error(error)
    }
}

//! # Jo Client
//!
//! This module implements the invocation surfaces, the entry points most callers need.
//!
//! Jolie services expose whatever operations they declare, so the client cannot know the valid
//! operation names ahead of time. Instead, the operation name is an explicit string bound at
//! call time, and every call runs the same pipeline:
//!
//! 1. [`crate::request::encode`] builds the URL, method, headers and body.
//! 2. The [`Transport`] sends exactly one request.
//! 3. [`crate::response::interpret`] decodes the JSON result or extracts the fault.
//!
//! There are two surfaces:
//!
//! 1. **[`Jo`]**: Operations are invoked with `POST` unless the parameters say otherwise.
//! 2. **[`Jor`]**: Resource-style. Every call names its HTTP verb (`get`, `post`, `put`...).
//!
//! Both can be scoped to a service with `service(name)`, which addresses operations as
//! `/!/<service>!/<operation>`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jo_core::{HttpTransport, InvocationParams, Jo, Jor};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new("http://localhost:8000")?;
//!
//! // POST /!/Calculator!/sum with body {"x":1,"y":2}
//! let jo = Jo::new(transport.clone());
//! let sum = jo.service("Calculator").operation("sum").call(Some(json!({"x": 1, "y": 2}))).await?;
//!
//! // GET /users?{"id":3}
//! let jor = Jor::new(transport);
//! let user = jor.resource("users").get(Some(json!({"id": 3})), InvocationParams::new()).await?;
//! # Ok(())
//! # }
//! ```
mod plain;
mod resource;

pub use plain::{Jo, Operation};
pub use resource::{Jor, Resource};

use crate::{
    error::JoError,
    request::{HttpVerb, InvocationParams, encode},
    response::interpret,
    transport::Transport,
};
use serde_json::Value;

/// Folds the call arguments and the surface bindings into the parameters of one invocation.
///
/// `data` replaces `params.data` when present. A bound service or verb always wins over the
/// one found in `params`.
fn bind_params(
    data: Option<Value>,
    mut params: InvocationParams,
    service: Option<&str>,
    verb: Option<HttpVerb>,
) -> InvocationParams {
    if data.is_some() {
        params.data = data;
    }
    if let Some(service) = service {
        params.service = Some(service.to_string());
    }
    if verb.is_some() {
        params.method = verb;
    }
    params
}

/// Runs one invocation of `operation` through the encode, send, interpret pipeline.
async fn dispatch<T: Transport>(
    transport: &T,
    operation: &str,
    params: InvocationParams,
) -> Result<Value, JoError> {
    let request = encode(operation, &params)?;

    tracing::debug!(
        service = params.service.as_deref(),
        operation,
        method = %request.method,
        url = %request.url,
        "invoking operation"
    );

    let response = transport.send(request).await?;

    tracing::debug!(operation, status = %response.status, "operation completed");

    interpret(response)
}

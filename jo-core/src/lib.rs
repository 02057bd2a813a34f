//! # Jo Core
//!
//! `jo-core` is the foundational library powering the Jo CLI. It lets you call operations
//! exposed by Jolie services over HTTP/JSON as if they were plain async functions, without
//! declaring those operations anywhere in advance.
//!
//! ## Key Components
//!
//! * **[`Jo`]:** The plain invocation surface. Any operation name can be invoked on it, and
//!   [`Jo::service`] scopes it to a named service (`/!/<service>!/<operation>`).
//! * **[`Jor`]:** The resource-style surface. It works like [`Jo`] but lets the caller pick the
//!   HTTP verb of every call (`jor.resource("users").get(..)`).
//! * **[`parse_error`]:** Collapses any [`JoError`] into a single string, either the serialized
//!   fault sent by the service or a plain message.
//!
//! ## Internal building blocks
//!
//! The pieces used by the surfaces are public too, so callers can drive the pipeline by hand:
//!
//! * **[`request::encode`]:** Builds the URL, method, headers and body of a call.
//! * **[`response::interpret`]:** Turns a raw HTTP response into a JSON value or a fault.
//! * **[`Transport`]:** The seam between the library and the network. [`HttpTransport`] is the
//!   `reqwest` based implementation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jo_core::{HttpTransport, Jo, parse_error};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let jo = Jo::new(HttpTransport::new("http://localhost:8000")?);
//!
//! let jokes = jo
//!     .service("ChuckNorris")
//!     .operation("search")
//!     .call(Some(serde_json::json!({ "query": "Computer" })))
//!     .await
//!     .map_err(parse_error)?;
//!
//! println!("{jokes}");
//! # Ok(())
//! # }
//! ```
pub mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{Jo, Jor, Operation, Resource};
pub use error::{JoError, JoHelp, parse_error};
pub use request::{EncodeError, EncodedRequest, HttpVerb, InvocationParams, UnknownVerb};
pub use response::RawResponse;
pub use transport::{HttpTransport, HttpTransportBuilder, Transport, TransportError};

// Re-exports
pub use http;
pub use serde_json;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

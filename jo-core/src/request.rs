//! # Request Encoder
//!
//! Pure functions that turn an operation name and a set of [`InvocationParams`] into an
//! [`EncodedRequest`], following the URL conventions of the Jolie HTTP protocol:
//!
//! * **Without service**: `/<operation>`
//! * **With service**: `/!/<service>!/<operation>`
//!
//! ## Payload placement
//!
//! * **GET / HEAD**: the payload is serialized as a single JSON blob and appended, raw, as the
//!   query string (`/search?{"query":"Earth"}`). It is *not* flattened into `key=value` pairs.
//! * **Any other verb**: the payload is serialized as JSON into the request body.
//!
//! No network I/O happens in this module.
use http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};
use serde_json::Value;
use std::{fmt, str::FromStr};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Errors that can occur while encoding an invocation.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Operation name cannot be empty")]
    EmptyOperation,
    #[error("Failed to serialize payload: '{0}'")]
    Payload(#[from] serde_json::Error),
}

/// The HTTP verbs an operation can be invoked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpVerb {
    Get,
    #[default]
    Post,
    Delete,
    Head,
    Patch,
    Options,
    Put,
}

impl HttpVerb {
    /// Every supported verb, in the order the resource-style surface exposes them.
    pub const ALL: [HttpVerb; 7] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Delete,
        HttpVerb::Head,
        HttpVerb::Patch,
        HttpVerb::Options,
        HttpVerb::Put,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Head => "HEAD",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Options => "OPTIONS",
            HttpVerb::Put => "PUT",
        }
    }

    /// Whether the payload of this verb travels in the query string instead of the body.
    pub fn uses_query(&self) -> bool {
        matches!(self, HttpVerb::Get | HttpVerb::Head)
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported HTTP verb '{0}'")]
pub struct UnknownVerb(pub String);

impl FromStr for HttpVerb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpVerb::ALL
            .into_iter()
            .find(|verb| verb.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVerb(s.to_string()))
    }
}

impl From<HttpVerb> for http::Method {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => http::Method::GET,
            HttpVerb::Post => http::Method::POST,
            HttpVerb::Delete => http::Method::DELETE,
            HttpVerb::Head => http::Method::HEAD,
            HttpVerb::Patch => http::Method::PATCH,
            HttpVerb::Options => http::Method::OPTIONS,
            HttpVerb::Put => http::Method::PUT,
        }
    }
}

/// The options of a single invocation.
///
/// A fresh value is built for every call and never mutated once handed to the encoder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvocationParams {
    /// The payload to send. `None` means neither a query string nor a body is added.
    pub data: Option<Value>,
    /// The HTTP verb. Defaults to `POST`.
    pub method: Option<HttpVerb>,
    /// The target service. When `None` the operation is addressed at the server root.
    pub service: Option<String>,
    /// Headers supplied by the caller.
    ///
    /// They are always discarded: every request carries exactly `Content-Type: application/json`.
    pub headers: Vec<(String, String)>,
}

impl InvocationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn method(mut self, method: HttpVerb) -> Self {
        self.method = Some(method);
        self
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}

/// A fully encoded request, ready to be handed over to a [`crate::Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRequest {
    /// Path plus the optional raw JSON query (e.g. `/!/ChuckNorris!/search?{"query":"Earth"}`).
    pub url: String,
    pub method: HttpVerb,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

/// Encodes the invocation of `operation` with the given parameters.
///
/// # Returns
///
/// * `Ok(EncodedRequest)` - The request descriptor.
/// * `Err(EncodeError)` - If the operation name is empty or the payload cannot be serialized.
pub fn encode(operation: &str, params: &InvocationParams) -> Result<EncodedRequest, EncodeError> {
    if operation.is_empty() {
        return Err(EncodeError::EmptyOperation);
    }

    let mut url = operation_path(params.service.as_deref(), operation);
    let method = params.method.unwrap_or_default();
    let mut body = None;

    if let Some(data) = &params.data {
        let json = serde_json::to_string(data)?;
        if method.uses_query() {
            url.push('?');
            url.push_str(&json);
        } else {
            body = Some(json);
        }
    }

    Ok(EncodedRequest {
        url,
        method,
        headers: json_headers(),
        body,
    })
}

fn operation_path(service: Option<&str>, operation: &str) -> String {
    match service {
        None => format!("/{operation}"),
        Some(service) if service.starts_with('/') => format!("/!{service}!/{operation}"),
        Some(service) => format!("/!/{service}!/{operation}"),
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers
}

//! # Transport Layer
//!
//! The [`Transport`] trait is the only place where the library touches the network: it takes
//! one [`EncodedRequest`] and yields one buffered [`RawResponse`]. It does not interpret status
//! codes, that is the job of [`crate::response::interpret`].
//!
//! [`HttpTransport`] is the production implementation, backed by `reqwest`. Request URLs are
//! resolved against its base URL the same way a browser resolves an absolute path against the
//! page origin, so `/!/Calculator!/sum` sent through `http://localhost:8000/app` ends up at
//! `http://localhost:8000/!/Calculator!/sum`.
//!
//! # Error Handling
//!
//! - **`TransportError`**: the request could not be built or no response was received.
//! - Any response at all, whatever its status, is a successful transport round trip.
use crate::{BoxError, request::EncodedRequest, response::RawResponse};
use reqwest::Url;
use std::{future::Future, sync::Arc, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Invalid url '{url}': '{reason}'")]
    InvalidUrl { url: String, reason: String },
    #[error("Failed to build the HTTP client: '{0}'")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Request timed out: '{0}'")]
    Timeout(#[source] BoxError),
    #[error("{0}")]
    Request(#[source] BoxError),
}

/// Sends encoded requests and hands back the raw responses.
///
/// Implementations must issue exactly one request per call and must not retry.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: EncodedRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: EncodedRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        (**self).send(request)
    }
}

/// A [`Transport`] that sends requests over HTTP using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with default settings.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The server URL (e.g., `http://localhost:8000`).
    ///
    /// # Returns
    ///
    /// * `Ok(HttpTransport)` - The transport.
    /// * `Err(TransportError)` - If the URL is invalid or the client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpTransportBuilder {
    /// Sets a timeout covering the whole round trip of every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<HttpTransport, TransportError> {
        let base_url = Url::parse(&self.base_url).map_err(|e| TransportError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::ClientBuild)?;

        Ok(HttpTransport { base_url, client })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: EncodedRequest) -> Result<RawResponse, TransportError> {
        let url = self
            .base_url
            .join(&request.url)
            .map_err(|e| TransportError::InvalidUrl {
                url: request.url.clone(),
                reason: e.to_string(),
            })?;

        let mut builder = self
            .client
            .request(request.method.into(), url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(request_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(request_error)?;

        Ok(RawResponse { status, body })
    }
}

fn request_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.into())
    } else {
        TransportError::Request(err.into())
    }
}

use crate::backend::{Call, handle};
use http::header::CONTENT_TYPE;
use jo_core::{EncodedRequest, RawResponse, Transport, TransportError};
use tokio::sync::Mutex;

/// The echo service as an in-process [`Transport`].
///
/// Requests never leave the process. Every request is recorded so tests can assert on the exact
/// wire shape produced by the client.
#[derive(Debug, Default)]
pub struct EchoBackend {
    requests: Mutex<Vec<EncodedRequest>>,
    failure: Option<String>,
}

impl EchoBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that cannot be reached: every request fails at the transport level with `message`.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            requests: Mutex::default(),
            failure: Some(message.into()),
        }
    }

    /// All the requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<EncodedRequest> {
        self.requests.lock().await.clone()
    }

    /// The most recent request, if any.
    pub async fn last_request(&self) -> Option<EncodedRequest> {
        self.requests.lock().await.last().cloned()
    }
}

impl Transport for EchoBackend {
    async fn send(&self, request: EncodedRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().await.push(request.clone());

        if let Some(message) = &self.failure {
            return Err(TransportError::Request(message.clone().into()));
        }

        let (path, query) = match request.url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (request.url.as_str(), None),
        };

        let reply = handle(&Call {
            method: request.method.as_str(),
            path,
            query,
            body: request.body.as_deref(),
            content_type: request
                .headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        });

        Ok(RawResponse::new(reply.status, reply.body))
    }
}

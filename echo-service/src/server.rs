use crate::backend::{Call, handle};
use axum::{
    Router,
    http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
    response::IntoResponse,
};
use bytes::Bytes;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// The echo service as an `axum` router. Every path is handled by the same fallback.
pub fn router() -> Router {
    Router::new().fallback(echo_handler)
}

/// Binds the echo service on an ephemeral localhost port and serves it in the background.
///
/// Returns the bound address.
pub async fn spawn() -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move { axum::serve(listener, router()).await });

    Ok(addr)
}

/// Answers any request through [`handle`].
///
/// The whole query string is percent-decoded before routing, since the client's URL parser
/// escapes characters such as `"`. Decoding is lossy: a payload that already contains `%XX`
/// text comes back decoded (`"50%25"` is read as `"50%"`).
async fn echo_handler(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let query = match uri.query().map(urlencoding::decode).transpose() {
        Ok(query) => query,
        Err(_) => return (StatusCode::BAD_REQUEST, json_headers(), String::new()),
    };
    let body = std::str::from_utf8(&body).ok().filter(|b| !b.is_empty());

    let reply = handle(&Call {
        method: method.as_str(),
        path: uri.path(),
        query: query.as_deref(),
        body,
        content_type: headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
    });

    (reply.status, json_headers(), reply.body)
}

fn json_headers() -> [(axum::http::HeaderName, &'static str); 1] {
    [(CONTENT_TYPE, "application/json")]
}

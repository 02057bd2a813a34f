use http::StatusCode;
use serde_json::{Value, json};

pub const TEST_ACK: &str = "test acknowledged";

/// A request as seen by the backend, independent of how it got there.
#[derive(Debug, Clone)]
pub struct Call<'a> {
    pub method: &'a str,
    pub path: &'a str,
    /// The decoded query string, without the leading `?`.
    pub query: Option<&'a str>,
    pub body: Option<&'a str>,
    pub content_type: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    fn json(status: StatusCode, value: Value) -> Self {
        Self {
            status,
            body: value.to_string(),
        }
    }

    fn bad_request(msg: String) -> Self {
        Self::json(StatusCode::BAD_REQUEST, json!({ "error": { "msg": msg } }))
    }
}

/// Splits `/!/<service>!/<operation>` or `/<operation>` into its parts.
fn route(path: &str) -> (Option<&str>, &str) {
    if let Some(rest) = path.strip_prefix("/!")
        && let Some((service, operation)) = rest.split_once("!/")
    {
        return (Some(service.trim_start_matches('/')), operation);
    }
    (None, path.trim_start_matches('/'))
}

fn payload(raw: Option<&str>) -> Result<Option<Value>, String> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => serde_json::from_str(raw)
            .map(Some)
            .map_err(|e| format!("invalid JSON payload: {e}")),
    }
}

/// Answers a call the way the echo service does.
pub fn handle(call: &Call<'_>) -> Reply {
    let (service, operation) = route(call.path);

    let raw = if matches!(call.method, "GET" | "HEAD") {
        call.query
    } else {
        call.body
    };
    let data = match payload(raw) {
        Ok(data) => data,
        Err(msg) => return Reply::bad_request(msg),
    };

    match operation {
        "test" => Reply::json(StatusCode::OK, json!(TEST_ACK)),
        "echo" => Reply::json(StatusCode::OK, data.unwrap_or(Value::Null)),
        "search" => {
            let query = data
                .as_ref()
                .and_then(|d| d.get("query"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            Reply::json(
                StatusCode::OK,
                json!({ "result": [{ "value": format!("{query} joke") }] }),
            )
        }
        "inspect" => Reply::json(
            StatusCode::OK,
            json!({
                "method": call.method,
                "service": service,
                "operation": operation,
                "path": call.path,
                "query": call.query,
                "body": call.body,
                "content_type": call.content_type,
            }),
        ),
        "fail" => Reply::json(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": data.unwrap_or_else(|| json!({ "msg": "bad" })) }),
        ),
        "broken" => Reply {
            status: StatusCode::BAD_GATEWAY,
            body: "<html>Bad Gateway</html>".to_string(),
        },
        _ => Reply::json(
            StatusCode::NOT_FOUND,
            json!({ "error": { "msg": "operation not found" } }),
        ),
    }
}

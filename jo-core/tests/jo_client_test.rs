use echo_service::{EchoBackend, TEST_ACK};
use futures_util::future::join_all;
use jo_core::{
    HttpVerb, InvocationParams, Jo, JoError, JoHelp, http::header::CONTENT_TYPE, parse_error,
};
use serde_json::json;
use std::sync::Arc;

fn client() -> (Arc<EchoBackend>, Jo<EchoBackend>) {
    let backend = Arc::new(EchoBackend::new());
    let jo = Jo::from_shared(Arc::clone(&backend));
    (backend, jo)
}

#[tokio::test]
async fn test_search_with_default_post() {
    let (backend, jo) = client();

    let res = jo
        .invoke(
            "search",
            None,
            InvocationParams::new()
                .service("ChuckNorris")
                .data(json!({ "query": "Computer" })),
        )
        .await
        .unwrap();

    assert_eq!(res, json!({ "result": [{ "value": "Computer joke" }] }));

    let request = backend.last_request().await.unwrap();
    assert_eq!(request.url, "/!/ChuckNorris!/search");
    assert_eq!(request.method, HttpVerb::Post);
    assert_eq!(request.body.as_deref(), Some(r#"{"query":"Computer"}"#));
    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.headers[CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn test_search_with_get() {
    let (backend, jo) = client();

    let res = jo
        .invoke(
            "search",
            None,
            InvocationParams::new()
                .service("ChuckNorris")
                .method(HttpVerb::Get)
                .data(json!({ "query": "Earth" })),
        )
        .await
        .unwrap();

    assert_eq!(res["result"][0]["value"], "Earth joke");

    let request = backend.last_request().await.unwrap();
    assert_eq!(request.url, r#"/!/ChuckNorris!/search?{"query":"Earth"}"#);
    assert_eq!(request.method, HttpVerb::Get);
    assert!(request.body.is_none());
    assert_eq!(request.headers[CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn test_test_operation() {
    let (backend, jo) = client();

    let res = jo.test().await.unwrap();

    assert_eq!(res, json!(TEST_ACK));

    let request = backend.last_request().await.unwrap();
    assert_eq!(request.url, "/test");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_scoped_surface_matches_explicit_service() {
    let (backend, jo) = client();
    let payload = json!({ "message": "hello" });

    let scoped = jo
        .service("svcA")
        .operation("echo")
        .call(Some(payload.clone()))
        .await
        .unwrap();
    let scoped_request = backend.last_request().await.unwrap();

    let explicit = jo
        .invoke(
            "echo",
            Some(payload.clone()),
            InvocationParams::new().service("svcA"),
        )
        .await
        .unwrap();
    let explicit_request = backend.last_request().await.unwrap();

    assert_eq!(scoped, payload);
    assert_eq!(scoped, explicit);
    assert_eq!(scoped_request, explicit_request);
    assert_eq!(scoped_request.url, "/!/svcA!/echo");
}

#[tokio::test]
async fn test_scoped_service_overrides_params_service() {
    let (backend, jo) = client();

    let scoped = jo.service("/Calculator");
    assert_eq!(jo.service_name(), None);
    assert_eq!(scoped.service_name(), Some("/Calculator"));

    let operation = scoped.operation("echo");
    operation
        .call_with(None, InvocationParams::new().service("Ignored"))
        .await
        .unwrap();

    assert_eq!(operation.name(), "echo");
    let request = backend.last_request().await.unwrap();
    assert_eq!(request.url, "/!/Calculator!/echo");
}

#[tokio::test]
async fn test_fault_is_surfaced() {
    let (_, jo) = client();

    let err = jo
        .operation("fail")
        .call(Some(json!({ "msg": "bad" })))
        .await
        .unwrap_err();

    assert!(err.is_fault());
    assert_eq!(err.fault(), Some(&json!({ "msg": "bad" })));
    assert_eq!(err.to_string(), "Internal Server Error");
    assert_eq!(parse_error(err), r#"{"msg":"bad"}"#);
}

#[tokio::test]
async fn test_unknown_operation_is_a_fault() {
    let (_, jo) = client();

    let err = jo
        .service("ChuckNorris")
        .operation("nope")
        .call(None)
        .await
        .map_err(JoHelp::parse_error)
        .unwrap_err();

    assert_eq!(err, r#"{"msg":"operation not found"}"#);
}

#[tokio::test]
async fn test_unparseable_fault_body_is_a_decode_error() {
    let (_, jo) = client();

    let err = jo.operation("broken").call(None).await.unwrap_err();

    assert!(matches!(err, JoError::Decode(_)));
    assert!(!err.is_fault());
}

#[tokio::test]
async fn test_transport_failure_yields_plain_message() {
    let jo = Jo::new(EchoBackend::unreachable("Not Found"));

    let err = jo.operation("search").call(None).await.unwrap_err();

    assert!(matches!(err, JoError::Transport(_)));
    assert_eq!(parse_error(err), "Not Found");
}

#[tokio::test]
async fn test_empty_operation_sends_nothing() {
    let (backend, jo) = client();

    let err = jo.invoke("", None, InvocationParams::new()).await.unwrap_err();

    assert!(matches!(err, JoError::Encode(_)));
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    let (backend, jo) = client();

    let calls = (0..10).map(|i| {
        let jo = jo.clone();
        async move {
            jo.service(format!("svc{i}"))
                .operation("echo")
                .call(Some(json!({ "n": i })))
                .await
        }
    });

    let results = join_all(calls).await;

    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result.unwrap(), json!({ "n": i }));
    }
    assert_eq!(backend.requests().await.len(), 10);
}

#[tokio::test]
async fn test_invocations_run_on_spawned_tasks() {
    let (backend, jo) = client();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let operation = jo.service("Spawned").operation("echo");
            tokio::spawn(async move { operation.call(Some(json!({ "n": i }))).await })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap().unwrap(), json!({ "n": i }));
    }
    assert_eq!(backend.requests().await.len(), 4);
}

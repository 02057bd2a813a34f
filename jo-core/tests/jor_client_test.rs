use echo_service::EchoBackend;
use jo_core::{HttpVerb, InvocationParams, Jo, Jor, Resource};
use serde_json::{Value, json};
use std::sync::Arc;

async fn call_verb(
    resource: &Resource<EchoBackend>,
    verb: HttpVerb,
    data: Option<Value>,
    params: InvocationParams,
) -> Result<Value, jo_core::JoError> {
    match verb {
        HttpVerb::Get => resource.get(data, params).await,
        HttpVerb::Post => resource.post(data, params).await,
        HttpVerb::Delete => resource.delete(data, params).await,
        HttpVerb::Head => resource.head(data, params).await,
        HttpVerb::Patch => resource.patch(data, params).await,
        HttpVerb::Options => resource.options(data, params).await,
        HttpVerb::Put => resource.put(data, params).await,
    }
}

#[tokio::test]
async fn test_every_verb_matches_the_plain_surface() {
    let backend = Arc::new(EchoBackend::new());
    let jo = Jo::from_shared(Arc::clone(&backend));
    let jor = Jor::from_shared(Arc::clone(&backend));
    let payload = json!({ "id": 3 });

    for verb in HttpVerb::ALL {
        let resource = jor.resource("echo");
        let resource_res =
            call_verb(&resource, verb, Some(payload.clone()), InvocationParams::new())
                .await
                .unwrap();
        let resource_request = backend.last_request().await.unwrap();

        let plain_res = jo
            .invoke("echo", Some(payload.clone()), InvocationParams::new().method(verb))
            .await
            .unwrap();
        let plain_request = backend.last_request().await.unwrap();

        assert_eq!(resource_request, plain_request, "verb {verb}");
        assert_eq!(resource_res, plain_res, "verb {verb}");
        assert_eq!(resource_request.method, verb);
    }
}

#[tokio::test]
async fn test_verb_pins_the_method() {
    let backend = Arc::new(EchoBackend::new());
    let jor = Jor::from_shared(Arc::clone(&backend));

    jor.resource("echo")
        .delete(None, InvocationParams::new().method(HttpVerb::Get))
        .await
        .unwrap();

    let request = backend.last_request().await.unwrap();
    assert_eq!(request.method, HttpVerb::Delete);
}

#[tokio::test]
async fn test_get_puts_payload_in_query() {
    let backend = Arc::new(EchoBackend::new());
    let jor = Jor::from_shared(Arc::clone(&backend)).service("Users");

    let res = jor
        .resource("echo")
        .get(Some(json!({ "id": 3 })), InvocationParams::new())
        .await
        .unwrap();

    assert_eq!(res, json!({ "id": 3 }));
    assert_eq!(jor.service_name(), Some("Users"));

    let request = backend.last_request().await.unwrap();
    assert_eq!(request.url, r#"/!/Users!/echo?{"id":3}"#);
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_runtime_verb() {
    let backend = Arc::new(EchoBackend::new());
    let jor = Jor::from_shared(Arc::clone(&backend));
    let resource = jor.service("Users").resource("inspect");

    let res = resource
        .verb(HttpVerb::Put, Some(json!([1, 2])), InvocationParams::new())
        .await
        .unwrap();

    assert_eq!(resource.name(), "inspect");
    assert_eq!(res["method"], "PUT");
    assert_eq!(res["service"], "Users");
    assert_eq!(res["body"], "[1,2]");
    assert_eq!(res["content_type"], "application/json");
}

//! Crate-level integration tests against a mock HAL server.
//!
//! Covers the wire-level contract: default headers, query serialization,
//! content negotiation per payload kind, the created-redirect-follow
//! protocol, error payload unwrapping, and embedded-resource
//! short-circuiting.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};
use url::Url;

use crate::body::{Multipart, RequestBody};
use crate::client::{HttpService, ResourceFactory, ServiceConfig, UrlParams};
use crate::error::HalError;

fn service_for(server: &ServerGuard) -> HttpService {
    let base = Url::parse(&server.url()).unwrap();
    HttpService::with_config(ServiceConfig::with_base_url(base))
}

fn factory_for(server: &ServerGuard) -> ResourceFactory {
    ResourceFactory::new(service_for(server))
}

/// A user resource in the shape a HAL server embeds it: address inline,
/// orders linked only.
fn user_resource() -> Value {
    json!({
        "name": "Alice",
        "_embedded": {
            "address": {
                "city": "Berlin",
                "_links": { "self": { "href": "/users/1/address/" } }
            }
        },
        "_links": {
            "self": { "href": "/users/1/" },
            "orders": { "href": "/users/1/orders/" },
            "place-order": { "href": "/users/1/orders/" }
        }
    })
}

#[tokio::test]
async fn test_get_sends_hal_accept_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/1/")
        .match_header("accept", "application/hal+json")
        .with_status(200)
        .with_body(user_resource().to_string())
        .create_async()
        .await;

    let body = service_for(&server).get("/users/1/", None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(body["name"], "Alice");
}

#[tokio::test]
async fn test_get_sends_no_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/1/")
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    service_for(&server).get("/users/1/", None).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_serializes_url_params() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("tag".into(), "urgent".into()),
            Matcher::UrlEncoded("tag".into(), "new".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let params = UrlParams::new()
        .param("page", 2)
        .param("tag", vec!["urgent", "new"]);
    service_for(&server).get("/users/", Some(&params)).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_plain_payload_negotiates_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/users/")
        .match_header("accept", "application/hal+json")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString("{\"name\":\"Bob\"}".into()))
        .with_status(200)
        .with_body(json!({ "name": "Bob" }).to_string())
        .create_async()
        .await;

    let created = service_for(&server)
        .post("/users/", RequestBody::json(json!({ "name": "Bob" })), None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(created["name"], "Bob");
}

#[tokio::test]
async fn test_post_created_follows_location() {
    let mut server = Server::new_async().await;
    let post = server
        .mock("POST", "/api")
        .with_status(201)
        .with_header("location", "/api/42")
        .create_async()
        .await;
    let follow = server
        .mock("GET", "/api/42")
        .match_header("accept", "application/hal+json")
        .with_status(200)
        .with_body(json!({ "id": 42 }).to_string())
        .expect(1)
        .create_async()
        .await;

    let body = service_for(&server)
        .post("/api", RequestBody::json(json!({})), None)
        .await
        .unwrap();

    post.assert_async().await;
    follow.assert_async().await;
    // The observable result is the follow-up GET's body, not the POST's own
    // empty body.
    assert_eq!(body["id"], 42);
}

#[tokio::test]
async fn test_post_ok_is_not_followed() {
    let mut server = Server::new_async().await;
    let post = server
        .mock("POST", "/api")
        .with_status(200)
        .with_body(json!({ "done": true }).to_string())
        .create_async()
        .await;
    let follow = server
        .mock("GET", "/api/42")
        .expect(0)
        .create_async()
        .await;

    let body = service_for(&server)
        .post("/api", RequestBody::json(json!({})), None)
        .await
        .unwrap();

    post.assert_async().await;
    follow.assert_async().await;
    assert_eq!(body["done"], true);
}

#[tokio::test]
async fn test_post_ok_with_location_is_not_followed() {
    // The trigger is exactly 201 + Location; a 200 carrying a Location header
    // must not be followed.
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api")
        .with_status(200)
        .with_header("location", "/api/42")
        .with_body(json!({ "own": true }).to_string())
        .create_async()
        .await;
    let follow = server
        .mock("GET", "/api/42")
        .expect(0)
        .create_async()
        .await;

    let body = service_for(&server)
        .post("/api", RequestBody::json(json!({})), None)
        .await
        .unwrap();

    follow.assert_async().await;
    assert_eq!(body["own"], true);
}

#[tokio::test]
async fn test_post_created_without_location_returns_own_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api")
        .with_status(201)
        .with_body(json!({ "own": true }).to_string())
        .create_async()
        .await;

    let body = service_for(&server)
        .post("/api", RequestBody::json(json!({})), None)
        .await
        .unwrap();

    assert_eq!(body["own"], true);
}

#[tokio::test]
async fn test_put_created_is_not_followed() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/api/1")
        .with_status(201)
        .with_header("location", "/api/42")
        .with_body(json!({ "own": true }).to_string())
        .create_async()
        .await;
    let follow = server
        .mock("GET", "/api/42")
        .expect(0)
        .create_async()
        .await;

    let body = service_for(&server)
        .put("/api/1", RequestBody::json(json!({})), None)
        .await
        .unwrap();

    follow.assert_async().await;
    assert_eq!(body["own"], true);
}

#[tokio::test]
async fn test_server_error_payload_is_unwrapped() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api")
        .with_status(409)
        .with_body(json!({ "message": "version conflict" }).to_string())
        .create_async()
        .await;

    let err = service_for(&server)
        .post("/api", RequestBody::json(json!({})), None)
        .await
        .unwrap_err();

    match err {
        HalError::Server { status, body } => {
            assert_eq!(status.as_u16(), 409);
            assert_eq!(body["message"], "version conflict");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_applies_to_bodiless_verbs_too() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("gone")
        .create_async()
        .await;

    let err = service_for(&server).get("/missing", None).await.unwrap_err();
    match err {
        HalError::Server { status, body } => {
            assert_eq!(status.as_u16(), 404);
            // Non-JSON error payloads parse to null.
            assert_eq!(body, Value::Null);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_uri_list_content_negotiation() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/orders/1/items")
        .match_header("content-type", "text/uri-list")
        .match_body("/items/1/\n/items/2/")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    service_for(&server)
        .put(
            "/orders/1/items",
            RequestBody::uri_list(["/items/1/", "/items/2/"]),
            None,
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_multipart_content_negotiation() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/documents/")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=[A-Za-z0-9]{70}$".into()),
        )
        .match_body(Matcher::Regex(
            "Content-Disposition: form-data; name=meta\r\n".into(),
        ))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let parts = Multipart::new().part("meta", json!({ "x": 1 }), "application/json");
    service_for(&server)
        .post("/documents/", RequestBody::multipart(&parts), None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_wrapper_get_linked_relation_issues_one_get() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/1/orders/")
        .with_status(200)
        .with_body(json!({
            "_embedded": { "orderList": [] },
            "_links": { "self": { "href": "/users/1/orders/" } }
        }).to_string())
        .expect(1)
        .create_async()
        .await;

    let wrapper = factory_for(&server).from_value(user_resource()).unwrap();
    let orders = wrapper.get("orders", None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(orders["_links"]["self"]["href"], "/users/1/orders/");
}

#[tokio::test]
async fn test_wrapper_get_embedded_relation_issues_no_calls() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let wrapper = factory_for(&server).from_value(user_resource()).unwrap();
    let address = wrapper.get("address", None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(address["city"], "Berlin");
}

#[tokio::test]
async fn test_wrapper_get_self_reloads_resource() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/1/")
        .with_status(200)
        .with_body(user_resource().to_string())
        .create_async()
        .await;

    let wrapper = factory_for(&server).from_uri("/users/1/");
    let user = wrapper.get_self(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(user["name"], "Alice");
}

#[tokio::test]
async fn test_wrapper_null_payload_submits_empty_body() {
    // Action-style endpoint: no payload, but the JSON content type stays.
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/orders/7/")
        .match_header("content-type", "application/json")
        .match_body("")
        .with_status(200)
        .with_body(json!({ "state": "cancelled" }).to_string())
        .create_async()
        .await;

    let order = json!({
        "_links": {
            "self": { "href": "/orders/7/" },
            "cancel": { "href": "/orders/7/" }
        }
    });
    let wrapper = factory_for(&server).from_value(order).unwrap();
    let cancelled = wrapper.post("cancel", Value::Null, None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(cancelled["state"], "cancelled");
}

#[tokio::test]
async fn test_wrapper_delete_self() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/users/1/")
        .match_header("content-type", Matcher::Missing)
        .with_status(204)
        .create_async()
        .await;

    let wrapper = factory_for(&server).from_uri("/users/1/");
    let body = wrapper.delete_self(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_end_to_end_create_through_relation() {
    // POST through `place-order`, server answers 201 + Location, and the
    // wrapper's observable result is the created order's representation.
    let mut server = Server::new_async().await;
    let post = server
        .mock("POST", "/users/1/orders/")
        .match_header("content-type", "application/json")
        .with_status(201)
        .with_header("location", "/orders/8/")
        .create_async()
        .await;
    let follow = server
        .mock("GET", "/orders/8/")
        .with_status(200)
        .with_body(json!({
            "total": 42,
            "_links": {
                "self": { "href": "/orders/8/" },
                "cancel": { "href": "/orders/8/" }
            }
        }).to_string())
        .expect(1)
        .create_async()
        .await;

    let factory = factory_for(&server);
    let user = factory.from_value(user_resource()).unwrap();
    let placed = user
        .post("place-order", json!({ "total": 42 }), None)
        .await
        .unwrap();

    post.assert_async().await;
    follow.assert_async().await;
    assert_eq!(placed["total"], 42);

    // The created resource is itself navigable.
    let order = factory.from_value(placed).unwrap();
    assert_eq!(order.resource().self_url(), "/orders/8/");
}

#[tokio::test]
async fn test_concurrent_independent_calls() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/a/")
        .with_status(200)
        .with_body(json!({ "id": "a" }).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/b/")
        .with_status(200)
        .with_body(json!({ "id": "b" }).to_string())
        .create_async()
        .await;

    let http = service_for(&server);
    let (a, b) = tokio::join!(http.get("/a/", None), http.get("/b/", None));
    assert_eq!(a.unwrap()["id"], "a");
    assert_eq!(b.unwrap()["id"], "b");
}

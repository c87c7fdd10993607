//! Response wrappers over real HTTP responses

use globus_sdk_core::response::{GlobusHttpResponse, GlobusResponse, ResponseError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn fetch(server: &MockServer, route: &str) -> GlobusHttpResponse {
    let raw = reqwest::get(format!("{}{}", server.uri(), route)).await.unwrap();
    GlobusHttpResponse::from_reqwest(raw).await.unwrap()
}

#[tokio::test]
async fn test_json_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/task/7"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"id": 7}"#, "application/json"))
        .mount(&server)
        .await;

    let response = fetch(&server, "/task/7").await;

    assert_eq!(response.http_status(), 200);
    assert_eq!(response.content_type(), Some("application/json"));
    assert_eq!(response.data().unwrap()["id"], 7);
    assert_eq!(response.text(), r#"{"id": 7}"#);
    assert_eq!(response.get("id").unwrap(), json!(7));
}

#[tokio::test]
async fn test_plain_text_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(502).set_body_raw("not json", "text/plain"))
        .mount(&server)
        .await;

    let response = fetch(&server, "/broken").await;

    assert_eq!(response.http_status(), 502);
    assert_eq!(response.content_type(), Some("text/plain"));
    assert!(response.data().is_none());
    assert_eq!(response.text(), "not json");
    assert!(matches!(response.get("id"), Err(ResponseError::NotIndexable)));
}

#[test]
fn test_plain_payloads() {
    let list = GlobusResponse::new(json!([1, 2, 3]));
    assert_eq!(list.get(0usize).unwrap(), &json!(1));

    let number = GlobusResponse::new(json!(5));
    assert!(matches!(number.get(0usize), Err(ResponseError::NotIndexable)));

    let mapping = GlobusResponse::new(json!({"a": 1}));
    assert!(matches!(mapping.get("b"), Err(ResponseError::KeyNotFound(_))));
}

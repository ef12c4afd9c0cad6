//! Integration tests for the request pipeline, using wiremock to simulate the API.

use longswipe::metadata::RequestMetadata;
use longswipe::{Client, Error, USER_AGENT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct TestData {
    id: u32,
    name: String,
}

fn client_for(mock_server: &MockServer) -> Client {
    Client::builder()
        .base_url(mock_server.uri())
        .unwrap()
        .public_key("pk_test_123")
        .private_key("sk_test_456")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fixed_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .and(header("authorization", "Bearer pk_test_123"))
        .and(header("x-api-private-key", "sk_test_456"))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", USER_AGENT))
        .and(header("x-forwarded-proto", "https"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestData {
            id: 1,
            name: "Test".to_string(),
        }))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server)
        .get::<TestData>("/test")
        .await
        .unwrap();
    assert_eq!(response.data.id, 1);
}

#[tokio::test]
async fn test_successful_post_populates_target() {
    let mock_server = MockServer::start().await;

    let request_data = TestData {
        id: 0,
        name: "New".to_string(),
    };
    let response_data = TestData {
        id: 7,
        name: "New".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/test"))
        .and(body_json(&request_data))
        .respond_with(ResponseTemplate::new(201).set_body_json(&response_data))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server)
        .post::<_, TestData>("/test", &request_data)
        .await
        .unwrap();

    assert_eq!(response.data, response_data);
    assert_eq!(response.status.as_u16(), 201);
    assert!(response.raw_body.contains("\"id\":7"));
}

#[tokio::test]
async fn test_api_error_uses_message_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status": "error",
            "message": "customer not found",
            "code": 404
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get::<TestData>("/test")
        .await
        .unwrap_err();

    match &err {
        Error::Api { status, message, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "customer not found");
        }
        _ => panic!("Expected Api error, got {:?}", err),
    }
    assert_eq!(err.to_string(), "customer not found");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn test_api_error_falls_back_to_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get::<TestData>("/test")
        .await
        .unwrap_err();

    match &err {
        Error::Api {
            status,
            raw_response,
            ..
        } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(raw_response, "upstream exploded");
        }
        _ => panic!("Expected Api error, got {:?}", err),
    }
    assert_eq!(err.to_string(), "upstream exploded");
}

#[tokio::test]
async fn test_api_error_with_empty_or_missing_message_uses_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empty-message"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"status":"error","message":""}"#),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/no-message"))
        .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"error":"bad amount"}"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/numeric-message"))
        .respond_with(ResponseTemplate::new(409).set_body_string(r#"{"message":42}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client.get::<TestData>("/empty-message").await.unwrap_err();
    assert_eq!(err.to_string(), r#"{"status":"error","message":""}"#);
    assert_eq!(err.status().unwrap().as_u16(), 400);

    let err = client.get::<TestData>("/no-message").await.unwrap_err();
    assert_eq!(err.to_string(), r#"{"error":"bad amount"}"#);
    assert_eq!(err.status().unwrap().as_u16(), 422);

    let err = client.get::<TestData>("/numeric-message").await.unwrap_err();
    assert_eq!(err.to_string(), r#"{"message":42}"#);
}

#[tokio::test]
async fn test_every_failure_status_is_reported() {
    let mock_server = MockServer::start().await;

    for code in [400u16, 401, 403, 404, 429, 500, 502, 503] {
        Mock::given(method("GET"))
            .and(path(format!("/status/{}", code)))
            .respond_with(ResponseTemplate::new(code).set_body_string("nope"))
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    for code in [400u16, 401, 403, 404, 429, 500, 502, 503] {
        let err = client
            .get::<TestData>(format!("/status/{}", code))
            .await
            .unwrap_err();
        assert!(err.is_api_error(), "status {} should be an API error", code);
        assert_eq!(err.status().unwrap().as_u16(), code);
    }
}

#[tokio::test]
async fn test_decode_error_is_distinct_from_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).get::<TestData>("/test").await;

    match result {
        Err(Error::DecodeFailed {
            raw_response,
            serde_error,
            status,
        }) => {
            assert_eq!(status.as_u16(), 200);
            assert_eq!(raw_response, "invalid json");
            assert!(serde_error.contains("expected"));
        }
        _ => panic!("Expected DecodeFailed, got {:?}", result),
    }
}

#[tokio::test]
async fn test_wrong_shape_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "seven"})))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get::<TestData>("/test")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::DecodeFailed { .. }));
    assert!(!err.is_api_error());
}

#[tokio::test]
async fn test_execute_raw_skips_decoding() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/test/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted, not json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let metadata = RequestMetadata::new(http::Method::DELETE, "/test/1");
    let response = client_for(&mock_server)
        .execute_raw::<()>(metadata, None)
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.raw_body, "deleted, not json");
}

#[tokio::test]
async fn test_execute_raw_still_reports_api_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/test"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({"message": "id is required"})),
        )
        .mount(&mock_server)
        .await;

    let metadata = RequestMetadata::new(http::Method::PATCH, "/test");
    let err = client_for(&mock_server)
        .execute_raw(metadata, Some(&serde_json::json!({})))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "id is required");
    assert_eq!(err.status().unwrap().as_u16(), 400);
}

struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(serde::ser::Error::custom("cannot be encoded"))
    }
}

#[tokio::test]
async fn test_serialization_failure_makes_no_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .post::<_, TestData>("/test", &Unserializable)
        .await
        .unwrap_err();

    match &err {
        Error::SerializationFailed(message) => assert!(message.contains("cannot be encoded")),
        _ => panic!("Expected SerializationFailed, got {:?}", err),
    }
    assert_eq!(err.status(), None);

    let received = mock_server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_timeout_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .base_url(mock_server.uri())
        .unwrap()
        .public_key("pk")
        .private_key("sk")
        .timeout(Duration::from_micros(1))
        .build()
        .unwrap();

    let start = Instant::now();
    let err = client.get::<TestData>("/slow").await.unwrap_err();

    assert!(start.elapsed() < Duration::from_secs(2));
    assert!(matches!(err, Error::RequestFailed { status: None, .. }));
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_error() {
    let client = Client::builder()
        .base_url("http://127.0.0.1:1")
        .unwrap()
        .public_key("pk")
        .private_key("sk")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.get::<TestData>("/test").await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed { status: None, .. }));
    assert!(err.to_string().starts_with("request failed"));
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Order {
    reference_id: String,
    amount: f64,
    metadata: BTreeMap<String, serde_json::Value>,
    tags: Vec<String>,
    parent: Option<Box<Order>>,
}

#[tokio::test]
async fn test_echo_round_trip_preserves_nested_structures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/echo"))
        .respond_with(|req: &wiremock::Request| {
            ResponseTemplate::new(200).set_body_bytes(req.body.clone())
        })
        .mount(&mock_server)
        .await;

    let mut metadata = BTreeMap::new();
    metadata.insert("order_id".to_string(), serde_json::json!("ORD-12345"));
    metadata.insert(
        "customer".to_string(),
        serde_json::json!({"id": "cust_123", "tiers": [1, 2, 3], "vip": true}),
    );
    metadata.insert("note".to_string(), serde_json::Value::Null);

    let order = Order {
        reference_id: "payment-ref-123".to_string(),
        amount: 100.25,
        metadata,
        tags: vec!["a".to_string(), "ü€".to_string()],
        parent: Some(Box::new(Order {
            reference_id: "parent".to_string(),
            amount: 1.0,
            metadata: BTreeMap::new(),
            tags: vec![],
            parent: None,
        })),
    };

    let response = client_for(&mock_server)
        .post::<_, Order>("/echo", &order)
        .await
        .unwrap();

    assert_eq!(response.data, order);
}

#[tokio::test]
async fn test_query_parameters_and_request_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .and(query_param("page", "1"))
        .and(query_param("search", "jane doe"))
        .and(header("x-request-id", "req-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestData {
            id: 1,
            name: "Jane".to_string(),
        }))
        .expect(1)
        .mount(&mock_server)
        .await;

    let metadata = RequestMetadata::new(http::Method::GET, "/test")
        .with_query_param("page", "1")
        .with_query_param("search", "jane doe")
        .with_header("X-Request-Id", "req-42")
        .unwrap();

    let response = client_for(&mock_server)
        .execute::<(), TestData>(metadata, None)
        .await
        .unwrap();
    assert_eq!(response.data.name, "Jane");
}

#[tokio::test]
async fn test_request_headers_cannot_override_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .and(header("authorization", "Bearer pk_test_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestData {
            id: 1,
            name: "Test".to_string(),
        }))
        .expect(1)
        .mount(&mock_server)
        .await;

    let metadata = RequestMetadata::new(http::Method::GET, "/test")
        .with_header("Authorization", "Bearer someone-else")
        .unwrap();

    client_for(&mock_server)
        .execute::<(), TestData>(metadata, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_all_http_methods() {
    let mock_server = MockServer::start().await;

    let response_data = TestData {
        id: 1,
        name: "Test".to_string(),
    };

    for verb in ["GET", "POST", "PATCH", "DELETE"] {
        Mock::given(method(verb))
            .and(path("/test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_data))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);

    assert_eq!(client.get::<TestData>("/test").await.unwrap().data.id, 1);
    assert_eq!(
        client
            .post::<_, TestData>("/test", &response_data)
            .await
            .unwrap()
            .data
            .id,
        1
    );
    assert_eq!(
        client
            .patch::<_, TestData>("/test", &response_data)
            .await
            .unwrap()
            .data
            .id,
        1
    );
    assert_eq!(client.delete::<TestData>("/test").await.unwrap().data.id, 1);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestData {
            id: 1,
            name: "Test".to_string(),
        }))
        .expect(8)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get::<TestData>("/test").await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().data.id, 1);
    }
}

#[tokio::test]
async fn test_response_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(TestData {
                    id: 1,
                    name: "Test".to_string(),
                })
                .insert_header("x-custom-header", "custom-value"),
        )
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server)
        .get::<TestData>("/test")
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 200);
    let _ = response.latency;
    assert!(response.raw_body.contains("Test"));
    assert_eq!(response.header("x-custom-header"), Some("custom-value"));
}

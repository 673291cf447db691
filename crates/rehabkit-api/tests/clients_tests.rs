//! Tests for the clients API over the mock transport

mod common;

use std::sync::Arc;

use rehabkit_api::ClientsApi;
use rehabkit_http::{Method, MockResponse, MockTransport};

use common::TestIds;

fn clients_over(mock: &Arc<MockTransport>) -> ClientsApi {
    ClientsApi::new(mock.clone())
}

#[tokio::test]
async fn test_list_decodes_clients() {
    let mock = Arc::new(MockTransport::new());
    mock.set_response(
        Method::GET,
        "/clients",
        MockResponse::success(
            r#"{
                "success": true,
                "data": [
                    {"id":"client_1","name":"Jo Smith","email":"jo@example.com","gender":"female"}
                ]
            }"#,
        ),
    );
    let clients = clients_over(&mock);

    let page = clients.list(1, 20, "").await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Jo Smith");
    // Active flag defaults to true when the payload omits it
    assert!(page[0].is_active);
}

#[tokio::test]
async fn test_create_round_trips_nested_address() {
    let mock = Arc::new(MockTransport::new());
    mock.set_response(
        Method::POST,
        "/clients",
        MockResponse::success(r#"{"success":true,"data":{"id":"client_9"}}"#),
    );
    let clients = clients_over(&mock);
    let mut ids = TestIds::new();
    let client = common::mock_client(&mut ids);

    clients.create(&client).await.unwrap();

    let body = mock.last_request_body(Method::POST, "/clients");
    let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(sent["name"], "Test Client");
    assert_eq!(sent["address"]["zipCode"], "12345");
    assert_eq!(sent["medicalHistory"], "Test condition");
}

#[tokio::test]
async fn test_get_single_client() {
    let mock = Arc::new(MockTransport::new());
    mock.set_response(
        Method::GET,
        "/clients/client_1",
        MockResponse::success(
            r#"{"success":true,"data":{"id":"client_1","name":"Jo Smith","notes":"recovering"}}"#,
        ),
    );
    let clients = clients_over(&mock);

    let client = clients.get("client_1").await.unwrap();
    assert_eq!(client.id, "client_1");
    assert_eq!(client.notes, "recovering");
}

#[tokio::test]
async fn test_update_and_delete_target_id_endpoint() {
    let mock = Arc::new(MockTransport::new());
    mock.set_response(
        Method::PUT,
        "/clients/client_1",
        MockResponse::success(r#"{"success":true,"data":{"id":"client_1"}}"#),
    );
    let clients = clients_over(&mock);
    let mut ids = TestIds::new();
    let client = common::mock_client(&mut ids);

    clients.update("client_1", &client).await.unwrap();
    clients.delete("client_1").await.unwrap();

    assert_eq!(mock.request_count(Method::PUT, "/clients/client_1"), 1);
    assert_eq!(mock.request_count(Method::DELETE, "/clients/client_1"), 1);
    assert_eq!(mock.total_request_count(), 2);
}

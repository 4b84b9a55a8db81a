mod common;

use common::mock_store::{MockResponse, MockStore};
use std::time::Duration;

use bookstall::api::{ApiError, StoreClient, WriteOp};
use bookstall::model::{BookFields, BookStatus};

fn client_for(store: &MockStore) -> StoreClient {
    StoreClient::new(
        &store.collection_url(),
        Duration::from_secs(2),
        Duration::from_secs(2),
    )
}

fn dune_fields() -> BookFields {
    BookFields {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        genre: "Sci-Fi".to_string(),
        published_year: 1965,
        status: BookStatus::Available,
    }
}

#[tokio::test]
async fn list_fetches_and_decodes_collection() {
    let store = MockStore::start().await;
    store
        .enqueue(MockResponse::json(
            r#"[
                {"_id":"1","title":"Dune","author":"Herbert","genre":"Sci-Fi","publishedYear":1965,"status":"Available"},
                {"_id":"2","title":"Emma","author":"Austen","genre":"Classic","publishedYear":1815,"status":"Issued"}
            ]"#,
        ))
        .await;

    let books = client_for(&store).list().await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[1].status, BookStatus::Issued);

    let requests = store.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/books");
}

#[tokio::test]
async fn get_fetches_one_record() {
    let store = MockStore::start().await;
    store
        .enqueue(MockResponse::json(
            r#"{"_id":"42","title":"Dune","author":"Herbert","genre":"Sci-Fi","publishedYear":1965,"status":"Available"}"#,
        ))
        .await;

    let book = client_for(&store).get("42").await.unwrap();
    assert_eq!(book.id.as_deref(), Some("42"));

    let requests = store.captured_requests().await;
    assert_eq!(requests[0].path, "/books/42");
}

#[tokio::test]
async fn get_missing_record_is_not_found() {
    let store = MockStore::start().await;
    store.enqueue(MockResponse::error(404)).await;

    let err = client_for(&store).get("missing").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn read_failure_carries_status() {
    let store = MockStore::start().await;
    store.enqueue(MockResponse::error(500)).await;

    let err = client_for(&store).list().await.unwrap_err();
    match err {
        ApiError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn create_posts_wire_payload_and_returns_assigned_id() {
    let store = MockStore::start().await;
    store
        .enqueue(MockResponse::created(
            r#"{"_id":"new-1","title":"Dune","author":"Herbert","genre":"Sci-Fi","publishedYear":1965,"status":"Available"}"#,
        ))
        .await;

    let created = client_for(&store).create(&dune_fields()).await.unwrap();
    assert_eq!(created.id.as_deref(), Some("new-1"));

    let requests = store.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/books");
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
    assert_eq!(
        requests[0].json_body(),
        serde_json::json!({
            "title": "Dune",
            "author": "Herbert",
            "genre": "Sci-Fi",
            "publishedYear": 1965,
            "status": "Available"
        })
    );
}

#[tokio::test]
async fn update_puts_to_item_url() {
    let store = MockStore::start().await;
    store.enqueue(MockResponse::empty_ok()).await;

    client_for(&store).update("42", &dune_fields()).await.unwrap();

    let requests = store.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/books/42");
    assert_eq!(requests[0].json_body()["publishedYear"], 1965);
}

#[tokio::test]
async fn delete_targets_item_url() {
    let store = MockStore::start().await;
    store.enqueue(MockResponse::empty_ok()).await;

    client_for(&store).delete("42").await.unwrap();

    let requests = store.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/books/42");
}

#[tokio::test]
async fn write_failures_are_tagged_with_operation() {
    let store = MockStore::start().await;
    store.enqueue(MockResponse::error(500)).await;
    store.enqueue(MockResponse::error(400)).await;
    store.enqueue(MockResponse::error(503)).await;

    let client = client_for(&store);

    match client.create(&dune_fields()).await.unwrap_err() {
        ApiError::Write { op, status } => {
            assert_eq!(op, WriteOp::Create);
            assert_eq!(status, 500);
        }
        other => panic!("expected Write, got {other:?}"),
    }
    match client.update("1", &dune_fields()).await.unwrap_err() {
        ApiError::Write { op, .. } => assert_eq!(op, WriteOp::Update),
        other => panic!("expected Write, got {other:?}"),
    }
    match client.delete("1").await.unwrap_err() {
        ApiError::Write { op, .. } => assert_eq!(op, WriteOp::Delete),
        other => panic!("expected Write, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_is_network_error() {
    // Nothing listens on this port.
    let client = StoreClient::new(
        "http://127.0.0.1:1/books",
        Duration::from_millis(200),
        Duration::from_millis(200),
    );
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }));
}

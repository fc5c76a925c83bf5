//! Handler tests for Products domain
//!
//! These drive the products router with `oneshot` against the in-memory
//! repository, plus a storage stub that always fails and counts its calls.
//! They cover:
//! - Response envelopes and status codes
//! - Rejection of malformed ids and bodies before storage is touched
//! - Delete idempotence and insert/list round trips

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt; // For oneshot()

/// Storage that fails every call with a fixed message
#[derive(Clone)]
struct FailingRepository {
    message: &'static str,
    calls: Arc<AtomicUsize>,
}

impl FailingRepository {
    fn new(message: &'static str) -> Self {
        Self {
            message,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn fail<T>(&self) -> ProductResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProductError::Database(self.message.to_string()))
    }
}

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn select_all(&self) -> ProductResult<Vec<Product>> {
        self.fail()
    }

    async fn delete_product_by_id(&self, _id: i64) -> ProductResult<()> {
        self.fail()
    }

    async fn insert_product(&self, _input: CreateProduct) -> ProductResult<()> {
        self.fail()
    }

    async fn update_product(&self, _id: i64, _input: UpdateProduct) -> ProductResult<()> {
        self.fail()
    }
}

fn memory_app() -> (Router, InMemoryProductRepository) {
    let repo = InMemoryProductRepository::new();
    (handlers::router(ProductService::new(repo.clone())), repo)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_insert_then_list_round_trip() {
    let (app, _) = memory_app();

    let (status, _) = send(
        &app,
        "POST",
        "/",
        Some(json!({"id": 1, "name": "Widget", "price": 9.99})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "OK", "result": [{"id": 1, "name": "Widget", "price": 9.99}]})
    );
}

#[tokio::test]
async fn test_list_empty_store() {
    let (app, _) = memory_app();

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "OK", "result": []}));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (app, repo) = memory_app();
    repo.insert_product(CreateProduct {
        id: 7,
        name: "Widget".to_string(),
        price: 1.0,
    })
    .await
    .unwrap();

    for _ in 0..2 {
        let (status, body) = send(&app, "DELETE", "/7", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "OK", "result": "Product with ID 7 deleted successfully"})
        );
    }

    assert!(repo.select_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_replaces_name_and_price() {
    let (app, repo) = memory_app();
    repo.insert_product(CreateProduct {
        id: 2,
        name: "Widget".to_string(),
        price: 9.99,
    })
    .await
    .unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        "/2",
        Some(json!({"name": "Widget Pro", "price": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Product with ID 2 updated successfully"}));

    let products = repo.select_all().await.unwrap();
    assert_eq!(products[0].name, "Widget Pro");
    assert_eq!(products[0].price, 0.0);
}

#[tokio::test]
async fn test_update_of_missing_product_still_succeeds() {
    let (app, repo) = memory_app();

    let (status, _) = send(
        &app,
        "PATCH",
        "/404",
        Some(json!({"name": "Ghost", "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(repo.select_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_insert_is_database_error() {
    let (app, _) = memory_app();
    let product = json!({"id": 1, "name": "Widget", "price": 9.99});

    send(&app, "POST", "/", Some(product.clone())).await;
    let (status, body) = send(&app, "POST", "/", Some(product)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"message": "DATABASE ERROR", "error": "Product with ID 1 already exists"})
    );
}

#[tokio::test]
async fn test_list_with_connection_refused() {
    let repo = FailingRepository::new("connection refused");
    let app = handlers::router(ProductService::new(repo.clone()));

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"message": "DATABASE ERROR", "error": "connection refused"})
    );
    assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalid_requests_never_reach_storage() {
    let repo = FailingRepository::new("should not be called");
    let app = handlers::router(ProductService::new(repo.clone()));

    let cases = [
        ("POST", "/", Some(json!({"id": "1", "name": "Widget", "price": 9.99}))),
        ("POST", "/", Some(json!({"id": 1, "name": ["Widget"], "price": 9.99}))),
        ("POST", "/", Some(json!({"id": 1, "name": "Widget", "price": true}))),
        ("PUT", "/3", Some(json!({"name": 3, "price": 9.99}))),
        ("PUT", "/3", Some(json!({"name": "Widget"}))),
        ("PUT", "/x1", Some(json!({"name": "Widget", "price": 9.99}))),
        ("DELETE", "/abc", None),
        ("DELETE", "/1.5x", None),
    ];

    for (method, uri, body) in cases {
        let (status, _) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
    }

    assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_malformed_json_is_invalid_input() {
    let (app, _) = memory_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"id\": 1,"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"message": "Invalid input data"}));
}

//! HTTP-level tests for the order API, driven in-process through the router.

use std::collections::HashSet;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use order_service::gateway::{build_router, state::AppState};
use order_service::{CounterRegistry, ORDERS_CREATED_TOTAL, OrderStore};

struct TestApp {
    router: Router,
    store: Arc<OrderStore>,
    metrics: Arc<CounterRegistry>,
}

fn app() -> TestApp {
    let store = Arc::new(OrderStore::new());
    let metrics = Arc::new(CounterRegistry::new());
    let state = Arc::new(AppState::from_parts(store.clone(), metrics.clone()));
    TestApp {
        router: build_router(state),
        store,
        metrics,
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create(router: &Router, body: Value) -> Value {
    let (status, bytes) = send(router, post_json(&body.to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_end_to_end_laptop_flow() {
    let app = app();

    let created = create(
        &app.router,
        json!({"product": "Laptop", "price": 999.99, "quantity": 1}),
    )
    .await;
    let order_id = created["orderId"].as_str().unwrap().to_string();
    assert!(!order_id.is_empty());
    assert_eq!(created["product"], "Laptop");
    assert_eq!(created["price"], "999.99");
    assert_eq!(created["quantity"], 1);

    let (status, bytes) = send(&app.router, get(&format!("/api/v1/orders/{}", order_id))).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(fetched, created);

    let (status, bytes) = send(&app.router, get("/api/v1/orders/unknown-id")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(bytes.is_empty());

    let (status, bytes) = send(
        &app.router,
        post_json(r#"{"product":"Mouse","price":0,"quantity":2}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(bytes.is_empty());

    assert_eq!(app.store.len(), 1);
    assert_eq!(app.metrics.get(ORDERS_CREATED_TOTAL), 1);
}

#[tokio::test]
async fn test_list_empty_returns_empty_array() {
    let app = app();
    let (status, bytes) = send(&app.router, get("/api/v1/orders")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_returns_every_created_order() {
    let app = app();
    let mut ids = HashSet::new();
    for (i, product) in ["Keyboard", "Monitor", "Dock"].iter().enumerate() {
        let created = create(
            &app.router,
            json!({"product": product, "price": "19.90", "quantity": i}),
        )
        .await;
        ids.insert(created["orderId"].as_str().unwrap().to_string());
    }

    let (status, bytes) = send(&app.router, get("/api/v1/orders")).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<Value> = serde_json::from_slice(&bytes).unwrap();
    let listed_ids: HashSet<String> = listed
        .iter()
        .map(|o| o["orderId"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed_ids, ids);
}

#[tokio::test]
async fn test_negative_price_is_rejected() {
    let app = app();
    for body in [
        r#"{"product":"Mouse","price":-1,"quantity":2}"#,
        r#"{"product":"Mouse","price":"-0.01","quantity":2}"#,
        r#"{"product":"Mouse","price":"0.00","quantity":2}"#,
    ] {
        let (status, bytes) = send(&app.router, post_json(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        assert!(bytes.is_empty());
    }
    assert!(app.store.is_empty());
    assert_eq!(app.metrics.get(ORDERS_CREATED_TOTAL), 0);
}

#[tokio::test]
async fn test_malformed_bodies_are_bare_400() {
    let app = app();
    for body in [
        "not json",
        r#"{"product":"Mouse","quantity":2}"#,
        r#"{"product":"Mouse","price":"abc","quantity":2}"#,
        r#"{"product":"Mouse","price":1,"quantity":"two"}"#,
    ] {
        let (status, bytes) = send(&app.router, post_json(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        assert!(bytes.is_empty());
    }

    let no_content_type = Request::builder()
        .method("POST")
        .uri("/api/v1/orders")
        .body(Body::from(r#"{"product":"Mouse","price":1,"quantity":2}"#))
        .unwrap();
    let (status, _) = send(&app.router, no_content_type).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_quantity_is_passed_through() {
    let app = app();
    let created = create(
        &app.router,
        json!({"product": "Refund", "price": "5", "quantity": -4}),
    )
    .await;
    assert_eq!(created["quantity"], -4);
}

#[tokio::test]
async fn test_missing_quantity_defaults_to_zero() {
    let app = app();
    let (status, bytes) = send(&app.router, post_json(r#"{"product":"A","price":5}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created["quantity"], 0);
    assert_eq!(created["price"], "5");
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_numeric_price_keeps_full_precision() {
    let app = app();
    let (status, bytes) = send(
        &app.router,
        post_json(r#"{"product":"A","price":1.00000000000000000001,"quantity":1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let from_number: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(from_number["price"], "1.00000000000000000001");

    let from_string = create(
        &app.router,
        json!({"product": "A", "price": "1.00000000000000000001", "quantity": 1}),
    )
    .await;
    assert_eq!(from_string["price"], from_number["price"]);
}

#[tokio::test]
async fn test_price_beyond_28_decimal_places_is_bare_400() {
    let app = app();
    for body in [
        r#"{"product":"A","price":"0.000000000000000000000000000001","quantity":1}"#,
        r#"{"product":"A","price":0.000000000000000000000000000001,"quantity":1}"#,
    ] {
        let (status, bytes) = send(&app.router, post_json(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        assert!(bytes.is_empty());
    }
    assert!(app.store.is_empty());

    let finest = create(
        &app.router,
        json!({"product": "A", "price": "0.0000000000000000000000000001", "quantity": 1}),
    )
    .await;
    assert_eq!(finest["price"], "0.0000000000000000000000000001");
}

#[tokio::test]
async fn test_reads_are_repeatable() {
    let app = app();
    let created = create(
        &app.router,
        json!({"product": "Lamp", "price": 12, "quantity": 1}),
    )
    .await;
    let uri = format!("/api/v1/orders/{}", created["orderId"].as_str().unwrap());

    for _ in 0..3 {
        let (status, bytes) = send(&app.router, get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap(), created);

        let (_, bytes) = send(&app.router, get("/api/v1/orders")).await;
        assert_eq!(serde_json::from_slice::<Vec<Value>>(&bytes).unwrap().len(), 1);
    }
    assert_eq!(app.store.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_over_http() {
    let app = app();
    let k = 64;

    let tasks: Vec<_> = (0..k)
        .map(|i| {
            let router = app.router.clone();
            tokio::spawn(async move {
                let body = json!({"product": format!("item-{}", i), "price": "1.00", "quantity": 1});
                let (status, bytes) = send(&router, post_json(&body.to_string())).await;
                assert_eq!(status, StatusCode::CREATED);
                let order: Value = serde_json::from_slice(&bytes).unwrap();
                order["orderId"].as_str().unwrap().to_string()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.unwrap());
    }

    assert_eq!(ids.len(), k);
    assert_eq!(app.store.len(), k);
    assert_eq!(app.metrics.get(ORDERS_CREATED_TOTAL), k as u64);
}

#[tokio::test]
async fn test_health_reports_order_count() {
    let app = app();
    create(
        &app.router,
        json!({"product": "Laptop", "price": 1, "quantity": 1}),
    )
    .await;

    let (status, bytes) = send(&app.router, get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "UP");
    assert_eq!(body["ordersTotal"], 1);
    assert!(body["timestampMs"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app();
    let (status, bytes) = send(&app.router, get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/v1/orders"].is_object());
}

//! Integration tests for the PostgreSQL product repository
//!
//! Each test starts a PostgreSQL container with the workspace migrations
//! applied, so they need Docker: `cargo test -- --ignored`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashSet;
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt;

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_list_roundtrip() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_create_and_list");

    let created = service
        .create_product(CreateProduct {
            title: builder.title("book"),
            price: 9.99,
            content: Some("Hardcover".to_string()),
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert!(created.updated_at >= created.created_at);

    let products = service.get_products().await.unwrap();
    assert_eq!(products, vec![created]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_empty_table() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    assert!(service.get_products().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_concurrent_inserts_get_distinct_ids() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_product(CreateProduct {
                        title: format!("item-{i}"),
                        price: i as f64,
                        content: None,
                    })
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap().id);
    }

    assert_eq!(ids.len(), 8);
    assert_eq!(service.get_products().await.unwrap().len(), 8);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_handler_create_returns_201_with_store_timestamps() {
    let db = TestDatabase::new().await;
    let app = handlers::router(ProductService::new(PgProductRepository::new(db.connection())));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from(json!({"title": "Book", "price": 9.99}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["title"], "Book");
    assert_eq!(body["price"], 9.99);
    assert!(body["createdAt"].is_string());
}

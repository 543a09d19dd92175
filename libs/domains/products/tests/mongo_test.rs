//! Products against a real MongoDB
//!
//! These tests start a MongoDB container through `TestMongo` and need Docker.
//! Run them with `cargo test -p domain_products -- --ignored`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use database::mongodb::bson::{doc, Bson};
use database::mongodb::DocumentStore;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{assertions::assert_hex_id, TestDataBuilder, TestMongo};
use tower::ServiceExt; // For oneshot()

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_store_insert_filter_and_limit() {
    let mongo = TestMongo::new().await;
    let store = mongo.store();
    assert_eq!(store.database_name().as_deref(), Some("test"));
    store.ping().await.unwrap();

    for i in 0..5 {
        let id = store
            .create_document(
                PRODUCT_COLLECTION,
                doc! { "title": format!("phone-{i}"), "category": "mobile" },
            )
            .await
            .unwrap();
        assert!(matches!(id, Bson::ObjectId(_)));
    }
    store
        .create_document(
            PRODUCT_COLLECTION,
            doc! { "title": "slate", "category": "tablet" },
        )
        .await
        .unwrap();

    let limited = store
        .get_documents(PRODUCT_COLLECTION, doc! { "category": "mobile" }, 2)
        .await
        .unwrap();
    assert_eq!(limited.len(), 2);

    let tablets = store
        .get_documents(PRODUCT_COLLECTION, doc! { "category": "tablet" }, 50)
        .await
        .unwrap();
    assert_eq!(tablets.len(), 1);
    assert_eq!(tablets[0].get_str("title").unwrap(), "slate");
    assert!(tablets[0].get_datetime("created_at").is_ok());
    assert!(tablets[0].get_datetime("updated_at").is_ok());

    let names = store.list_collection_names().await.unwrap();
    assert!(names.iter().any(|n| n == PRODUCT_COLLECTION));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_router_round_trip_renders_hex_id() {
    let mongo = TestMongo::new().await;
    let app = handlers::router(ProductService::new(mongo.store()));
    let builder = TestDataBuilder::from_test_name("mongo_round_trip");
    let category = builder.category("phones");

    let payload = json!({
        "title": builder.title("phone"),
        "description": "Stored in MongoDB",
        "price": builder.price(),
        "category": category
    });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = json_body(response.into_body()).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_hex_id(&id, "created id");

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/?category={category}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], id);
    assert!(products[0].get("_id").is_none());
    assert_eq!(products[0]["title"], builder.title("phone"));
    assert!(products[0]["created_at"].as_str().unwrap().contains('T'));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_empty_collection_serves_sample_catalog() {
    let mongo = TestMongo::new().await;
    let service = ProductService::new(mongo.store());

    let records = service.list_products(ProductQuery::default()).await.unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| !r.contains_key("id")));
}

//! Category and product CRUD over HTTP.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::{Value, json};

use coffee_shop_integration_tests::TestApp;
use coffee_shop_server::db::MemoryStore;

fn latte(category: &str) -> Value {
    json!({
        "name": "Latte",
        "description": "Espresso with steamed milk",
        "size": "12",
        "category": category,
        "price_cents": 450
    })
}

#[tokio::test]
async fn test_created_category_is_listed_once() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/newCat", json!({"name": "tea", "units": "ml"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let (status, categories) = app.get("/categories").await;
    assert_eq!(status, StatusCode::OK);
    let matching: Vec<&Value> = categories
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["name"] == "tea" && c["sizeunits"] == "ml")
        .collect();
    assert_eq!(matching.len(), 1);
}

#[tokio::test]
async fn test_wrapped_body_is_accepted() {
    let app = TestApp::new();

    let (status, _) = app
        .post(
            "/newCat",
            json!({"password": coffee_shop_integration_tests::ADMIN_PASSWORD,
                   "request": {"name": "espresso", "units": "oz"}}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, categories) = app.get("/categories").await;
    assert_eq!(categories[0]["name"], "espresso");
}

#[tokio::test]
async fn test_menu_matches_category_exactly() {
    let app = TestApp::new();
    app.post("/newProd", latte("espresso")).await;
    app.post("/newProd", latte("Espresso")).await;
    app.post("/newProd", latte("espresso-decaf")).await;

    let (status, products) = app.get("/menu/espresso").await;
    assert_eq!(status, StatusCode::OK);
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["category"], "espresso");

    let (_, none) = app.get("/menu/espres").await;
    assert!(none.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_products_listed_in_id_order() {
    let app = TestApp::new();
    app.post("/newProd", latte("espresso")).await;
    app.post("/newProd", latte("tea")).await;

    let (_, products) = app.get("/products").await;
    let ids: Vec<i64> = products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let app = TestApp::new();
    app.post("/newCat", json!({"name": "tea", "units": "ml"}))
        .await;

    let update = json!({"name": "herbal", "units": "oz"});
    let (first, _) = app.post("/updateCat/1", update.clone()).await;
    let (_, after_first) = app.get("/categories").await;
    let (second, _) = app.post("/updateCat/1", update).await;
    let (_, after_second) = app.get("/categories").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(after_first, after_second);
    assert_eq!(after_second[0]["name"], "herbal");
    assert_eq!(after_second[0]["sizeunits"], "oz");
}

#[tokio::test]
async fn test_update_product_replaces_every_field() {
    let app = TestApp::new();
    app.post("/newProd", latte("espresso")).await;

    let (status, body) = app
        .post(
            "/updateProd/1",
            json!({
                "name": "Flat White",
                "description": "Ristretto with microfoam",
                "size": "6",
                "category": "espresso",
                "price_cents": 425
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, products) = app.get("/products").await;
    assert_eq!(products[0]["name"], "Flat White");
    assert_eq!(products[0]["price_cents"], 425);
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/updateCat/42", json!({"name": "tea", "units": "ml"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_delete_category() {
    let app = TestApp::new();
    app.post("/newCat", json!({"name": "tea", "units": "ml"}))
        .await;

    let (status, body) = app.delete("/deleteCat/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, categories) = app.get("/categories").await;
    assert!(categories.as_array().unwrap().is_empty());

    let (status, _) = app.delete("/deleteCat/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_still_ordered_conflicts() {
    let app = TestApp::new();
    app.post("/newProd", latte("espresso")).await;
    app.post(
        "/newOrder",
        json!({
            "info": {"fname": "Ada", "lname": "Lovelace", "phone": "555-0100"},
            "bundles": [{"productId": 1, "quantity": 1}]
        }),
    )
    .await;

    let (status, body) = app.delete("/deleteProd/1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app.post("/newCat", json!({"name": "tea"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_read_failure_is_an_error_envelope() {
    let app = TestApp::with_store(MemoryStore::new().failing_reads(), false);

    for uri in ["/categories", "/products", "/menu/espresso"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body["success"], false, "{uri}");
        assert_eq!(body["message"], "Internal server error", "{uri}");
    }
}

#[tokio::test]
async fn test_write_failure_is_an_error_envelope() {
    let app = TestApp::with_store(MemoryStore::new().failing_writes(), false);

    let (status, body) = app
        .post("/newCat", json!({"name": "tea", "units": "ml"}))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_non_numeric_id_is_an_error_envelope() {
    let app = TestApp::new();
    app.post("/newCat", json!({"name": "tea", "units": "ml"}))
        .await;

    let (status, body) = app.delete("/deleteCat/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = app
        .post("/updateProd/abc", json!({
            "name": "Latte",
            "description": "",
            "size": "12",
            "category": "espresso",
            "price_cents": 450
        }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, categories) = app.get("/categories").await;
    assert_eq!(categories.as_array().unwrap().len(), 1);
}

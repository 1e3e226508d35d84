//! API tests driving the axum router directly with `tower::ServiceExt`.
//!
//! These cover the full request path: JSON extraction, handler logic, the
//! pricing engine, the validator, and the error-to-response mapping.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use quickbite_storefront::catalog::MockCatalog;
use quickbite_storefront::config::StorefrontConfig;
use quickbite_storefront::routes;
use quickbite_storefront::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    let config = StorefrontConfig {
        submit_latency: Duration::ZERO,
        ..StorefrontConfig::default()
    };
    let state = AppState::new(config, Arc::new(MockCatalog::new()));
    routes::routes().with_state(state)
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn cod_checkout_form() -> Value {
    json!({
        "fullName": "John Doe",
        "email": "john@example.com",
        "address": "123 Main St, Apt 4B",
        "city": "Anytown",
        "postalCode": "12345",
        "country": "US",
        "paymentMethod": "cod"
    })
}

async fn create_seeded_cart(app: &Router) -> (String, Value) {
    let (status, body) = request(app, "POST", "/api/carts", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let cart_id = body["cartId"].as_str().unwrap().to_owned();
    (cart_id, body)
}

#[tokio::test]
async fn test_list_restaurants() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/api/restaurants", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_filter_restaurants_by_cuisine() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/api/restaurants?cuisine=italian", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Pizza Palace"]);
}

#[tokio::test]
async fn test_restaurant_detail_includes_menu() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/api/restaurants/pizza-palace", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Pizza Palace");
    assert_eq!(body["menu"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_unknown_restaurant_is_404() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/api/restaurants/nowhere", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_seeded_cart_totals() {
    let app = test_app();
    let (_, body) = create_seeded_cart(&app).await;

    assert_eq!(body["lines"].as_array().unwrap().len(), 3);
    assert_eq!(body["totals"]["subtotal"], "35.99");
    assert_eq!(body["totals"]["deliveryFee"], "5.00");
    assert_eq!(body["totals"]["taxes"], "2.88");
    assert_eq!(body["totals"]["total"], "43.87");
}

#[tokio::test]
async fn test_cart_from_menu_items() {
    let app = test_app();
    let (status, body) = request(
        &app,
        "POST",
        "/api/carts",
        Some(json!({
            "items": [
                { "itemId": "piz1", "quantity": 2 },
                { "itemId": "drk1" }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    // 2 x 15.99 + 3.50 = 35.48
    assert_eq!(body["totals"]["subtotal"], "35.48");
}

#[tokio::test]
async fn test_unavailable_menu_item_is_rejected() {
    let app = test_app();
    let (status, _) = request(
        &app,
        "POST",
        "/api/carts",
        Some(json!({ "items": [{ "itemId": "piz3" }] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_change_quantity_to_zero_removes_line() {
    let app = test_app();
    let (cart_id, _) = create_seeded_cart(&app).await;

    let (status, body) = request(
        &app,
        "PATCH",
        &format!("/api/carts/{cart_id}/lines"),
        Some(json!({ "lineId": "burger1", "quantity": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lines"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_line_change_is_silently_ignored() {
    let app = test_app();
    let (cart_id, _) = create_seeded_cart(&app).await;

    let (status, body) = request(
        &app,
        "PATCH",
        &format!("/api/carts/{cart_id}/lines"),
        Some(json!({ "lineId": "ghost", "quantity": 3 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lines"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_remove_line() {
    let app = test_app();
    let (cart_id, _) = create_seeded_cart(&app).await;

    let (status, body) = request(
        &app,
        "DELETE",
        &format!("/api/carts/{cart_id}/lines/soda1"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lines"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_apply_save10_promo() {
    let app = test_app();
    let (cart_id, _) = create_seeded_cart(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/carts/{cart_id}/promo"),
        Some(json!({ "code": "SAVE10" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Promo code SAVE10 applied! You saved 10%.");
    // 10% of 35.99, rounded
    assert_eq!(body["cart"]["totals"]["promoDiscount"], "3.60");
}

#[tokio::test]
async fn test_invalid_promo_resets_discount() {
    let app = test_app();
    let (cart_id, _) = create_seeded_cart(&app).await;

    request(
        &app,
        "POST",
        &format!("/api/carts/{cart_id}/promo"),
        Some(json!({ "code": "FREE5" })),
    )
    .await;

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/carts/{cart_id}/promo"),
        Some(json!({ "code": "BOGUS1" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid promo code.");
    assert_eq!(body["cart"]["totals"]["promoDiscount"], "0");
}

#[tokio::test]
async fn test_checkout_with_cod_succeeds_and_consumes_cart() {
    let app = test_app();
    let (cart_id, _) = create_seeded_cart(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/carts/{cart_id}/checkout"),
        Some(cod_checkout_form()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert!(body["order"]["id"].as_str().unwrap().starts_with("QB"));
    assert_eq!(body["order"]["total"], "43.87");
    assert_eq!(body["order"]["status"], "confirmed");

    // The cart is gone after a successful checkout.
    let (status, _) = request(&app, "GET", &format!("/api/carts/{cart_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checkout_bad_expiry_month_is_rejected() {
    let app = test_app();
    let (cart_id, _) = create_seeded_cart(&app).await;

    let mut form = cod_checkout_form();
    form["paymentMethod"] = json!("creditCard");
    form["cardNumber"] = json!("4111 1111 1111 1111");
    form["cardExpiry"] = json!("13/25");
    form["cardCVC"] = json!("123");

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/carts/{cart_id}/checkout"),
        Some(form),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "cardExpiry"));

    // The cart is untouched and still usable.
    let (status, _) = request(&app, "GET", &format!("/api/carts/{cart_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_checkout_on_emptied_cart_is_rejected() {
    let app = test_app();
    let (cart_id, _) = create_seeded_cart(&app).await;

    for line in ["pizza1", "burger1", "soda1"] {
        request(
            &app,
            "DELETE",
            &format!("/api/carts/{cart_id}/lines/{line}"),
            None,
        )
        .await;
    }

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/carts/{cart_id}/checkout"),
        Some(cod_checkout_form()),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "cart is empty");
}

#[tokio::test]
async fn test_profile() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/api/account/profile", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alex Johnson");
    assert_eq!(body["addresses"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_orders_show_current_and_past() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/api/account/orders", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current"]["id"], "FD12345XYZ");
    assert_eq!(body["past"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_placed_order_appears_in_history() {
    let app = test_app();
    let (cart_id, _) = create_seeded_cart(&app).await;

    let (_, checkout_body) = request(
        &app,
        "POST",
        &format!("/api/carts/{cart_id}/checkout"),
        Some(cod_checkout_form()),
    )
    .await;
    let order_id = checkout_body["order"]["id"].as_str().unwrap().to_owned();

    let (_, body) = request(&app, "GET", "/api/account/orders", None).await;
    // The fresh order is newest and not yet delivered, so it becomes current.
    assert_eq!(body["current"]["id"], order_id);
}

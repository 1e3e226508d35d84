//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                        - Health check
//!
//! # Restaurants
//! GET    /api/restaurants               - Restaurant listing (?cuisine= filter)
//! GET    /api/restaurants/{slug}        - Restaurant detail with menu
//!
//! # Carts
//! POST   /api/carts                     - Create a cart (seeded or explicit items)
//! GET    /api/carts/{id}                - Cart with derived totals
//! PATCH  /api/carts/{id}/lines          - Change a line's quantity
//! DELETE /api/carts/{id}/lines/{line}   - Remove a line
//! POST   /api/carts/{id}/promo          - Apply a promo code
//! POST   /api/carts/{id}/checkout       - Validate and place the order
//!
//! # Account
//! GET    /api/account/profile           - Mock user profile
//! GET    /api/account/orders            - Current and past orders
//! ```

pub mod account;
pub mod cart;
pub mod checkout;
pub mod restaurants;

use axum::Router;
use axum::routing::{get, patch, post};

use crate::state::AppState;

/// Create the restaurant routes router.
pub fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurants::index))
        .route("/{slug}", get(restaurants::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    use axum::routing::delete;

    Router::new()
        .route("/", post(cart::create))
        .route("/{id}", get(cart::show))
        .route("/{id}/lines", patch(cart::update_line))
        .route("/{id}/lines/{line_id}", delete(cart::remove_line))
        .route("/{id}/promo", post(cart::apply_promo))
        .route("/{id}/checkout", post(checkout::submit))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(account::profile))
        .route("/orders", get(account::orders))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/restaurants", restaurant_routes())
        .nest("/api/carts", cart_routes())
        .nest("/api/account", account_routes())
}

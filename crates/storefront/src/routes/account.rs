//! Account route handlers.
//!
//! Profile data is mock data from the catalog; the order list combines the
//! seeded history with orders placed this session.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::instrument;

use crate::models::{PlacedOrder, UserProfile};
use crate::state::AppState;

/// Current and past orders for the account page.
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    /// The newest order still on its way, for the status tracker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<PlacedOrder>,
    /// Delivered orders, newest first.
    pub past: Vec<PlacedOrder>,
}

/// Show the signed-in user's profile.
#[instrument(skip(state))]
pub async fn profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(state.catalog().profile())
}

/// Show current and past orders.
#[instrument(skip(state))]
pub async fn orders(State(state): State<AppState>) -> Json<OrdersResponse> {
    Json(OrdersResponse {
        current: state.orders().current(),
        past: state.orders().delivered(),
    })
}

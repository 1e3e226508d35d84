//! Domain models served by the storefront.
//!
//! These are the read-side shapes the catalog provider hands out and the
//! order service records. Pricing logic lives in [`crate::cart`]; nothing
//! here computes anything.

use chrono::{DateTime, Utc};
use quickbite_core::{Email, MenuItemId, Money, OrderId, OrderStatus, RestaurantId};
use serde::Serialize;

/// A restaurant listed on the home page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    /// URL-friendly handle, e.g. `pizza-palace`.
    pub slug: String,
    pub name: String,
    pub cuisines: Vec<String>,
    /// Average review score out of 5.
    pub rating: f32,
    pub review_count: u32,
    /// Display estimate, e.g. "25-35 min".
    pub delivery_estimate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotional_tag: Option<String>,
}

impl Restaurant {
    /// Whether the restaurant serves the named cuisine (case-insensitive).
    #[must_use]
    pub fn serves(&self, cuisine: &str) -> bool {
        self.cuisines.iter().any(|c| c.eq_ignore_ascii_case(cuisine))
    }
}

/// A named group of menu items, e.g. "Pizzas (Pizze)".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// A single orderable product on a restaurant menu.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
    /// Unavailable items are shown greyed out and cannot be added to a cart.
    pub available: bool,
}

/// The signed-in user's profile, entirely mock data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub addresses: Vec<SavedAddress>,
    pub payment_methods: Vec<SavedCard>,
}

/// A saved delivery address.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAddress {
    pub id: String,
    /// Display label, e.g. "Home" or "Work".
    pub label: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub is_default: bool,
}

/// A saved payment card (display only: brand, last four, expiry).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCard {
    pub id: String,
    pub brand: String,
    pub last4: String,
    pub expiry: String,
}

/// A line on a placed order, frozen at checkout time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

/// An order that has been placed, either seeded history or the result of a
/// successful checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    pub lines: Vec<OrderLine>,
    pub total: Money,
    pub status: OrderStatus,
}

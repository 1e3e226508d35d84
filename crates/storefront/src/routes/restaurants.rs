//! Restaurant browsing route handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::{MenuSection, Restaurant};
use crate::state::AppState;

/// Query parameters for the restaurant listing.
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantFilter {
    /// Case-insensitive cuisine filter, e.g. `?cuisine=italian`.
    pub cuisine: Option<String>,
}

/// Restaurant detail with its published menu.
#[derive(Debug, Serialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub menu: Vec<MenuSection>,
}

/// List restaurants, optionally filtered by cuisine.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<RestaurantFilter>,
) -> Json<Vec<Restaurant>> {
    let mut restaurants = state.catalog().restaurants();
    if let Some(cuisine) = filter.cuisine.as_deref() {
        restaurants.retain(|r| r.serves(cuisine));
    }
    Json(restaurants)
}

/// Show one restaurant with its menu.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<RestaurantDetail>> {
    let restaurant = state
        .catalog()
        .restaurant_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("restaurant {slug}")))?;
    let menu = state.catalog().menu(&restaurant.id);

    Ok(Json(RestaurantDetail { restaurant, menu }))
}

//! Cart route handlers.
//!
//! Every mutation responds with the full cart body (lines plus derived
//! totals) so the client never has to compute prices itself.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use quickbite_core::{CartId, LineId, MenuItemId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::{AppliedPromo, Cart, CartLine, PromoOutcome, Totals};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Returns the default quantity (1) for new cart items.
const fn default_quantity() -> u32 {
    1
}

/// One item requested at cart creation, priced from the catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub item_id: MenuItemId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub customizations: Vec<String>,
}

/// Create cart request body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCartRequest {
    /// Explicit items; when empty the cart is seeded with the sample lines.
    #[serde(default)]
    pub items: Vec<NewCartItem>,
}

/// Change quantity request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLineRequest {
    pub line_id: LineId,
    /// Zero or below removes the line.
    pub quantity: i64,
}

/// Apply promo request body.
#[derive(Debug, Deserialize)]
pub struct ApplyPromoRequest {
    pub code: String,
}

/// Full cart view returned by every cart endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartBody {
    pub cart_id: CartId,
    pub lines: Vec<CartLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo: Option<AppliedPromo>,
    pub totals: Totals,
}

/// Response for promo application.
#[derive(Debug, Serialize)]
pub struct PromoResponse {
    pub success: bool,
    pub message: String,
    pub cart: CartBody,
}

fn cart_body(cart_id: CartId, cart: &Cart) -> CartBody {
    CartBody {
        cart_id,
        lines: cart.lines().to_vec(),
        promo: cart.promo().cloned(),
        totals: cart.totals(),
    }
}

/// Create a cart.
///
/// With an empty body the cart is seeded with the sample lines the cart
/// page starts from; explicit items are priced from the catalog.
#[instrument(skip(state, request))]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateCartRequest>,
) -> Result<(StatusCode, Json<CartBody>)> {
    let cart = if request.items.is_empty() {
        Cart::with_lines(state.catalog().seed_cart_lines())
    } else {
        let mut cart = Cart::new();
        for item in request.items {
            let menu_item = state
                .catalog()
                .menu_item(&item.item_id)
                .ok_or_else(|| AppError::NotFound(format!("menu item {}", item.item_id)))?;
            if !menu_item.available {
                return Err(AppError::BadRequest(format!(
                    "menu item {} is currently unavailable",
                    item.item_id
                )));
            }
            cart.add_line(
                CartLine::new(
                    LineId::new(item.item_id.into_inner()),
                    menu_item.name,
                    menu_item.price,
                    item.quantity,
                )
                .with_customizations(item.customizations),
            );
        }
        cart
    };

    let id = state.carts().insert(cart.clone());
    tracing::info!(cart_id = %id, lines = cart.line_count(), "cart created");
    Ok((StatusCode::CREATED, Json(cart_body(id, &cart))))
}

/// Display a cart with its derived totals.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
) -> Result<Json<CartBody>> {
    let cart = state
        .carts()
        .snapshot(cart_id)
        .ok_or(AppError::CartNotFound(cart_id))?;
    Ok(Json(cart_body(cart_id, &cart)))
}

/// Change a line's quantity; zero or below removes the line.
///
/// A quantity change for a line that is not in the cart is ignored rather
/// than rejected.
#[instrument(skip(state, request))]
pub async fn update_line(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
    Json(request): Json<UpdateLineRequest>,
) -> Result<Json<CartBody>> {
    let (affected, cart) = state
        .carts()
        .with_cart(cart_id, |cart| {
            let affected = cart.change_quantity(&request.line_id, request.quantity);
            (affected, cart.clone())
        })
        .ok_or(AppError::CartNotFound(cart_id))?;

    if !affected {
        tracing::debug!(line_id = %request.line_id, "quantity change for unknown line ignored");
    }

    Ok(Json(cart_body(cart_id, &cart)))
}

/// Remove a line unconditionally.
#[instrument(skip(state))]
pub async fn remove_line(
    State(state): State<AppState>,
    Path((cart_id, line_id)): Path<(CartId, LineId)>,
) -> Result<Json<CartBody>> {
    let (removed, cart) = state
        .carts()
        .with_cart(cart_id, |cart| {
            let removed = cart.remove_line(&line_id);
            (removed, cart.clone())
        })
        .ok_or(AppError::CartNotFound(cart_id))?;

    if !removed {
        tracing::debug!(line_id = %line_id, "removal of unknown line ignored");
    }

    Ok(Json(cart_body(cart_id, &cart)))
}

/// Apply a promo code.
///
/// An unrecognized code is not an HTTP error; it resets the discount and
/// reports `success: false` with an informational message.
#[instrument(skip(state, request))]
pub async fn apply_promo(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
    Json(request): Json<ApplyPromoRequest>,
) -> Result<Json<PromoResponse>> {
    let (outcome, cart) = state
        .carts()
        .with_cart(cart_id, |cart| {
            (cart.apply_promo(&request.code), cart.clone())
        })
        .ok_or(AppError::CartNotFound(cart_id))?;

    let (success, message) = match &outcome {
        PromoOutcome::Applied(promo) => (
            true,
            if promo.code == "SAVE10" {
                format!("Promo code {} applied! You saved 10%.", promo.code)
            } else {
                format!(
                    "Promo code {} applied! You saved {}.",
                    promo.code, promo.discount
                )
            },
        ),
        PromoOutcome::Invalid => (false, "Invalid promo code.".to_owned()),
    };

    Ok(Json(PromoResponse {
        success,
        message,
        cart: cart_body(cart_id, &cart),
    }))
}

//! Checkout route handler.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use quickbite_core::CartId;
use serde::Serialize;
use tracing::instrument;

use crate::checkout::CheckoutForm;
use crate::error::{AppError, Result};
use crate::models::PlacedOrder;
use crate::state::AppState;

/// Response for a successful checkout.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub order: PlacedOrder,
}

/// Validate the submission and place the order.
///
/// POST /api/carts/{id}/checkout
///
/// Validation failures come back as 422 with per-field errors and leave
/// the cart untouched. While a submission is in flight, further submits
/// for the same cart are rejected with 409. On success the cart is
/// consumed and the placed order returned.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
    Json(form): Json<CheckoutForm>,
) -> Result<(StatusCode, Json<CheckoutResponse>)> {
    let cart = state
        .carts()
        .snapshot(cart_id)
        .ok_or(AppError::CartNotFound(cart_id))?;
    if cart.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let validated = form.validate().map_err(AppError::Validation)?;

    let _guard = state
        .carts()
        .try_begin_submission(cart_id)
        .ok_or(AppError::SubmissionInFlight)?;

    let totals = cart.totals();
    let order = state
        .orders()
        .place(&validated, cart.lines(), &totals)
        .await;

    // The cart is consumed by a successful checkout.
    state.carts().remove(cart_id);

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            success: true,
            order,
        }),
    ))
}

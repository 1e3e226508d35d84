//! Order placement and history.
//!
//! There is no payment processor or kitchen behind this service; placing an
//! order is a single awaited operation with configurable simulated latency.
//! Resubmission while an order is pending is prevented by the cart store's
//! submission guard, not here.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use chrono::Utc;
use quickbite_core::{OrderId, OrderStatus};
use uuid::Uuid;

use crate::cart::{CartLine, Totals};
use crate::checkout::ValidatedOrder;
use crate::models::{OrderLine, PlacedOrder};

/// Places orders and keeps the in-memory order history.
#[derive(Debug)]
pub struct OrderService {
    latency: Duration,
    history: RwLock<Vec<PlacedOrder>>,
}

impl OrderService {
    /// Create the service with simulated processing latency and a seeded
    /// history (newest first).
    #[must_use]
    pub fn new(latency: Duration, seeded: Vec<PlacedOrder>) -> Self {
        Self {
            latency,
            history: RwLock::new(seeded),
        }
    }

    /// Place a validated order for the given cart snapshot.
    ///
    /// Awaits the simulated processing latency, then records the order with
    /// status [`OrderStatus::Confirmed`] at the head of the history.
    pub async fn place(
        &self,
        order: &ValidatedOrder,
        lines: &[CartLine],
        totals: &Totals,
    ) -> PlacedOrder {
        tokio::time::sleep(self.latency).await;

        let placed = PlacedOrder {
            id: generate_order_id(),
            placed_at: Utc::now(),
            restaurant_name: None,
            lines: lines
                .iter()
                .map(|line| OrderLine {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
                .collect(),
            total: totals.total,
            status: OrderStatus::Confirmed,
        };

        tracing::info!(
            order_id = %placed.id,
            email = %order.contact.email,
            method = %order.payment.method(),
            total = %placed.total,
            "order placed"
        );

        self.history_mut().insert(0, placed.clone());
        placed
    }

    /// All orders, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<PlacedOrder> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent order still on its way, if any.
    #[must_use]
    pub fn current(&self) -> Option<PlacedOrder> {
        self.history()
            .into_iter()
            .find(|order| !order.status.is_delivered())
    }

    /// All delivered orders, newest first.
    #[must_use]
    pub fn delivered(&self) -> Vec<PlacedOrder> {
        self.history()
            .into_iter()
            .filter(|order| order.status.is_delivered())
            .collect()
    }

    fn history_mut(&self) -> std::sync::RwLockWriteGuard<'_, Vec<PlacedOrder>> {
        self.history.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Order IDs look like `QB3F9A2C1D`: a `QB` prefix plus 8 hex chars.
fn generate_order_id() -> OrderId {
    let hex = Uuid::new_v4().simple().to_string();
    let short = hex.get(..8).unwrap_or("00000000").to_uppercase();
    OrderId::new(format!("QB{short}"))
}

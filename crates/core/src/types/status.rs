//! Order status enumeration.

use serde::{Deserialize, Serialize};

/// Delivery progress of a placed order.
///
/// Orders move strictly forward through these states; the storefront's
/// tracker renders them as a four-step progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Zero-based position in the tracker (0 = confirmed, 3 = delivered).
    #[must_use]
    pub const fn step(self) -> u8 {
        match self {
            Self::Confirmed => 0,
            Self::Preparing => 1,
            Self::OutForDelivery => 2,
            Self::Delivered => 3,
        }
    }

    /// Whether the order has reached its terminal state.
    #[must_use]
    pub const fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Confirmed => write!(f, "Confirmed"),
            Self::Preparing => write!(f, "Preparing"),
            Self::OutForDelivery => write!(f, "Out for Delivery"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}

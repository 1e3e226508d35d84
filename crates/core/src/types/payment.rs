//! Payment method enumeration.

use serde::{Deserialize, Serialize};

/// How the customer pays for an order.
///
/// This is a closed set: a submission carrying any other value fails to
/// deserialize before validation runs. Wire names match the checkout form
/// (`creditCard`, `paypal`, `cod`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Credit or debit card; requires card number, expiry, and CVC.
    #[serde(rename = "creditCard")]
    CreditCard,
    /// PayPal; no extra fields collected.
    #[serde(rename = "paypal")]
    Paypal,
    /// Cash on delivery; no extra fields collected.
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Whether this method requires the card detail fields.
    #[must_use]
    pub const fn requires_card_details(self) -> bool {
        matches!(self, Self::CreditCard)
    }

    /// The wire name used by the checkout form.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::CreditCard => "creditCard",
            Self::Paypal => "paypal",
            Self::CashOnDelivery => "cod",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creditCard" => Ok(Self::CreditCard),
            "paypal" => Ok(Self::Paypal),
            "cod" => Ok(Self::CashOnDelivery),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

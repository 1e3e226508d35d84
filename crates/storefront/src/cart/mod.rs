//! Cart pricing engine.
//!
//! A [`Cart`] holds the line items for one page session together with any
//! applied promo code. Totals are never stored: [`Cart::totals`] derives
//! subtotal, promo discount, delivery fee, taxes, and grand total from
//! current state on every call, so no cached value can go stale.

pub mod store;

use quickbite_core::{LineId, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Smallest quantity a retained line may hold.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity a single line may hold.
pub const MAX_QUANTITY: u32 = 99;

/// Flat delivery fee in cents, charged only on non-empty carts.
const DELIVERY_FEE_CENTS: i64 = 500;

/// Estimated tax rate in basis points (8%), applied to the subtotal.
const TAX_RATE_BPS: i64 = 800;

/// One product entry in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Opaque identifier, unique within the cart.
    pub id: LineId,
    /// Display name; not used in pricing.
    pub name: String,
    /// Non-negative price for a single unit.
    pub unit_price: Money,
    /// Always within `[MIN_QUANTITY, MAX_QUANTITY]` while the line exists.
    pub quantity: u32,
    /// Display-only notes, e.g. "Thin Crust".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customizations: Vec<String>,
}

impl CartLine {
    /// Create a line with the quantity clamped into the allowed range.
    #[must_use]
    pub fn new(id: LineId, name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity: quantity.clamp(MIN_QUANTITY, MAX_QUANTITY),
            customizations: Vec::new(),
        }
    }

    /// Attach display-only customizations.
    #[must_use]
    pub fn with_customizations(mut self, customizations: Vec<String>) -> Self {
        self.customizations = customizations;
        self
    }

    /// Price for this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// A promo code that has been successfully applied to a cart.
///
/// The discount is a snapshot taken at application time. Percentage codes
/// are not re-derived when the cart changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedPromo {
    /// Normalized (trimmed, uppercased) code.
    pub code: String,
    /// Absolute discount amount.
    pub discount: Money,
}

/// Result of [`Cart::apply_promo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoOutcome {
    /// The code matched and the discount is now active.
    Applied(AppliedPromo),
    /// The code is not recognized; any previous discount has been reset.
    Invalid,
}

/// Derived cart totals.
///
/// `total = subtotal - promo_discount + delivery_fee + taxes`, with every
/// component rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: Money,
    pub promo_discount: Money,
    pub delivery_fee: Money,
    pub taxes: Money,
    pub total: Money,
}

/// The cart for one page session.
///
/// Lines keep insertion order, which matters for display only. Every line
/// holds `quantity >= 1`; a mutation driving a quantity to zero or below
/// removes the line instead of retaining it.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    promo: Option<AppliedPromo>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            promo: None,
        }
    }

    /// Create a cart pre-populated with the given lines.
    #[must_use]
    pub const fn with_lines(lines: Vec<CartLine>) -> Self {
        Self { lines, promo: None }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The currently applied promo, if any.
    #[must_use]
    pub const fn promo(&self) -> Option<&AppliedPromo> {
        self.promo.as_ref()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines (not units).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Add a line; if a line with the same id exists, its quantity is bumped
    /// (clamped to the allowed range) instead of adding a duplicate.
    pub fn add_line(&mut self, line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == line.id) {
            existing.quantity =
                (existing.quantity.saturating_add(line.quantity)).clamp(MIN_QUANTITY, MAX_QUANTITY);
        } else {
            self.lines.push(line);
        }
    }

    /// Set the quantity of the identified line.
    ///
    /// A target of zero or below removes the line; anything else is clamped
    /// to `[MIN_QUANTITY, MAX_QUANTITY]`. Unknown ids are a no-op. Returns
    /// whether a line was affected.
    pub fn change_quantity(&mut self, id: &LineId, quantity: i64) -> bool {
        let Some(line) = self.lines.iter_mut().find(|l| &l.id == id) else {
            return false;
        };

        if quantity < i64::from(MIN_QUANTITY) {
            self.lines.retain(|l| &l.id != id);
            self.clear_promo_if_empty();
        } else {
            line.quantity = clamp_quantity(quantity);
        }
        true
    }

    /// Remove the identified line unconditionally. Unknown ids are a no-op.
    /// Returns whether a line was removed.
    pub fn remove_line(&mut self, id: &LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        let removed = self.lines.len() != before;
        if removed {
            self.clear_promo_if_empty();
        }
        removed
    }

    /// Evaluate a promo code against the fixed code table.
    ///
    /// The code is trimmed and uppercased before lookup. `SAVE10` grants 10%
    /// of the subtotal at application time; `FREE5` grants a flat $5.00.
    /// Anything else resets the discount to zero and reports
    /// [`PromoOutcome::Invalid`].
    pub fn apply_promo(&mut self, code: &str) -> PromoOutcome {
        let code = code.trim().to_uppercase();
        let discount = match code.as_str() {
            "SAVE10" => (self.raw_subtotal() * Decimal::new(10, 2)).round2(),
            "FREE5" => Money::from_cents(500),
            _ => {
                self.promo = None;
                return PromoOutcome::Invalid;
            }
        };

        let promo = AppliedPromo { code, discount };
        self.promo = Some(promo.clone());
        PromoOutcome::Applied(promo)
    }

    /// Drop any applied promo, e.g. when the user edits the code field.
    pub fn clear_promo(&mut self) {
        self.promo = None;
    }

    /// Derive all totals from current state. Pure and idempotent.
    #[must_use]
    pub fn totals(&self) -> Totals {
        let subtotal = self.raw_subtotal().round2();
        let promo_discount = self.promo.as_ref().map_or(Money::ZERO, |p| p.discount);

        let (delivery_fee, taxes) = if self.lines.is_empty() {
            (Money::ZERO, Money::ZERO)
        } else {
            (
                Money::from_cents(DELIVERY_FEE_CENTS),
                (subtotal * Decimal::new(TAX_RATE_BPS, 4)).round2(),
            )
        };

        let total = (subtotal - promo_discount + delivery_fee + taxes).round2();

        Totals {
            subtotal,
            promo_discount,
            delivery_fee,
            taxes,
            total,
        }
    }

    fn raw_subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// An empty cart must not keep a discount alive; a stale promo combined
    /// with zero subtotal would drive the total negative.
    fn clear_promo_if_empty(&mut self) {
        if self.lines.is_empty() {
            self.promo = None;
        }
    }
}

fn clamp_quantity(quantity: i64) -> u32 {
    let clamped = quantity.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY));
    u32::try_from(clamped).unwrap_or(MAX_QUANTITY)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fixture_cart() -> Cart {
        Cart::with_lines(vec![
            CartLine::new(
                LineId::new("pizza1"),
                "Margherita Pizza",
                Money::from_cents(1299),
                1,
            )
            .with_customizations(vec!["Large".to_owned(), "Thin Crust".to_owned()]),
            CartLine::new(
                LineId::new("burger1"),
                "Classic Cheeseburger",
                Money::from_cents(850),
                2,
            )
            .with_customizations(vec!["Extra Pickles".to_owned()]),
            CartLine::new(LineId::new("soda1"), "Cola Can", Money::from_cents(150), 4),
        ])
    }

    #[test]
    fn test_fixture_totals() {
        // 12.99 + 17.00 + 6.00 = 35.99
        let totals = fixture_cart().totals();
        assert_eq!(totals.subtotal, Money::from_cents(3599));
        assert_eq!(totals.promo_discount, Money::ZERO);
        assert_eq!(totals.delivery_fee, Money::from_cents(500));
        assert_eq!(totals.taxes, Money::from_cents(288));
        assert_eq!(totals.total, Money::from_cents(4387));
    }

    #[test]
    fn test_total_identity_holds() {
        let mut cart = fixture_cart();
        cart.apply_promo("FREE5");
        let totals = cart.totals();
        assert_eq!(
            totals.total,
            totals.subtotal - totals.promo_discount + totals.delivery_fee + totals.taxes
        );
    }

    #[test]
    fn test_empty_cart_has_no_fee_or_taxes() {
        let totals = Cart::new().totals();
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.delivery_fee, Money::ZERO);
        assert_eq!(totals.taxes, Money::ZERO);
        assert_eq!(totals.total, Money::ZERO);
    }

    #[test]
    fn test_totals_are_idempotent() {
        let cart = fixture_cart();
        assert_eq!(cart.totals(), cart.totals());
    }

    #[test]
    fn test_change_quantity_updates_line() {
        let mut cart = fixture_cart();
        assert!(cart.change_quantity(&LineId::new("soda1"), 2));
        let soda = cart.lines().iter().find(|l| l.id.as_str() == "soda1").unwrap();
        assert_eq!(soda.quantity, 2);
        assert_eq!(cart.totals().subtotal, Money::from_cents(3299));
    }

    #[test]
    fn test_change_quantity_to_zero_removes_line() {
        let mut cart = fixture_cart();
        let before = cart.line_count();
        assert!(cart.change_quantity(&LineId::new("burger1"), 0));
        assert_eq!(cart.line_count(), before - 1);
        assert!(!cart.lines().iter().any(|l| l.id.as_str() == "burger1"));
    }

    #[test]
    fn test_change_quantity_negative_removes_line() {
        let mut cart = fixture_cart();
        assert!(cart.change_quantity(&LineId::new("pizza1"), -3));
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_change_quantity_clamps_to_max() {
        let mut cart = fixture_cart();
        assert!(cart.change_quantity(&LineId::new("soda1"), 500));
        let soda = cart.lines().iter().find(|l| l.id.as_str() == "soda1").unwrap();
        assert_eq!(soda.quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_change_quantity_unknown_line_is_noop() {
        let mut cart = fixture_cart();
        assert!(!cart.change_quantity(&LineId::new("ghost"), 3));
        assert_eq!(cart.line_count(), 3);
        assert_eq!(cart.totals().subtotal, Money::from_cents(3599));
    }

    #[test]
    fn test_remove_line() {
        let mut cart = fixture_cart();
        assert!(cart.remove_line(&LineId::new("pizza1")));
        assert!(!cart.remove_line(&LineId::new("pizza1")));
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_add_line_merges_same_id() {
        let mut cart = fixture_cart();
        cart.add_line(CartLine::new(
            LineId::new("soda1"),
            "Cola Can",
            Money::from_cents(150),
            2,
        ));
        assert_eq!(cart.line_count(), 3);
        let soda = cart.lines().iter().find(|l| l.id.as_str() == "soda1").unwrap();
        assert_eq!(soda.quantity, 6);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let cart = fixture_cart();
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["pizza1", "burger1", "soda1"]);
    }

    #[test]
    fn test_save10_is_percentage_of_subtotal() {
        let mut cart = Cart::with_lines(vec![CartLine::new(
            LineId::new("feast"),
            "Family Feast",
            Money::from_cents(10000),
            1,
        )]);
        let outcome = cart.apply_promo("SAVE10");
        let PromoOutcome::Applied(promo) = outcome else {
            panic!("expected SAVE10 to apply");
        };
        assert_eq!(promo.discount, Money::from_cents(1000));
    }

    #[test]
    fn test_free5_is_flat_regardless_of_subtotal() {
        let mut small = Cart::with_lines(vec![CartLine::new(
            LineId::new("soda1"),
            "Cola Can",
            Money::from_cents(150),
            1,
        )]);
        let mut large = fixture_cart();

        for cart in [&mut small, &mut large] {
            let PromoOutcome::Applied(promo) = cart.apply_promo("FREE5") else {
                panic!("expected FREE5 to apply");
            };
            assert_eq!(promo.discount, Money::from_cents(500));
        }
    }

    #[test]
    fn test_promo_codes_are_normalized() {
        let mut cart = fixture_cart();
        assert!(matches!(
            cart.apply_promo("  save10 "),
            PromoOutcome::Applied(_)
        ));
        assert_eq!(cart.promo().unwrap().code, "SAVE10");
    }

    #[test]
    fn test_unknown_code_resets_discount() {
        let mut cart = fixture_cart();
        cart.apply_promo("FREE5");
        assert_eq!(cart.apply_promo("NOPE99"), PromoOutcome::Invalid);
        assert!(cart.promo().is_none());
        assert_eq!(cart.totals().promo_discount, Money::ZERO);
    }

    #[test]
    fn test_save10_discount_is_frozen_at_application_time() {
        let mut cart = fixture_cart();
        cart.apply_promo("SAVE10");
        let frozen = cart.promo().unwrap().discount;

        // Growing the cart afterwards must not change the snapshot.
        cart.change_quantity(&LineId::new("soda1"), 10);
        assert_eq!(cart.totals().promo_discount, frozen);
    }

    #[test]
    fn test_emptying_cart_clears_promo() {
        let mut cart = Cart::with_lines(vec![CartLine::new(
            LineId::new("soda1"),
            "Cola Can",
            Money::from_cents(150),
            1,
        )]);
        cart.apply_promo("FREE5");
        cart.change_quantity(&LineId::new("soda1"), 0);

        assert!(cart.promo().is_none());
        let totals = cart.totals();
        assert_eq!(totals.total, Money::ZERO);
        assert!(!totals.total.is_negative());
    }

    #[test]
    fn test_emptying_cart_via_remove_clears_promo() {
        let mut cart = Cart::with_lines(vec![CartLine::new(
            LineId::new("soda1"),
            "Cola Can",
            Money::from_cents(150),
            1,
        )]);
        cart.apply_promo("FREE5");
        cart.remove_line(&LineId::new("soda1"));
        assert!(cart.promo().is_none());
    }

    #[test]
    fn test_clear_promo() {
        let mut cart = fixture_cart();
        cart.apply_promo("FREE5");
        cart.clear_promo();
        assert!(cart.promo().is_none());
    }

    #[test]
    fn test_line_quantity_clamped_at_construction() {
        let line = CartLine::new(LineId::new("x"), "X", Money::from_cents(100), 0);
        assert_eq!(line.quantity, MIN_QUANTITY);
        let line = CartLine::new(LineId::new("x"), "X", Money::from_cents(100), 200);
        assert_eq!(line.quantity, MAX_QUANTITY);
    }
}

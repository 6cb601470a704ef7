//! # Cart Module
//!
//! The in-progress transaction: an ordered list of product/quantity lines.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Invariants                                  │
//! │                                                                         │
//! │  1. At most ONE line per product id                                     │
//! │     add() on a present product merges into the existing line            │
//! │                                                                         │
//! │  2. Every line quantity is strictly positive                            │
//! │     add() rejects qty <= 0; update_quantity() with qty <= 0 is an       │
//! │     implicit remove, routed through the single remove() code path       │
//! │                                                                         │
//! │  3. remove()/update_quantity() on an absent product id is a no-op,      │
//! │     never an error                                                      │
//! │                                                                         │
//! │  4. No operation here touches the ledger or storage; the cart owns      │
//! │     nothing but its own lines                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, Quantity};
use crate::types::Product;
use crate::validation::{validate_line_quantity, validate_quantity};
use crate::MAX_CART_LINES;

// =============================================================================
// Cart Line
// =============================================================================

/// One cart line: a full product snapshot paired with a quantity.
///
/// The product is embedded by value, not referenced by id. The same shape
/// is frozen into a [`Sale`](crate::Sale) at finalization, so a later
/// catalog price change never rewrites a line already rung up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    pub quantity: Quantity,
}

impl CartLine {
    /// The exact line value in hundredths of a franc, before rounding.
    #[inline]
    pub fn subtotal_hundredths(&self) -> i128 {
        self.product.price.francs() as i128 * self.quantity.hundredths() as i128
    }

    /// The line total rounded to whole francs, for receipt display.
    ///
    /// Note: the cart/sale total rounds once over the SUM of the exact line
    /// values, so summing these per-line figures can differ from the ticket
    /// total by a franc. The ticket total is authoritative.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::round_hundredths(self.subtotal_hundredths())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress transaction on this terminal.
///
/// Created empty at application start; never persisted across a reload.
/// Emptied atomically when a sale is finalized from it, or by [`Cart::clear`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart, merging with an existing line.
    ///
    /// ## Behavior
    /// - product already in cart: increments that line's quantity
    /// - otherwise: appends a new line
    ///
    /// ## Errors
    /// - non-positive quantity (the quantity modal rejects this upstream,
    ///   but the invariant is enforced here so the ledger can never record
    ///   a non-positive line)
    /// - merged quantity above [`MAX_LINE_QUANTITY`](crate::MAX_LINE_QUANTITY)
    /// - more than [`MAX_CART_LINES`](crate::MAX_CART_LINES) distinct lines
    pub fn add(&mut self, product: &Product, quantity: Quantity) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            let merged = line.quantity + quantity;
            validate_line_quantity(merged)?;
            line.quantity = merged;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }
        validate_line_quantity(quantity)?;

        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        Ok(())
    }

    /// Sets the quantity of a line directly.
    ///
    /// ## Behavior
    /// - quantity <= 0: the line is removed. "Reduce to zero" is an implicit
    ///   remove, routed through [`Cart::remove`] so the policy lives in
    ///   exactly one place
    /// - product not in cart: no-op, not an error
    pub fn update_quantity(&mut self, product_id: u32, quantity: Quantity) -> CoreResult<()> {
        if !quantity.is_positive() {
            self.remove(product_id);
            return Ok(());
        }

        validate_line_quantity(quantity)?;
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
        Ok(())
    }

    /// Removes the line for the given product id. No-op if absent.
    pub fn remove(&mut self, product_id: u32) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines currently in the cart, in insertion order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The cart total: `Σ price × quantity`, rounded ONCE over the sum.
    ///
    /// This is the amount quoted on the payment screen, and
    /// [`Sale::finalize`](crate::Sale::finalize) re-derives the charged
    /// total with this same function, so quote and charge cannot drift.
    pub fn total(&self) -> Money {
        let exact: i128 = self.lines.iter().map(|l| l.subtotal_hundredths()).sum();
        Money::round_hundredths(exact)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::{Category, Unit};
    use proptest::prelude::*;

    fn test_product(id: u32, price: i64) -> Product {
        Product {
            id,
            name: format!("Produit {}", id),
            price: Money::from_francs(price),
            unit: Unit::Kg,
            category: Category::Autres,
            image: None,
        }
    }

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::new();
        let beef = test_product(1, 1500);

        cart.add(&beef, Quantity::from_units(2)).unwrap();
        cart.add(&beef, Quantity::from_hundredths(150)).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, Quantity::from_hundredths(350));
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let beef = test_product(1, 1500);

        assert!(cart.add(&beef, Quantity::from_units(0)).is_err());
        assert!(cart.add(&beef, Quantity::from_hundredths(-50)).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_directly() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 1500), Quantity::from_units(2)).unwrap();

        cart.update_quantity(1, Quantity::from_hundredths(75)).unwrap();
        assert_eq!(cart.lines()[0].quantity, Quantity::from_hundredths(75));
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 1500), Quantity::from_units(2)).unwrap();

        cart.update_quantity(1, Quantity::from_units(0)).unwrap();
        assert!(cart.is_empty());

        cart.add(&test_product(1, 1500), Quantity::from_units(1)).unwrap();
        cart.update_quantity(1, Quantity::from_hundredths(-10)).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_and_remove_absent_are_no_ops() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 1500), Quantity::from_units(2)).unwrap();
        let before = cart.clone();

        cart.update_quantity(99, Quantity::from_units(3)).unwrap();
        cart.remove(99);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 1500), Quantity::from_units(2)).unwrap();
        cart.add(&test_product(2, 800), Quantity::from_units(1)).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_total_rounds_once_over_the_sum() {
        let mut cart = Cart::new();
        // 333 F/kg × 0.50 kg = 166.5 F exactly, twice
        cart.add(&test_product(1, 333), Quantity::from_hundredths(50)).unwrap();
        cart.add(&test_product(2, 333), Quantity::from_hundredths(50)).unwrap();

        // per-line rounding would give 167 + 167 = 334; the sum 333.0 rounds to 333
        assert_eq!(cart.total().francs(), 333);
        assert_eq!(cart.lines()[0].line_total().francs(), 167);
    }

    #[test]
    fn test_total_half_franc_rounds_up() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 333), Quantity::from_hundredths(50)).unwrap();
        assert_eq!(cart.total().francs(), 167);
    }

    #[test]
    fn test_cart_too_large() {
        let mut cart = Cart::new();
        for id in 0..MAX_CART_LINES as u32 {
            cart.add(&test_product(id, 100), Quantity::from_units(1)).unwrap();
        }
        let err = cart
            .add(&test_product(9999, 100), Quantity::from_units(1))
            .unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { .. }));
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for any sequence of add/update/remove/clear calls, the
        /// cart never holds two lines with the same product id and never
        /// holds a line with quantity <= 0.
        #[test]
        fn cart_invariants_hold_under_any_op_sequence(
            ops in prop::collection::vec((0u8..4u8, 1u32..6u32, -300i64..500i64), 0..50)
        ) {
            let mut cart = Cart::new();
            for (op, id, qty) in ops {
                let product = test_product(id, id as i64 * 400 + 100);
                match op {
                    0 => { let _ = cart.add(&product, Quantity::from_hundredths(qty)); }
                    1 => { let _ = cart.update_quantity(id, Quantity::from_hundredths(qty)); }
                    2 => cart.remove(id),
                    _ => cart.clear(),
                }
            }

            let mut seen = std::collections::HashSet::new();
            for line in cart.lines() {
                prop_assert!(seen.insert(line.product.id), "duplicate product id in cart");
                prop_assert!(line.quantity.is_positive(), "non-positive quantity in cart");
            }
        }

        /// Property: the quoted cart total always equals the total charged by
        /// an immediately following finalization.
        #[test]
        fn quote_equals_charge(
            lines in prop::collection::vec((1u32..20u32, 1i64..2000i64), 1..8)
        ) {
            let mut cart = Cart::new();
            for (id, qty) in lines {
                let product = test_product(id, id as i64 * 333);
                let _ = cart.add(&product, Quantity::from_hundredths(qty));
            }
            prop_assume!(!cart.is_empty());

            let quoted = cart.total();
            let sale = crate::Sale::finalize(
                &cart,
                Money::from_francs(i64::MAX / 4),
                1,
                "Test",
            ).unwrap();

            prop_assert_eq!(sale.total, quoted);
            prop_assert_eq!(sale.amount_received, sale.total + sale.change);
            prop_assert!(sale.change >= Money::zero());
        }
    }
}

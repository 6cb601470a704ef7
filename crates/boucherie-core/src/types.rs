//! # Domain Types
//!
//! Core domain types used throughout Boucherie POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Employee     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (UUID)      │   │  id (u32)       │       │
//! │  │  name           │   │  items (frozen) │   │  name           │       │
//! │  │  price (Money)  │   │  total/change   │   │  pin (shared    │       │
//! │  │  unit, category │   │  date/timestamp │   │   secret)       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Products are catalog-defined and never mutated at runtime.             │
//! │  A Sale freezes full product snapshots at finalization time.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartLine};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Unit of Measure
// =============================================================================

/// How a product is measured and priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Unit {
    /// Sold by weight; quantities carry up to two decimals.
    #[serde(rename = "kg")]
    Kg,
    /// Sold by the piece; quantities are whole numbers.
    #[serde(rename = "pièce")]
    Piece,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Kg => write!(f, "kg"),
            Unit::Piece => write!(f, "pièce"),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category, a fixed enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "Bœuf")]
    Boeuf,
    Poulet,
    Autres,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Category::Boeuf, Category::Poulet, Category::Autres];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Boeuf => write!(f, "Bœuf"),
            Category::Poulet => write!(f, "Poulet"),
            Category::Autres => write!(f, "Autres"),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale. Catalog-defined, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog identifier.
    pub id: u32,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Price per unit in francs.
    pub price: Money,

    /// Unit of measure (per kg or per piece).
    pub unit: Unit,

    /// Product category.
    pub category: Category,

    /// Image path for the product grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// =============================================================================
// Employee
// =============================================================================

/// A shop employee who can operate the terminal.
///
/// The PIN is a plain shared secret compared for equality. It gates the
/// UI flow, nothing more; this is not a security boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub pin: String,
}

impl Employee {
    /// Checks the given PIN against this employee's.
    #[inline]
    pub fn verify_pin(&self, pin: &str) -> bool {
        self.pin == pin
    }
}

// =============================================================================
// Sale
// =============================================================================

/// An immutable record of one completed transaction.
///
/// ## Snapshot Pattern
/// `items` is a frozen copy of the cart lines at finalization time, each
/// embedding the full product as it was then. Later cart mutation or a
/// catalog price change is unobservable through a recorded sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Opaque unique identifier (UUID v4), never reused.
    pub id: String,

    /// Frozen cart lines at finalization time.
    pub items: Vec<CartLine>,

    /// Sum of the lines, rounded once. Trusted as-is by reporting.
    pub total: Money,

    /// Cash handed over by the customer, always >= `total`.
    pub amount_received: Money,

    /// `amount_received - total`, always >= 0.
    pub change: Money,

    /// Operator identity captured by value at finalization time.
    pub employee_id: u32,
    pub employee_name: String,

    /// Local wall-clock instant of the sale (RFC 3339 on the wire).
    #[ts(as = "String")]
    pub date: DateTime<Local>,

    /// Epoch milliseconds, redundant with `date`, kept for fast sorting.
    pub timestamp: i64,
}

impl Sale {
    /// Finalizes the cart into an immutable sale record.
    ///
    /// The total is re-derived from the cart at the moment of the call with
    /// the same rounding rule as [`Cart::total`], so a quote shown before
    /// payment always equals the amount charged.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyCart`]: a shop does not record empty tickets
    /// - [`CoreError::InsufficientPayment`]: `amount_received` below total;
    ///   `change` is a documented non-negative attribute, so this is rejected
    ///   here rather than producing a negative value
    ///
    /// This function only builds the record; appending it to the ledger and
    /// clearing the cart is the terminal's job and happens as one atomic
    /// step around this call.
    pub fn finalize(
        cart: &Cart,
        amount_received: Money,
        employee_id: u32,
        employee_name: impl Into<String>,
    ) -> CoreResult<Sale> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let total = cart.total();
        if amount_received < total {
            return Err(CoreError::InsufficientPayment {
                total,
                received: amount_received,
            });
        }

        let now = Local::now();
        Ok(Sale {
            id: Uuid::new_v4().to_string(),
            items: cart.lines().to_vec(),
            total,
            amount_received,
            change: amount_received - total,
            employee_id,
            employee_name: employee_name.into(),
            date: now,
            timestamp: now.timestamp_millis(),
        })
    }

    /// The local calendar day of this sale, as an ISO `YYYY-MM-DD` key.
    ///
    /// All same-day queries match on this key, so day boundaries follow the
    /// terminal's local time zone.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// The local hour-of-day (0-23) of this sale, for hourly reporting.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.date.hour()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # boucherie-core: Pure Business Logic for Boucherie POS
//!
//! This crate is the **heart** of Boucherie POS. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Boucherie POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (touch screen)                      │   │
//! │  │   Login UI ──► Product Grid ──► Cart UI ──► Payment ──► Ticket  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ IPC                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    boucherie-store                              │   │
//! │  │    Terminal, Session, Ledger, JSON persistence                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ boucherie-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  report   │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ rankings  │  │   │
//! │  │   │   Sale    │  │ Quantity  │  │ CartLine  │  │  buckets  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Employee, Sale) and the finalizer
//! - [`money`] - Money and Quantity with integer arithmetic (no floats!)
//! - [`cart`] - The in-progress transaction state machine
//! - [`catalog`] - The read-only product catalog
//! - [`staff`] - The fixed employee directory
//! - [`report`] - Dashboard aggregations over recorded sales
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: CFA francs have no minor unit; every amount is i64
//! 2. **One Rounding Rule**: [`Money::round_hundredths`] is the only code
//!    path that rounds, used at the two documented points (line display,
//!    cart/sale total) and in report revenue
//! 3. **Frozen Snapshots**: a Sale embeds full product copies; history
//!    never changes when the catalog does
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use boucherie_core::{Cart, Catalog, Money, Quantity, Sale};
//!
//! let catalog = Catalog::butcher_shop();
//! let beef = catalog.get(1).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(beef, Quantity::try_from_f64(2.0).unwrap()).unwrap();
//! assert_eq!(cart.total(), Money::from_francs(3000));
//!
//! let sale = Sale::finalize(&cart, Money::from_francs(3500), 1, "Aïcha").unwrap();
//! assert_eq!(sale.change, Money::from_francs(500));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod report;
pub mod staff;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use boucherie_core::Cart` instead of
// `use boucherie_core::cart::Cart`

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Quantity};
pub use staff::EmployeeDirectory;
pub use types::{Category, Employee, Product, Sale, Unit};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts; a butcher's counter ticket never approaches
/// this.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line (999 units).
///
/// ## Business Reason
/// Catches fat-finger input (typing 1000 instead of 10.00 on the
/// quantity modal).
pub const MAX_LINE_QUANTITY: Quantity = Quantity::from_hundredths(99_900);

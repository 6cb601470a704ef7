//! # boucherie-store: Sales Ledger & Terminal State for Boucherie POS
//!
//! This crate provides the durable side of the system: the append-only
//! sales ledger, its JSON persistence, the operator session and the
//! terminal composition root.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Boucherie POS Data Flow                             │
//! │                                                                         │
//! │  Frontend call (add_to_cart, checkout, today_sales)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  boucherie-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌────────────┐   ┌─────────────────────┐  │   │
//! │  │   │   Terminal   │──►│   Ledger   │──►│    SalesStorage     │  │   │
//! │  │   │ cart+session │   │ newest 1st │   │ JsonFile / Memory   │  │   │
//! │  │   └──────┬───────┘   └────────────┘   └─────────────────────┘  │   │
//! │  │          │                                                      │   │
//! │  │          └──► boucherie-core (Cart, Sale::finalize, reports)    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <app-data>/boucherie-sales.json  (one document, last write wins)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - The persistence port and its file/memory backends
//! - [`ledger`] - The append-only sale history and its date queries
//! - [`session`] - Operator login state
//! - [`terminal`] - The composition root and atomic checkout
//! - [`receipt`] - Receipt DTO + plain-text ticket
//! - [`error`] - Storage and terminal error types
//!
//! ## Usage
//!
//! ```rust
//! use boucherie_store::{storage::MemoryStorage, Terminal};
//! use boucherie_core::{Catalog, EmployeeDirectory, Money, Quantity};
//!
//! let mut terminal = Terminal::new(
//!     Catalog::butcher_shop(),
//!     EmployeeDirectory::default_staff(),
//!     Box::new(MemoryStorage::new()),
//! );
//!
//! terminal.login(1, "1234")?;
//! terminal.add_to_cart(1, Quantity::try_from_f64(2.0).unwrap())?;
//! let sale = terminal.checkout(Money::from_francs(3500))?;
//! assert_eq!(sale.change, Money::from_francs(500));
//! # Ok::<(), boucherie_store::TerminalError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod receipt;
pub mod session;
pub mod storage;
pub mod terminal;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, TerminalError, TerminalResult};
pub use ledger::Ledger;
pub use receipt::Receipt;
pub use session::Session;
pub use storage::{JsonFileStorage, MemoryStorage, SalesStorage};
pub use terminal::Terminal;

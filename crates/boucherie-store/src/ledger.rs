//! # Ledger Module
//!
//! The append-only history of finalized sales.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ledger Lifecycle                                 │
//! │                                                                         │
//! │  1. STARTUP                                                             │
//! │     └── Ledger::load(storage)                                           │
//! │         ├── prior data        → sales, ordered newest-first             │
//! │         ├── no prior data     → empty (fresh install)                   │
//! │         └── corrupt / IO fail → warn + empty, NEVER fatal               │
//! │                                                                         │
//! │  2. EVERY COMPLETED SALE                                                │
//! │     └── append(sale) at the front, then the terminal saves the          │
//! │         whole list                                                      │
//! │                                                                         │
//! │  3. NO OTHER MUTATION                                                   │
//! │     └── no update, no delete: recorded sales are immutable              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Local;
use tracing::{info, warn};

use crate::storage::SalesStorage;
use boucherie_core::{Money, Sale};

/// Append-only collection of finalized sales, newest first.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    sales: Vec<Sale>,
}

impl Ledger {
    /// An empty ledger.
    pub fn new() -> Self {
        Ledger { sales: Vec::new() }
    }

    /// A ledger over an explicit sale list, re-ordered newest-first by the
    /// redundant `timestamp` field (which exists for exactly this sort).
    pub fn from_sales(mut sales: Vec<Sale>) -> Self {
        sales.sort_by_key(|s| std::cmp::Reverse(s.timestamp));
        Ledger { sales }
    }

    /// Loads the ledger from storage.
    ///
    /// Absent data is a fresh install and corrupt data is quarantined by
    /// starting empty; neither is allowed to stop the terminal from
    /// opening for the day.
    pub fn load(storage: &dyn SalesStorage) -> Self {
        match storage.load() {
            Ok(sales) => {
                info!(sales = sales.len(), "sales ledger loaded");
                Ledger::from_sales(sales)
            }
            Err(e) => {
                warn!(error = %e, "could not load sales ledger, starting empty");
                Ledger::new()
            }
        }
    }

    /// Appends a finalized sale at the front (newest-first order).
    pub fn append(&mut self, sale: Sale) {
        self.sales.insert(0, sale);
    }

    /// The full history, newest first.
    #[inline]
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Number of recorded sales.
    #[inline]
    pub fn len(&self) -> usize {
        self.sales.len()
    }

    /// Checks if the ledger is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    /// All sales recorded on the given local calendar day
    /// (`YYYY-MM-DD` key).
    pub fn sales_by_date(&self, date_key: &str) -> Vec<Sale> {
        self.sales
            .iter()
            .filter(|s| s.date_key() == date_key)
            .cloned()
            .collect()
    }

    /// Today's local date key.
    pub fn today_key() -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }

    /// All sales recorded today (local calendar day).
    pub fn today_sales(&self) -> Vec<Sale> {
        self.sales_by_date(&Ledger::today_key())
    }

    /// Today's revenue: the sum of today's STORED sale totals.
    ///
    /// Totals are trusted as recorded; a catalog price change never
    /// retroactively alters a day's figure.
    pub fn today_total(&self) -> Money {
        self.today_sales().iter().map(|s| s.total).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

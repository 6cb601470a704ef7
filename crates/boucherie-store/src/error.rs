//! # Store Error Types
//!
//! Error types for persistence and the terminal surface.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← non-fatal by policy: a failed save is    │
//! │       │                        logged, the in-memory ledger stays      │
//! │       │                        authoritative for the session           │
//! │       ▼                                                                 │
//! │  TerminalError ← what the frontend sees, alongside CoreError           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use boucherie_core::CoreError;

// =============================================================================
// Storage Error
// =============================================================================

/// Ledger persistence errors.
///
/// None of these are fatal to a running session: a load failure starts an
/// empty ledger, a save failure leaves the in-memory ledger authoritative.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the ledger file failed (other than the file not existing,
    /// which loads as an empty ledger).
    #[error("could not read sales ledger: {0}")]
    Read(#[source] std::io::Error),

    /// Writing the ledger file failed (disk full, permissions, ...).
    #[error("could not write sales ledger: {0}")]
    Write(#[source] std::io::Error),

    /// The stored document exists but is not a valid sales ledger.
    #[error("stored sales ledger is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// No OS app-data directory could be determined for this user.
    #[error("no application data directory available")]
    NoDataDir,
}

// =============================================================================
// Terminal Error
// =============================================================================

/// Errors surfaced by the terminal to the presentation layer.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Business rule violation from the core (insufficient payment,
    /// empty cart, bad quantity, ...). The cashier re-prompts.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Cart or checkout operation attempted with nobody logged in.
    #[error("no operator is logged in")]
    NotAuthenticated,

    /// Login with an unknown employee id or a wrong PIN.
    ///
    /// One variant for both cases: the login screen shows the same
    /// message either way.
    #[error("unknown employee or wrong PIN")]
    InvalidCredentials,

    /// Add-to-cart with a product id that is not in the catalog.
    #[error("product not in catalog: {0}")]
    UnknownProduct(u32),

    /// Explicit storage operation failed (opening the default ledger
    /// location). Save failures inside checkout do NOT surface here;
    /// they degrade durability and log instead.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for terminal operations.
pub type TerminalResult<T> = Result<T, TerminalError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_passes_through() {
        let err: TerminalError = CoreError::EmptyCart.into();
        assert_eq!(err.to_string(), "cannot complete a sale with an empty cart");
    }

    #[test]
    fn test_storage_error_messages() {
        let err = StorageError::NoDataDir;
        assert_eq!(err.to_string(), "no application data directory available");
    }
}

//! # Error Types
//!
//! Domain-specific error types for boucherie-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boucherie-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  boucherie-store errors (separate crate)                                │
//! │  ├── StorageError     - Ledger read/write failures (non-fatal)          │
//! │  └── TerminalError    - What the frontend sees                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → TerminalError → Frontend           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is a local validation failure the cashier recovers from
//! by re-prompting; none of them terminates the session.

use thiserror::Error;

use crate::money::{Money, Quantity};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cash received is below the cart total.
    ///
    /// The payment screen disables the confirm button until enough cash is
    /// entered, but `change` is a documented non-negative attribute, so the
    /// finalizer rejects a violation instead of recording a negative change.
    #[error("insufficient payment: total is {total}, received {received}")]
    InsufficientPayment { total: Money, received: Money },

    /// Finalizing an empty cart. A shop does not record empty tickets.
    #[error("cannot complete a sale with an empty cart")]
    EmptyCart,

    /// Cart has exceeded the maximum number of distinct lines.
    #[error("cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// A single line's quantity exceeds the maximum allowed.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: Quantity, max: Quantity },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, raised before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a PIN with non-digit characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

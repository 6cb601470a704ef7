//! # Validation Module
//!
//! Input validation for values crossing into the core from the UI layer.
//!
//! The touch screen already rejects most bad input (the quantity modal
//! won't produce a negative weight, the numpad only emits digits), but
//! every rule that protects a ledger invariant is enforced again here.

use crate::error::{CoreError, ValidationError};
use crate::money::{Money, Quantity};
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quantity Validators
// =============================================================================

/// Validates that a quantity is strictly positive.
///
/// ## Example
/// ```rust
/// use boucherie_core::money::Quantity;
/// use boucherie_core::validation::validate_quantity;
///
/// assert!(validate_quantity(Quantity::from_units(2)).is_ok());
/// assert!(validate_quantity(Quantity::from_units(0)).is_err());
/// ```
pub fn validate_quantity(qty: Quantity) -> ValidationResult<()> {
    if !qty.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates that a line quantity does not exceed the per-line maximum.
pub fn validate_line_quantity(qty: Quantity) -> Result<(), CoreError> {
    if qty > MAX_LINE_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            requested: qty,
            max: MAX_LINE_QUANTITY,
        });
    }
    Ok(())
}

// =============================================================================
// Money Validators
// =============================================================================

/// Validates a payment amount.
///
/// ## Rules
/// - Must be strictly positive; a zero-franc cash payment is a mistyped
///   entry, not a transaction
pub fn validate_payment_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// PIN Validator
// =============================================================================

/// Validates the shape of a login PIN.
///
/// ## Rules
/// - Must not be empty
/// - Digits only (the login numpad can only produce digits; re-checked
///   here for direct API callers)
pub fn validate_pin(pin: &str) -> ValidationResult<()> {
    if pin.is_empty() {
        return Err(ValidationError::Required {
            field: "pin".to_string(),
        });
    }
    if !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "pin".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(Quantity::from_hundredths(1)).is_ok());
        assert!(validate_quantity(Quantity::from_units(999)).is_ok());

        assert!(validate_quantity(Quantity::from_units(0)).is_err());
        assert!(validate_quantity(Quantity::from_hundredths(-100)).is_err());
    }

    #[test]
    fn test_validate_line_quantity() {
        assert!(validate_line_quantity(MAX_LINE_QUANTITY).is_ok());
        assert!(validate_line_quantity(Quantity::from_units(1000)).is_err());
    }

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(Money::from_francs(500)).is_ok());
        assert!(validate_payment_amount(Money::zero()).is_err());
        assert!(validate_payment_amount(Money::from_francs(-100)).is_err());
    }

    #[test]
    fn test_validate_pin() {
        assert!(validate_pin("1234").is_ok());
        assert!(validate_pin("").is_err());
        assert!(validate_pin("12a4").is_err());
    }
}

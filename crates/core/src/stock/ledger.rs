//! Pure stock movement arithmetic.

use crate::stock::error::StockError;
use crate::stock::types::MovementType;

/// Result of applying a movement: the before/after pair recorded on the
/// immutable movement row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockChange {
    /// Quantity before the movement.
    pub previous: i32,
    /// Quantity after the movement.
    pub current: i32,
}

/// Stateless calculator for stock quantity changes.
pub struct StockLedger;

impl StockLedger {
    /// Applies a movement to the current quantity.
    ///
    /// `In` adds, `Out` subtracts (never below zero), and `Adjustment`
    /// replaces the quantity with the given absolute value.
    ///
    /// # Errors
    ///
    /// Returns `StockError::InvalidQuantity` for a non-positive `in`/`out`
    /// quantity or a negative adjustment, and `StockError::InsufficientStock`
    /// when an `out` movement exceeds the quantity on hand.
    pub fn apply(
        previous: i32,
        movement_type: MovementType,
        quantity: i32,
    ) -> Result<StockChange, StockError> {
        let current = match movement_type {
            MovementType::In => {
                if quantity < 1 {
                    return Err(StockError::InvalidQuantity {
                        qty: quantity,
                        movement_type: movement_type.as_str(),
                    });
                }
                previous.saturating_add(quantity)
            }
            MovementType::Out => {
                if quantity < 1 {
                    return Err(StockError::InvalidQuantity {
                        qty: quantity,
                        movement_type: movement_type.as_str(),
                    });
                }
                if quantity > previous {
                    return Err(StockError::InsufficientStock {
                        available: previous,
                        requested: quantity,
                    });
                }
                previous - quantity
            }
            MovementType::Adjustment => {
                if quantity < 0 {
                    return Err(StockError::InvalidQuantity {
                        qty: quantity,
                        movement_type: movement_type.as_str(),
                    });
                }
                quantity
            }
        };

        Ok(StockChange { previous, current })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_adds() {
        let change = StockLedger::apply(45, MovementType::In, 10).unwrap();
        assert_eq!(change, StockChange { previous: 45, current: 55 });
    }

    #[test]
    fn test_out_subtracts() {
        let change = StockLedger::apply(45, MovementType::Out, 10).unwrap();
        assert_eq!(change, StockChange { previous: 45, current: 35 });
    }

    #[test]
    fn test_out_to_zero() {
        let change = StockLedger::apply(10, MovementType::Out, 10).unwrap();
        assert_eq!(change.current, 0);
    }

    #[test]
    fn test_out_insufficient() {
        let result = StockLedger::apply(5, MovementType::Out, 10);
        assert_eq!(
            result,
            Err(StockError::InsufficientStock {
                available: 5,
                requested: 10
            })
        );
    }

    #[test]
    fn test_adjustment_is_absolute() {
        let change = StockLedger::apply(45, MovementType::Adjustment, 7).unwrap();
        assert_eq!(change, StockChange { previous: 45, current: 7 });

        let change = StockLedger::apply(0, MovementType::Adjustment, 0).unwrap();
        assert_eq!(change.current, 0);
    }

    #[test]
    fn test_rejects_bad_quantities() {
        assert!(StockLedger::apply(10, MovementType::In, 0).is_err());
        assert!(StockLedger::apply(10, MovementType::Out, -1).is_err());
        assert!(StockLedger::apply(10, MovementType::Adjustment, -5).is_err());
    }
}

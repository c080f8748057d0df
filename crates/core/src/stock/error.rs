//! Stock ledger errors.

use thiserror::Error;

/// Errors produced when applying a stock movement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// The movement quantity is not usable for the given movement type.
    #[error("invalid quantity {qty} for {movement_type} movement")]
    InvalidQuantity {
        /// The offending quantity.
        qty: i32,
        /// The movement type it was applied with.
        movement_type: &'static str,
    },

    /// An outbound movement exceeds the available stock.
    #[error("insufficient stock: available {available}, requested {requested}")]
    InsufficientStock {
        /// Stock on hand before the movement.
        available: i32,
        /// Quantity the movement tried to issue.
        requested: i32,
    },
}

//! Stock ledger logic.
//!
//! Pure arithmetic for stock movements: every change to a product's
//! quantity goes through [`StockLedger::apply`], which yields the
//! previous/current pair recorded in the movement audit trail.

pub mod error;
pub mod ledger;
pub mod types;

#[cfg(test)]
mod ledger_props;

pub use error::StockError;
pub use ledger::{StockChange, StockLedger};
pub use types::{MovementType, StockStatus};

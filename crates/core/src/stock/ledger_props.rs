//! Property-based tests for the stock ledger.

use proptest::prelude::*;

use crate::stock::ledger::StockLedger;
use crate::stock::types::{MovementType, StockStatus};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Applied movements never produce a negative quantity.
    #[test]
    fn prop_stock_never_negative(
        previous in 0i32..100_000,
        qty in -100i32..100_000,
    ) {
        for movement_type in [MovementType::In, MovementType::Out, MovementType::Adjustment] {
            if let Ok(change) = StockLedger::apply(previous, movement_type, qty) {
                prop_assert!(change.current >= 0);
                prop_assert_eq!(change.previous, previous);
            }
        }
    }

    /// An `out` followed by an equal `in` restores the original quantity.
    #[test]
    fn prop_out_then_in_is_identity(
        previous in 1i32..100_000,
        qty in 1i32..100_000,
    ) {
        prop_assume!(qty <= previous);

        let out = StockLedger::apply(previous, MovementType::Out, qty).unwrap();
        let back = StockLedger::apply(out.current, MovementType::In, qty).unwrap();
        prop_assert_eq!(back.current, previous);
    }

    /// An adjustment lands exactly on the given value regardless of history.
    #[test]
    fn prop_adjustment_absolute(
        previous in 0i32..100_000,
        target in 0i32..100_000,
    ) {
        let change = StockLedger::apply(previous, MovementType::Adjustment, target).unwrap();
        prop_assert_eq!(change.current, target);
    }

    /// An `out` that would overdraw always fails and never mutates.
    #[test]
    fn prop_overdraw_rejected(
        previous in 0i32..1000,
        extra in 1i32..1000,
    ) {
        let result = StockLedger::apply(previous, MovementType::Out, previous + extra);
        prop_assert!(result.is_err());
    }

    /// Status bands partition the quantity axis.
    #[test]
    fn prop_status_bands(qty in -10i32..10_000, min in 0i32..500) {
        let status = StockStatus::determine(qty, min);
        match status {
            StockStatus::OutOfStock => prop_assert!(qty <= 0),
            StockStatus::LowStock => prop_assert!(qty > 0 && qty <= min),
            StockStatus::InStock => prop_assert!(qty > min),
        }
    }
}

//! Stock movement and status types.

use serde::{Deserialize, Serialize};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    /// Stock received (purchase, return, restore on cancellation).
    In,
    /// Stock issued (fulfilled request).
    Out,
    /// Absolute correction to a counted quantity.
    Adjustment,
}

impl MovementType {
    /// Returns the database string for this movement type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Adjustment => "adjustment",
        }
    }

    /// Parses a movement type from its database string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            "adjustment" => Some(Self::Adjustment),
            _ => None,
        }
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived availability status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Quantity above the minimum stock level.
    InStock,
    /// Quantity positive but at or below the minimum stock level.
    LowStock,
    /// Quantity zero or below.
    OutOfStock,
}

impl StockStatus {
    /// Recomputes the status from a quantity and minimum stock level.
    ///
    /// This runs on every stock-affecting save, so the stored status is
    /// always derived, never authoritative.
    #[must_use]
    pub const fn determine(stock_quantity: i32, min_stock_level: i32) -> Self {
        if stock_quantity <= 0 {
            Self::OutOfStock
        } else if stock_quantity <= min_stock_level {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Returns the database string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_type_roundtrip() {
        for ty in [MovementType::In, MovementType::Out, MovementType::Adjustment] {
            assert_eq!(MovementType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(MovementType::parse("transfer"), None);
    }

    #[test]
    fn test_determine_status() {
        assert_eq!(StockStatus::determine(0, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::determine(-1, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::determine(3, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::determine(5, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::determine(6, 5), StockStatus::InStock);
        assert_eq!(StockStatus::determine(1, 0), StockStatus::InStock);
    }
}

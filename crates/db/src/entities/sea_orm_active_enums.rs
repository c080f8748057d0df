//! Postgres enum mappings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item request status, shared by parent requests and detail lines.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "request_status")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Saved without reserving stock.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Submitted, stock reserved, awaiting decision.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Granted in full.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Denied.
    #[sea_orm(string_value = "rejected")]
    Rejected,
    /// Some lines granted, others not.
    #[sea_orm(string_value = "partially_approved")]
    PartiallyApproved,
    /// Fulfilled and closed.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Withdrawn, stock restored.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Stock movement direction.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "movement_type")]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    /// Stock received.
    #[sea_orm(string_value = "in")]
    In,
    /// Stock issued.
    #[sea_orm(string_value = "out")]
    Out,
    /// Absolute correction.
    #[sea_orm(string_value = "adjustment")]
    Adjustment,
}

/// Derived product availability status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "stock_status")]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Quantity above the minimum stock level.
    #[sea_orm(string_value = "in_stock")]
    InStock,
    /// Quantity positive but at or below the minimum stock level.
    #[sea_orm(string_value = "low_stock")]
    LowStock,
    /// Quantity exhausted.
    #[sea_orm(string_value = "out_of_stock")]
    OutOfStock,
}

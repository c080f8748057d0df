//! `SeaORM` entity definitions.

pub mod categories;
pub mod email_settings;
pub mod item_request_details;
pub mod item_request_logs;
pub mod item_requests;
pub mod permissions;
pub mod products;
pub mod role_permission;
pub mod roles;
pub mod sea_orm_active_enums;
pub mod stock_movements;
pub mod users;

//! Core business logic for Inventopia.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `auth` - Password hashing and role capabilities
//! - `request` - Item-request lifecycle state machine
//! - `stock` - Stock ledger arithmetic and derived stock status
//! - `notification` - Email notification decision logic

pub mod auth;
pub mod notification;
pub mod request;
pub mod stock;

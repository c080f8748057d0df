//! Item-request lifecycle management.
//!
//! This module implements the request state machine, line validation,
//! request-number generation, and the compensating restock plans used
//! when requests are cancelled or deleted.
//!
//! # Modules
//!
//! - `types` - Domain types (`RequestStatus`, `RequestLine`, `LifecycleAction`)
//! - `error` - Request-specific error types
//! - `service` - State transition and validation logic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::RequestError;
pub use service::{DetailSnapshot, RequestLifecycle, RestockEntry};
pub use types::{LifecycleAction, RequestLine, RequestStatus};

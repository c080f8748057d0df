//! Error types for item-request lifecycle operations.

use thiserror::Error;
use uuid::Uuid;

use crate::request::types::RequestStatus;

/// Errors that can occur during request lifecycle operations.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: RequestStatus,
        /// The attempted target status.
        to: RequestStatus,
    },

    /// A request must contain at least one line.
    #[error("Request must contain at least one item")]
    EmptyLines,

    /// The same product appears more than once in a request.
    #[error("Product {0} appears more than once in the request")]
    DuplicateProduct(Uuid),

    /// A line quantity is below the minimum of 1.
    #[error("Invalid quantity {qty} for product {product_id}: must be at least 1")]
    InvalidQuantity {
        /// The offending product.
        product_id: Uuid,
        /// The rejected quantity.
        qty: i32,
    },

    /// Not enough stock to satisfy a line.
    ///
    /// The message names the product and both quantities so operators can
    /// act on it directly.
    #[error("Insufficient stock for {product_name}: available {available}, requested {requested}")]
    InsufficientStock {
        /// The product's display name.
        product_name: String,
        /// Stock on hand at the time of the check.
        available: i32,
        /// Quantity the line asked for.
        requested: i32,
    },

    /// The caller does not own the request.
    #[error("User {user_id} does not own request {request_id}")]
    NotOwner {
        /// The caller.
        user_id: Uuid,
        /// The request being accessed.
        request_id: Uuid,
    },

    /// The caller lacks the admin capability for this operation.
    #[error("Operation requires an admin role")]
    AdminRequired,

    /// A referenced product does not exist.
    #[error("Product {0} not found")]
    ProductNotFound(Uuid),

    /// The request does not exist.
    #[error("Request {0} not found")]
    RequestNotFound(Uuid),

    /// Database failure during an operation.
    #[error("Database error: {0}")]
    Database(String),
}

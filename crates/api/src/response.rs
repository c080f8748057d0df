//! JSON response envelope helpers.
//!
//! Every endpoint answers with `{ success, data?, message?, errors? }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

use inventopia_core::request::RequestError;

/// 200 with a data payload.
pub fn success<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": data })),
    )
        .into_response()
}

/// 200 with a message only.
pub fn success_message(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": message })),
    )
        .into_response()
}

/// 201 with the created resource.
pub fn created<T: Serialize>(data: T, message: &str) -> Response {
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": data, "message": message })),
    )
        .into_response()
}

/// Failure with an arbitrary status and message.
pub fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}

/// 422 with field-keyed validation errors.
pub fn validation_errors(errors: serde_json::Value) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "success": false,
            "message": "Validation failed",
            "errors": errors
        })),
    )
        .into_response()
}

/// 404 for a missing resource.
pub fn not_found(message: &str) -> Response {
    error(StatusCode::NOT_FOUND, message)
}

/// 403 for an authorization failure.
pub fn forbidden(message: &str) -> Response {
    error(StatusCode::FORBIDDEN, message)
}

/// 500 after logging; the message is surfaced (internal tool).
pub fn internal_error(message: &str) -> Response {
    error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Maps a request lifecycle error onto the envelope.
pub fn request_error(err: &RequestError) -> Response {
    match err {
        RequestError::InvalidTransition { .. }
        | RequestError::EmptyLines
        | RequestError::DuplicateProduct(_)
        | RequestError::InvalidQuantity { .. }
        | RequestError::InsufficientStock { .. } => {
            error(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string())
        }
        RequestError::NotOwner { .. } | RequestError::AdminRequired => {
            forbidden(&err.to_string())
        }
        RequestError::ProductNotFound(_) | RequestError::RequestNotFound(_) => {
            not_found(&err.to_string())
        }
        RequestError::Database(message) => {
            tracing::error!(error = %message, "Database error");
            internal_error(message)
        }
    }
}

//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod email_settings;
pub mod health;
pub mod item_requests;
pub mod permissions;
pub mod products;
pub mod stock_movements;
pub mod users;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Protected routes that require authentication
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(categories::routes())
        .merge(products::routes())
        .merge(stock_movements::routes())
        .merge(item_requests::routes())
        .merge(email_settings::routes())
        .merge(users::routes())
        .merge(permissions::routes())
        .merge(dashboard::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine public and protected routes
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}

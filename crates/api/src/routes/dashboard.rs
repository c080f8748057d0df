//! Dashboard routes.

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::middleware::auth::AuthUser;
use crate::{AppState, response};
use inventopia_db::repositories::ProductRepository;

/// Creates the dashboard router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(stats))
}

/// GET /dashboard/stats - Product counts by status plus inventory value.
async fn stats(State(state): State<AppState>, _user: AuthUser) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo.stats().await {
        Ok(stats) => response::success(json!({
            "total_products": stats.total,
            "in_stock": stats.in_stock,
            "low_stock": stats.low_stock,
            "out_of_stock": stats.out_of_stock,
            "inventory_value": stats.inventory_value,
        })),
        Err(e) => {
            error!(error = %e, "Failed to load dashboard stats");
            response::internal_error("Failed to load dashboard stats")
        }
    }
}

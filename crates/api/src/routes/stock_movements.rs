//! Stock movement listing routes.

use axum::{
    Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::{AppState, response};
use inventopia_core::stock::MovementType;
use inventopia_db::entities::{products, stock_movements};
use inventopia_db::repositories::{MovementFilter, StockMovementRepository};
use inventopia_shared::types::{PageRequest, PageResponse};

/// Creates the stock movement router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stockmovement", get(index))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    product_id: Option<Uuid>,
    #[serde(rename = "type")]
    movement_type: Option<String>,
    search: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
}

/// Serializes a movement with its product inline.
fn movement_json(
    movement: &stock_movements::Model,
    product: Option<&products::Model>,
) -> serde_json::Value {
    let mut value = json!(movement);
    if let Some(obj) = value.as_object_mut() {
        obj.insert("product".to_string(), json!(product));
    }
    value
}

/// GET /stockmovement - List stock movements with their products.
async fn index(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let movement_type = match query.movement_type.as_deref() {
        None => None,
        Some(raw) => match MovementType::parse(raw) {
            Some(parsed) => Some(parsed),
            None => {
                return response::validation_errors(
                    json!({ "type": ["The type must be one of: in, out, adjustment"] }),
                );
            }
        },
    };

    let ascending = matches!(query.sort_order.as_deref(), Some("asc"));
    let filter = MovementFilter {
        product_id: query.product_id,
        movement_type,
        search: query.search.clone(),
        sort_by: query.sort_by.clone(),
        ascending,
    };
    let defaults = PageRequest::default();
    let page = PageRequest {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };

    let repo = StockMovementRepository::new((*state.db).clone());
    match repo.list(&filter, &page).await {
        Ok((rows, total)) => {
            let data: Vec<serde_json::Value> = rows
                .iter()
                .map(|(movement, product)| movement_json(movement, product.as_ref()))
                .collect();
            response::success(PageResponse::new(data, page.page, page.per_page(), total))
        }
        Err(e) => {
            error!(error = %e, "Failed to list stock movements");
            response::internal_error("Failed to list stock movements")
        }
    }
}

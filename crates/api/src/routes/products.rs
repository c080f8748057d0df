//! Product CRUD and stock update routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::{AppState, response};
use inventopia_core::stock::{MovementType, StockError, StockStatus};
use inventopia_db::entities::{categories, products};
use inventopia_db::repositories::{
    CreateProductInput, EmailSettingsRepository, ProductError, ProductFilter, ProductRepository,
    StockUpdateInput, UpdateProductInput,
};
use inventopia_shared::types::{PageRequest, PageResponse};

/// Creates the product router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(index).post(store))
        .route("/products/{id}", get(show).put(update).delete(destroy))
        .route("/products/{id}/update-stock", post(update_stock))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    search: Option<String>,
    category_id: Option<Uuid>,
    status: Option<String>,
    is_active: Option<bool>,
    page: Option<u32>,
    per_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CreateProductPayload {
    name: String,
    description: Option<String>,
    sku: String,
    price: Decimal,
    cost_price: Option<Decimal>,
    #[serde(default)]
    stock_quantity: i32,
    #[serde(default)]
    min_stock_level: i32,
    max_stock_level: Option<i32>,
    category_id: Uuid,
    image: Option<String>,
    #[serde(default = "default_true")]
    is_active: bool,
}

#[derive(Debug, Deserialize, Default)]
struct UpdateProductPayload {
    name: Option<String>,
    description: Option<Option<String>>,
    sku: Option<String>,
    price: Option<Decimal>,
    cost_price: Option<Option<Decimal>>,
    min_stock_level: Option<i32>,
    max_stock_level: Option<Option<i32>>,
    category_id: Option<Uuid>,
    image: Option<Option<String>>,
    is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct StockUpdatePayload {
    #[serde(rename = "type")]
    movement_type: String,
    quantity: i32,
    reference: Option<String>,
    notes: Option<String>,
}

const fn default_true() -> bool {
    true
}

/// Serializes a product with its category inline.
fn product_json(product: &products::Model, category: Option<&categories::Model>) -> serde_json::Value {
    let mut value = json!(product);
    if let Some(obj) = value.as_object_mut() {
        obj.insert("category".to_string(), json!(category));
    }
    value
}

fn create_validation_errors(payload: &CreateProductPayload) -> Option<serde_json::Value> {
    let mut errors = serde_json::Map::new();
    if payload.name.trim().is_empty() {
        errors.insert("name".into(), json!(["The name field is required"]));
    }
    if payload.sku.trim().is_empty() {
        errors.insert("sku".into(), json!(["The sku field is required"]));
    }
    if payload.price < Decimal::ZERO {
        errors.insert("price".into(), json!(["The price must be at least 0"]));
    }
    if payload.stock_quantity < 0 {
        errors.insert(
            "stock_quantity".into(),
            json!(["The stock quantity must be at least 0"]),
        );
    }
    if errors.is_empty() {
        None
    } else {
        Some(serde_json::Value::Object(errors))
    }
}

/// GET /products - List products with categories.
async fn index(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    let status = match query.status.as_deref() {
        None => None,
        Some("in_stock") => Some(StockStatus::InStock),
        Some("low_stock") => Some(StockStatus::LowStock),
        Some("out_of_stock") => Some(StockStatus::OutOfStock),
        Some(other) => {
            return response::validation_errors(
                json!({ "status": [format!("Unknown status '{other}'")] }),
            );
        }
    };

    let filter = ProductFilter {
        search: query.search.clone(),
        category_id: query.category_id,
        status,
        is_active: query.is_active,
    };
    let defaults = PageRequest::default();
    let page = PageRequest {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };

    match repo.list(&filter, &page).await {
        Ok((rows, total)) => {
            let data: Vec<serde_json::Value> = rows
                .iter()
                .map(|(product, category)| product_json(product, category.as_ref()))
                .collect();
            response::success(PageResponse::new(data, page.page, page.per_page(), total))
        }
        Err(e) => {
            error!(error = %e, "Failed to list products");
            response::internal_error("Failed to list products")
        }
    }
}

/// GET /products/{id} - Show one product with its category.
async fn show(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo.find_with_category(id).await {
        Ok(Some((product, category))) => {
            response::success(product_json(&product, category.as_ref()))
        }
        Ok(None) => response::not_found("Product not found"),
        Err(e) => {
            error!(error = %e, "Failed to load product");
            response::internal_error("Failed to load product")
        }
    }
}

/// POST /products - Create a product.
async fn store(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateProductPayload>,
) -> impl IntoResponse {
    if !user.can_manage_inventory() {
        return response::forbidden("Not allowed to manage products");
    }
    if let Some(errors) = create_validation_errors(&payload) {
        return response::validation_errors(errors);
    }

    let repo = ProductRepository::new((*state.db).clone());
    let input = CreateProductInput {
        name: payload.name,
        description: payload.description,
        sku: payload.sku,
        price: payload.price,
        cost_price: payload.cost_price,
        stock_quantity: payload.stock_quantity,
        min_stock_level: payload.min_stock_level,
        max_stock_level: payload.max_stock_level,
        category_id: payload.category_id,
        image: payload.image,
        is_active: payload.is_active,
    };

    match repo.create(input).await {
        Ok(product) => response::created(product, "Product created"),
        Err(ProductError::SkuTaken(sku)) => {
            response::validation_errors(json!({ "sku": [format!("The sku '{sku}' is taken")] }))
        }
        Err(ProductError::CategoryNotFound(_)) => response::validation_errors(
            json!({ "category_id": ["The selected category does not exist"] }),
        ),
        Err(e) => {
            error!(error = %e, "Failed to create product");
            response::internal_error("Failed to create product")
        }
    }
}

/// PUT /products/{id} - Update a product's catalog fields.
async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductPayload>,
) -> impl IntoResponse {
    if !user.can_manage_inventory() {
        return response::forbidden("Not allowed to manage products");
    }

    let repo = ProductRepository::new((*state.db).clone());
    let input = UpdateProductInput {
        name: payload.name,
        description: payload.description,
        sku: payload.sku,
        price: payload.price,
        cost_price: payload.cost_price,
        min_stock_level: payload.min_stock_level,
        max_stock_level: payload.max_stock_level,
        category_id: payload.category_id,
        image: payload.image,
        is_active: payload.is_active,
    };

    match repo.update(id, input).await {
        Ok(product) => response::success(product),
        Err(ProductError::NotFound(_)) => response::not_found("Product not found"),
        Err(ProductError::SkuTaken(sku)) => {
            response::validation_errors(json!({ "sku": [format!("The sku '{sku}' is taken")] }))
        }
        Err(ProductError::CategoryNotFound(_)) => response::validation_errors(
            json!({ "category_id": ["The selected category does not exist"] }),
        ),
        Err(e) => {
            error!(error = %e, "Failed to update product");
            response::internal_error("Failed to update product")
        }
    }
}

/// DELETE /products/{id} - Delete a product.
async fn destroy(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if !user.can_manage_inventory() {
        return response::forbidden("Not allowed to manage products");
    }

    let repo = ProductRepository::new((*state.db).clone());

    match repo.delete(id).await {
        Ok(()) => response::success_message("Product deleted"),
        Err(ProductError::NotFound(_)) => response::not_found("Product not found"),
        Err(e) => {
            error!(error = %e, "Failed to delete product");
            response::internal_error("Failed to delete product")
        }
    }
}

/// POST /products/{id}/update-stock - Apply a manual stock movement.
///
/// After the movement commits, a low-stock alert may go out; delivery
/// failures are logged and swallowed.
async fn update_stock(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<StockUpdatePayload>,
) -> impl IntoResponse {
    if !user.can_manage_inventory() {
        return response::forbidden("Not allowed to manage stock");
    }

    let Some(movement_type) = MovementType::parse(&payload.movement_type) else {
        return response::validation_errors(
            json!({ "type": ["The type must be one of: in, out, adjustment"] }),
        );
    };

    let repo = ProductRepository::new((*state.db).clone());
    let input = StockUpdateInput {
        movement_type,
        quantity: payload.quantity,
        reference: payload.reference,
        notes: payload.notes,
    };

    let product = match repo.update_stock(id, input).await {
        Ok(product) => product,
        Err(ProductError::NotFound(_)) => return response::not_found("Product not found"),
        Err(ProductError::Stock(StockError::InsufficientStock {
            available,
            requested,
        })) => {
            return response::validation_errors(json!({
                "quantity": [format!(
                    "Insufficient stock: available {available}, requested {requested}"
                )]
            }));
        }
        Err(ProductError::Stock(e)) => {
            return response::validation_errors(json!({ "quantity": [e.to_string()] }));
        }
        Err(e) => {
            error!(error = %e, "Failed to update stock");
            return response::internal_error("Failed to update stock");
        }
    };

    notify_low_stock(&state, &product).await;

    response::success(product)
}

/// Best-effort low-stock alert, decided by the loaded settings.
async fn notify_low_stock(state: &AppState, product: &products::Model) {
    let settings_repo = EmailSettingsRepository::new((*state.db).clone());
    let settings = match settings_repo.notification_settings().await {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "Failed to load notification settings");
            return;
        }
    };

    let Some(recipients) = settings.low_stock_recipients(product.stock_quantity) else {
        return;
    };

    let subject = format!("Low stock alert: {}", product.name);
    let body = format!(
        "Product {} ({}) is down to {} units (minimum level {}).",
        product.name, product.sku, product.stock_quantity, product.min_stock_level
    );

    if let Err(e) = state
        .email_service
        .send_email(&recipients.to, &recipients.cc, &subject, &body)
        .await
    {
        error!(error = %e, product_id = %product.id, "Failed to send low-stock alert");
    }
}

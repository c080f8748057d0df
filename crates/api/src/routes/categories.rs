//! Category CRUD routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::{AppState, response};
use inventopia_db::repositories::{CategoryError, CategoryInput, CategoryRepository};
use inventopia_shared::types::{PageRequest, PageResponse};

/// Creates the category router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(index).post(store))
        .route("/categories/{id}", get(show).put(update).delete(destroy))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    search: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
}

impl ListQuery {
    fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest {
            page: self.page.unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoryPayload {
    name: String,
    description: Option<String>,
    color: Option<String>,
    #[serde(default = "default_true")]
    is_active: bool,
}

const fn default_true() -> bool {
    true
}

fn validate(payload: &CategoryPayload) -> Option<axum::response::Response> {
    if payload.name.trim().is_empty() {
        return Some(response::validation_errors(
            json!({ "name": ["The name field is required"] }),
        ));
    }
    None
}

/// GET /categories - List categories.
async fn index(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());
    let page = query.page_request();

    match repo.list(query.search.as_deref(), &page).await {
        Ok((rows, total)) => {
            response::success(PageResponse::new(rows, page.page, page.per_page(), total))
        }
        Err(e) => {
            error!(error = %e, "Failed to list categories");
            response::internal_error("Failed to list categories")
        }
    }
}

/// GET /categories/{id} - Show one category.
async fn show(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.find_by_id(id).await {
        Ok(Some(category)) => response::success(category),
        Ok(None) => response::not_found("Category not found"),
        Err(e) => {
            error!(error = %e, "Failed to load category");
            response::internal_error("Failed to load category")
        }
    }
}

/// POST /categories - Create a category.
async fn store(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CategoryPayload>,
) -> impl IntoResponse {
    if !user.can_manage_inventory() {
        return response::forbidden("Not allowed to manage categories");
    }
    if let Some(rejection) = validate(&payload) {
        return rejection;
    }

    let repo = CategoryRepository::new((*state.db).clone());
    let input = CategoryInput {
        name: payload.name,
        description: payload.description,
        color: payload.color,
        is_active: payload.is_active,
    };

    match repo.create(input).await {
        Ok(category) => response::created(category, "Category created"),
        Err(e) => {
            error!(error = %e, "Failed to create category");
            response::internal_error("Failed to create category")
        }
    }
}

/// PUT /categories/{id} - Update a category.
async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CategoryPayload>,
) -> impl IntoResponse {
    if !user.can_manage_inventory() {
        return response::forbidden("Not allowed to manage categories");
    }
    if let Some(rejection) = validate(&payload) {
        return rejection;
    }

    let repo = CategoryRepository::new((*state.db).clone());
    let input = CategoryInput {
        name: payload.name,
        description: payload.description,
        color: payload.color,
        is_active: payload.is_active,
    };

    match repo.update(id, input).await {
        Ok(category) => response::success(category),
        Err(CategoryError::NotFound(_)) => response::not_found("Category not found"),
        Err(e) => {
            error!(error = %e, "Failed to update category");
            response::internal_error("Failed to update category")
        }
    }
}

/// DELETE /categories/{id} - Delete a category.
async fn destroy(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if !user.can_manage_inventory() {
        return response::forbidden("Not allowed to manage categories");
    }

    let repo = CategoryRepository::new((*state.db).clone());

    match repo.delete(id).await {
        Ok(()) => response::success_message("Category deleted"),
        Err(CategoryError::NotFound(_)) => response::not_found("Category not found"),
        Err(e) => {
            error!(error = %e, "Failed to delete category");
            response::internal_error("Failed to delete category")
        }
    }
}

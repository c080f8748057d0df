//! User management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::{AppState, response};
use inventopia_core::auth::{hash_password, verify_password};
use inventopia_db::entities::{roles, users};
use inventopia_db::repositories::{CreateUserInput, UpdateUserInput, UserError, UserRepository};
use inventopia_shared::auth::ChangePasswordRequest;
use inventopia_shared::types::{PageRequest, PageResponse};

/// Creates the user management router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(index).post(store))
        .route("/users/{id}", get(show).put(update).delete(destroy))
        .route("/users/{id}/change-password", post(change_password))
        .route("/users/{id}/block-status", patch(block_status))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    search: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CreateUserPayload {
    name: String,
    username: String,
    email: String,
    password: String,
    role_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Default)]
struct UpdateUserPayload {
    name: Option<String>,
    username: Option<String>,
    email: Option<String>,
    role_id: Option<Option<Uuid>>,
}

#[derive(Debug, Deserialize)]
struct BlockStatusPayload {
    is_blocked: bool,
}

/// Serializes a user with their role inline.
fn user_json(user: &users::Model, role: Option<&roles::Model>) -> serde_json::Value {
    let mut value = json!(user);
    if let Some(obj) = value.as_object_mut() {
        obj.insert("role".to_string(), json!(role));
    }
    value
}

fn user_error_response(err: UserError) -> axum::response::Response {
    match err {
        UserError::NotFound(_) => response::not_found("User not found"),
        UserError::EmailTaken(email) => {
            response::validation_errors(json!({ "email": [format!("The email '{email}' is taken")] }))
        }
        UserError::UsernameTaken(username) => response::validation_errors(
            json!({ "username": [format!("The username '{username}' is taken")] }),
        ),
        UserError::RoleNotFound(_) => {
            response::validation_errors(json!({ "role_id": ["The selected role does not exist"] }))
        }
        UserError::Database(e) => {
            error!(error = %e, "Database error");
            response::internal_error("Database error")
        }
    }
}

fn create_validation_errors(payload: &CreateUserPayload) -> Option<serde_json::Value> {
    let mut errors = serde_json::Map::new();
    if payload.name.trim().is_empty() {
        errors.insert("name".into(), json!(["The name field is required"]));
    }
    if payload.username.trim().is_empty() {
        errors.insert("username".into(), json!(["The username field is required"]));
    }
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        errors.insert("email".into(), json!(["A valid email is required"]));
    }
    if payload.password.len() < 8 {
        errors.insert(
            "password".into(),
            json!(["The password must be at least 8 characters"]),
        );
    }
    if errors.is_empty() {
        None
    } else {
        Some(serde_json::Value::Object(errors))
    }
}

/// GET /users - List users with their roles.
async fn index(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to manage users");
    }

    let defaults = PageRequest::default();
    let page = PageRequest {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };

    let repo = UserRepository::new((*state.db).clone());
    match repo.list(query.search.as_deref(), &page).await {
        Ok((rows, total)) => {
            let data: Vec<serde_json::Value> = rows
                .iter()
                .map(|(u, role)| user_json(u, role.as_ref()))
                .collect();
            response::success(PageResponse::new(data, page.page, page.per_page(), total))
        }
        Err(e) => {
            error!(error = %e, "Failed to list users");
            response::internal_error("Failed to list users")
        }
    }
}

/// GET /users/{id} - Show one user; users may view themselves.
async fn show(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if !user.can_manage_users() && user.user_id() != id {
        return response::forbidden("Not allowed to view this user");
    }

    let repo = UserRepository::new((*state.db).clone());
    match repo.find_with_role(id).await {
        Ok(Some((found, role))) => response::success(user_json(&found, role.as_ref())),
        Ok(None) => response::not_found("User not found"),
        Err(e) => {
            error!(error = %e, "Failed to load user");
            response::internal_error("Failed to load user")
        }
    }
}

/// POST /users - Create a user.
async fn store(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateUserPayload>,
) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to manage users");
    }
    if let Some(errors) = create_validation_errors(&payload) {
        return response::validation_errors(errors);
    }

    let password_hash = match hash_password(&payload.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!(error = %e, "Failed to hash password");
            return response::internal_error("Failed to create user");
        }
    };

    let repo = UserRepository::new((*state.db).clone());
    let input = CreateUserInput {
        name: payload.name,
        username: payload.username,
        email: payload.email,
        password_hash,
        role_id: payload.role_id,
    };

    match repo.create(input).await {
        Ok(created) => response::created(created, "User created"),
        Err(e) => user_error_response(e),
    }
}

/// PUT /users/{id} - Update a user's profile and role.
async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to manage users");
    }

    let repo = UserRepository::new((*state.db).clone());
    let input = UpdateUserInput {
        name: payload.name,
        username: payload.username,
        email: payload.email,
        role_id: payload.role_id,
    };

    match repo.update(id, input).await {
        Ok(updated) => response::success(updated),
        Err(e) => user_error_response(e),
    }
}

/// DELETE /users/{id} - Delete a user; self-deletion is refused.
async fn destroy(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to manage users");
    }
    if user.user_id() == id {
        return response::validation_errors(json!({ "id": ["You cannot delete your own account"] }));
    }

    let repo = UserRepository::new((*state.db).clone());
    match repo.delete(id).await {
        Ok(()) => response::success_message("User deleted"),
        Err(e) => user_error_response(e),
    }
}

/// POST /users/{id}/change-password.
///
/// Self-service requires the current password; user managers may reset
/// another account without it.
async fn change_password(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChangePasswordRequest>,
) -> impl IntoResponse {
    let is_self = user.user_id() == id;
    if !is_self && !user.can_manage_users() {
        return response::forbidden("Not allowed to change this password");
    }
    if payload.new_password.len() < 8 {
        return response::validation_errors(
            json!({ "new_password": ["The password must be at least 8 characters"] }),
        );
    }

    let repo = UserRepository::new((*state.db).clone());

    if is_self {
        let current = match repo.find_by_id(id).await {
            Ok(Some(found)) => found,
            Ok(None) => return response::not_found("User not found"),
            Err(e) => {
                error!(error = %e, "Failed to load user");
                return response::internal_error("Failed to change password");
            }
        };
        match verify_password(&payload.current_password, &current.password_hash) {
            Ok(true) => {}
            Ok(false) => {
                return response::validation_errors(
                    json!({ "current_password": ["The current password is incorrect"] }),
                );
            }
            Err(e) => {
                error!(error = %e, "Failed to verify password");
                return response::internal_error("Failed to change password");
            }
        }
    }

    let password_hash = match hash_password(&payload.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            error!(error = %e, "Failed to hash password");
            return response::internal_error("Failed to change password");
        }
    };

    match repo.update_password(id, &password_hash).await {
        Ok(_) => response::success_message("Password changed"),
        Err(e) => user_error_response(e),
    }
}

/// PATCH /users/{id}/block-status - Block or unblock a user.
async fn block_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<BlockStatusPayload>,
) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to manage users");
    }
    if user.user_id() == id {
        return response::validation_errors(json!({ "id": ["You cannot block your own account"] }));
    }

    let repo = UserRepository::new((*state.db).clone());
    match repo.set_blocked(id, payload.is_blocked).await {
        Ok(updated) => {
            let message = if payload.is_blocked {
                "User blocked"
            } else {
                "User unblocked"
            };
            let mut value = json!(updated);
            if let Some(obj) = value.as_object_mut() {
                obj.insert("message".to_string(), json!(message));
            }
            response::success(value)
        }
        Err(e) => user_error_response(e),
    }
}

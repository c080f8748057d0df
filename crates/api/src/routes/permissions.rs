//! Role and permission lookup routes.

use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use tracing::error;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::{AppState, response};
use inventopia_db::repositories::PermissionRepository;

/// Creates the permission lookup router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/permissions", get(permissions))
        .route("/roles", get(roles))
        .route("/roles/{id}/permissions", get(role_permissions))
        .route("/my-permissions", get(my_permissions))
}

/// GET /permissions - All known permissions.
async fn permissions(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to view permissions");
    }

    let repo = PermissionRepository::new((*state.db).clone());
    match repo.list_permissions().await {
        Ok(rows) => response::success(rows),
        Err(e) => {
            error!(error = %e, "Failed to list permissions");
            response::internal_error("Failed to list permissions")
        }
    }
}

/// GET /roles - All roles.
async fn roles(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to view roles");
    }

    let repo = PermissionRepository::new((*state.db).clone());
    match repo.list_roles().await {
        Ok(rows) => response::success(rows),
        Err(e) => {
            error!(error = %e, "Failed to list roles");
            response::internal_error("Failed to list roles")
        }
    }
}

/// GET /roles/{id}/permissions - Permissions granted to one role.
async fn role_permissions(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to view role permissions");
    }

    let repo = PermissionRepository::new((*state.db).clone());
    match repo.role_permissions(id).await {
        Ok(rows) => response::success(rows),
        Err(e) => {
            error!(error = %e, "Failed to list role permissions");
            response::internal_error("Failed to list role permissions")
        }
    }
}

/// GET /my-permissions - Permission names held by the caller.
async fn my_permissions(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    let repo = PermissionRepository::new((*state.db).clone());
    match repo.user_permissions(user.user_id()).await {
        Ok(names) => response::success(names),
        Err(e) => {
            error!(error = %e, "Failed to list caller permissions");
            response::internal_error("Failed to list caller permissions")
        }
    }
}

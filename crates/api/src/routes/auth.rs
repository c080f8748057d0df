//! Authentication routes: login and logout.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use tracing::{error, info};

use crate::middleware::auth::AuthUser;
use crate::{AppState, response};
use inventopia_core::auth::verify_password;
use inventopia_db::UserRepository;
use inventopia_shared::auth::{LoginRequest, LoginResponse, UserInfo};

/// Creates the public auth router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Creates the auth routes that require a valid token.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/logout", post(logout))
}

/// POST /login - Authenticate and return a bearer token.
///
/// Wrong credentials answer 401; a blocked account answers 403.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new((*state.db).clone());

    let user = match user_repo.find_by_email(&payload.email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            info!(email = %payload.email, "Login attempt for unknown email");
            return response::error(StatusCode::UNAUTHORIZED, "Invalid email or password");
        }
        Err(e) => {
            error!(error = %e, "Database error during login");
            return response::internal_error("An error occurred during login");
        }
    };

    if user.is_blocked {
        info!(user_id = %user.id, "Login attempt on blocked account");
        return response::forbidden("This account has been blocked");
    }

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt");
            return response::error(StatusCode::UNAUTHORIZED, "Invalid email or password");
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return response::internal_error("An error occurred during login");
        }
    }

    let role_name = match user_repo.find_with_role(user.id).await {
        Ok(Some((_, role))) => role.map(|r| r.name),
        Ok(None) => None,
        Err(e) => {
            error!(error = %e, "Failed to load user role");
            return response::internal_error("An error occurred during login");
        }
    };

    let token = match state.jwt_service.generate_token(
        user.id,
        role_name.as_deref().unwrap_or(""),
        payload.remember,
    ) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, "Failed to generate token");
            return response::internal_error("An error occurred during login");
        }
    };

    info!(user_id = %user.id, remember = payload.remember, "User logged in");

    response::success(LoginResponse {
        token,
        user: UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            role: role_name,
        },
        expires_in: state.jwt_service.expires_in(payload.remember),
        remember: payload.remember,
    })
}

/// POST /logout - Acknowledge logout.
///
/// Tokens are stateless; the client discards its copy.
async fn logout(user: AuthUser) -> impl IntoResponse {
    info!(user_id = %user.user_id(), "User logged out");
    response::success_message("Logged out")
}

//! Email settings routes.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get, routing::post};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::middleware::auth::AuthUser;
use crate::{AppState, response};
use inventopia_db::repositories::{EmailSettingsRepository, EmailSettingsUpdate};

/// Creates the email settings router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/email-settings", get(show).put(update))
        .route("/test-email", post(test_email))
}

#[derive(Debug, Deserialize, Default)]
struct UpdatePayload {
    admin_email: Option<String>,
    cc_emails: Option<Vec<String>>,
    request_notifications: Option<bool>,
    low_stock_notifications: Option<bool>,
    low_stock_threshold: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
struct TestEmailPayload {
    email: Option<String>,
}

/// GET /email-settings - Current settings, created on first read.
async fn show(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to manage email settings");
    }

    let repo = EmailSettingsRepository::new((*state.db).clone());
    match repo.get_or_create().await {
        Ok(settings) => response::success(settings),
        Err(e) => {
            error!(error = %e, "Failed to load email settings");
            response::internal_error("Failed to load email settings")
        }
    }
}

/// PUT /email-settings - Partial update of the settings row.
async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<UpdatePayload>,
) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to manage email settings");
    }

    if let Some(threshold) = payload.low_stock_threshold
        && threshold < 0
    {
        return response::validation_errors(
            json!({ "low_stock_threshold": ["The threshold must be at least 0"] }),
        );
    }

    let repo = EmailSettingsRepository::new((*state.db).clone());
    let input = EmailSettingsUpdate {
        admin_email: payload.admin_email,
        cc_emails: payload.cc_emails,
        request_notifications: payload.request_notifications,
        low_stock_notifications: payload.low_stock_notifications,
        low_stock_threshold: payload.low_stock_threshold,
    };

    match repo.update(input).await {
        Ok(settings) => response::success(settings),
        Err(e) => {
            error!(error = %e, "Failed to update email settings");
            response::internal_error("Failed to update email settings")
        }
    }
}

/// POST /test-email - Send a test message to the configured admin
/// address, or to an explicit override from the payload.
async fn test_email(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Option<Json<TestEmailPayload>>,
) -> impl IntoResponse {
    if !user.can_manage_users() {
        return response::forbidden("Not allowed to manage email settings");
    }

    let override_email = payload.and_then(|Json(p)| p.email);
    let to = match override_email {
        Some(email) if !email.trim().is_empty() => email,
        _ => {
            let repo = EmailSettingsRepository::new((*state.db).clone());
            match repo.get_or_create().await {
                Ok(settings) if !settings.admin_email.trim().is_empty() => settings.admin_email,
                Ok(_) => {
                    return response::validation_errors(
                        json!({ "email": ["No recipient configured"] }),
                    );
                }
                Err(e) => {
                    error!(error = %e, "Failed to load email settings");
                    return response::internal_error("Failed to load email settings");
                }
            }
        }
    };

    match state.email_service.send_test_email(&to).await {
        Ok(()) => response::success_message("Test email sent"),
        Err(e) => {
            error!(error = %e, "Failed to send test email");
            response::internal_error("Failed to send test email")
        }
    }
}

//! Item request workflow routes.
//!
//! Creation, submission, admin decisions, cancellation, and the audit
//! trail all go through `ItemRequestRepository`; this layer only shapes
//! payloads, enforces role gates, and fires notifications after commit.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::{AppState, response};
use inventopia_core::request::{RequestLine, RequestStatus};
use inventopia_db::repositories::{
    CreatedRequest, EmailSettingsRepository, ItemRequestRepository, RequestDetailView,
    RequestFilter, RequestView, UserRepository,
};
use inventopia_shared::types::{PageRequest, PageResponse};

/// Creates the item request router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/item-requests/stats", get(stats))
        .route("/item-requests", get(index).post(store))
        .route(
            "/item-requests/{id}",
            get(show).put(update_status).delete(destroy),
        )
        .route("/item-requests/{id}/cancel", post(cancel))
        .route("/item-requests/{id}/submit", post(submit))
        .route("/item-requests/{id}/approve", patch(approve))
        .route("/item-requests/{id}/reject", patch(reject))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    status: Option<String>,
    search: Option<String>,
    page: Option<u32>,
    per_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct LinePayload {
    product_id: Uuid,
    quantity: i32,
}

#[derive(Debug, Deserialize)]
struct CreateRequestPayload {
    note: Option<String>,
    #[serde(default)]
    submit: bool,
    #[serde(default)]
    items: Vec<LinePayload>,
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    status: String,
    admin_note: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct DecisionPayload {
    admin_note: Option<String>,
}

fn request_view_json(view: &RequestView) -> serde_json::Value {
    let mut value = json!(view.request);
    if let Some(obj) = value.as_object_mut() {
        obj.insert("user".to_string(), json!(view.user));
    }
    value
}

fn request_detail_json(view: &RequestDetailView) -> serde_json::Value {
    let details: Vec<serde_json::Value> = view
        .details
        .iter()
        .map(|(detail, product)| {
            let mut value = json!(detail);
            if let Some(obj) = value.as_object_mut() {
                obj.insert("product".to_string(), json!(product));
            }
            value
        })
        .collect();

    let mut value = json!(view.request);
    if let Some(obj) = value.as_object_mut() {
        obj.insert("user".to_string(), json!(view.user));
        obj.insert("details".to_string(), json!(details));
        obj.insert("logs".to_string(), json!(view.logs));
    }
    value
}

/// GET /item-requests/stats - Aggregate counts scoped to the viewer.
async fn stats(State(state): State<AppState>, user: AuthUser) -> impl IntoResponse {
    let repo = ItemRequestRepository::new((*state.db).clone());

    match repo.stats(user.user_id(), user.can_view_all_requests()).await {
        Ok(stats) => response::success(json!({
            "total": stats.total,
            "pending": stats.pending,
            "approved": stats.approved,
            "cancelled": stats.cancelled,
            "total_requested_quantity": stats.total_requested_quantity,
            "total_approved_quantity": stats.total_approved_quantity,
        })),
        Err(e) => response::request_error(&e),
    }
}

/// GET /item-requests - List requests; non-admins see their own only.
async fn index(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let status = match query.status.as_deref() {
        None => None,
        Some(raw) => match RequestStatus::parse(raw) {
            Some(parsed) => Some(parsed),
            None => {
                return response::validation_errors(
                    json!({ "status": [format!("Unknown status '{raw}'")] }),
                );
            }
        },
    };

    let filter = RequestFilter {
        status,
        search: query.search.clone(),
    };
    let defaults = PageRequest::default();
    let page = PageRequest {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };

    let repo = ItemRequestRepository::new((*state.db).clone());
    match repo
        .list(user.user_id(), user.can_view_all_requests(), &filter, &page)
        .await
    {
        Ok((rows, total)) => {
            let data: Vec<serde_json::Value> = rows.iter().map(request_view_json).collect();
            response::success(PageResponse::new(data, page.page, page.per_page(), total))
        }
        Err(e) => response::request_error(&e),
    }
}

/// GET /item-requests/{id} - Full request with lines and audit trail.
async fn show(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = ItemRequestRepository::new((*state.db).clone());

    match repo
        .show(id, user.user_id(), user.can_view_all_requests())
        .await
    {
        Ok(view) => response::success(request_detail_json(&view)),
        Err(e) => response::request_error(&e),
    }
}

/// POST /item-requests - Create a draft or submit directly.
async fn store(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateRequestPayload>,
) -> impl IntoResponse {
    if payload.items.is_empty() {
        return response::validation_errors(json!({ "items": ["At least one item is required"] }));
    }

    let lines: Vec<RequestLine> = payload
        .items
        .iter()
        .map(|line| RequestLine {
            product_id: line.product_id,
            qty: line.quantity,
        })
        .collect();

    let repo = ItemRequestRepository::new((*state.db).clone());
    match repo
        .create(user.user_id(), payload.note, lines, payload.submit)
        .await
    {
        Ok(created) => {
            notify_request_created(&state, &created).await;
            response::created(created.request, "Request created")
        }
        Err(e) => response::request_error(&e),
    }
}

/// POST /item-requests/{id}/submit - Submit a draft, reserving stock.
async fn submit(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = ItemRequestRepository::new((*state.db).clone());

    match repo.submit(id, user.user_id()).await {
        Ok(created) => {
            notify_request_created(&state, &created).await;
            response::success(created.request)
        }
        Err(e) => response::request_error(&e),
    }
}

/// PUT /item-requests/{id} - Admin status decision.
async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatusPayload>,
) -> impl IntoResponse {
    let Some(status) = RequestStatus::parse(&payload.status) else {
        return response::validation_errors(
            json!({ "status": [format!("Unknown status '{}'", payload.status)] }),
        );
    };

    decide(&state, &user, id, status, payload.admin_note).await
}

/// PATCH /item-requests/{id}/approve - Approve a pending request.
async fn approve(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    payload: Option<Json<DecisionPayload>>,
) -> impl IntoResponse {
    let note = payload.and_then(|Json(p)| p.admin_note);
    decide(&state, &user, id, RequestStatus::Approved, note).await
}

/// PATCH /item-requests/{id}/reject - Reject a pending request.
async fn reject(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    payload: Option<Json<DecisionPayload>>,
) -> impl IntoResponse {
    let note = payload.and_then(|Json(p)| p.admin_note);
    decide(&state, &user, id, RequestStatus::Rejected, note).await
}

async fn decide(
    state: &AppState,
    user: &AuthUser,
    request_id: Uuid,
    status: RequestStatus,
    admin_note: Option<String>,
) -> axum::response::Response {
    let repo = ItemRequestRepository::new((*state.db).clone());

    match repo
        .update_status(
            request_id,
            user.user_id(),
            user.can_approve_requests(),
            status,
            admin_note,
        )
        .await
    {
        Ok(request) => response::success(request),
        Err(e) => response::request_error(&e),
    }
}

/// POST /item-requests/{id}/cancel - Owner cancels, restoring stock.
async fn cancel(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = ItemRequestRepository::new((*state.db).clone());

    match repo.cancel(id, user.user_id()).await {
        Ok(request) => response::success(request),
        Err(e) => response::request_error(&e),
    }
}

/// DELETE /item-requests/{id} - Admin deletes, restoring approved stock.
async fn destroy(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = ItemRequestRepository::new((*state.db).clone());

    match repo.delete(id, user.can_approve_requests()).await {
        Ok(()) => response::success_message("Request deleted"),
        Err(e) => response::request_error(&e),
    }
}

/// Best-effort notification after a submitted request commits.
///
/// Drafts carry no submitted lines and are skipped.
async fn notify_request_created(state: &AppState, created: &CreatedRequest) {
    if created.submitted_lines.is_empty() {
        return;
    }

    let settings_repo = EmailSettingsRepository::new((*state.db).clone());
    let settings = match settings_repo.notification_settings().await {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "Failed to load notification settings");
            return;
        }
    };

    let Some(recipients) = settings.request_created_recipients() else {
        return;
    };

    let users = UserRepository::new((*state.db).clone());
    let requester_name = match users.find_by_id(created.request.user_id).await {
        Ok(Some(u)) => u.name,
        Ok(None) => "Unknown".to_string(),
        Err(e) => {
            warn!(error = %e, "Failed to load requester for notification");
            return;
        }
    };

    if let Err(e) = state
        .email_service
        .send_request_created(
            &recipients.to,
            &recipients.cc,
            &created.request.request_number,
            &requester_name,
            &created.submitted_lines,
        )
        .await
    {
        error!(
            error = %e,
            request_number = %created.request.request_number,
            "Failed to send request notification"
        );
    }
}

//! Item request repository.
//!
//! Each lifecycle operation runs as a single transaction covering the
//! status change, detail mutations, stock deltas, and exactly one
//! audit-log insert. Stock checks take row locks on the affected
//! products so a concurrent submission cannot overdraw.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use uuid::Uuid;

use inventopia_core::request::{
    DetailSnapshot, RequestError, RequestLifecycle, RequestLine, RequestStatus, RestockEntry,
};
use inventopia_core::stock::{MovementType, StockLedger, StockStatus};
use inventopia_shared::types::PageRequest;

use crate::entities::{
    item_request_details, item_request_logs, item_requests, products,
    sea_orm_active_enums::RequestStatus as DbRequestStatus, stock_movements, users,
};
use crate::repositories::product::{movement_type_to_db, stock_status_to_db};

/// A request with its owner, as returned by the listing.
#[derive(Debug, Clone)]
pub struct RequestView {
    /// The request row.
    pub request: item_requests::Model,
    /// The owning user, when still present.
    pub user: Option<users::Model>,
}

/// A fully loaded request for the detail endpoint.
#[derive(Debug, Clone)]
pub struct RequestDetailView {
    /// The request row.
    pub request: item_requests::Model,
    /// The owning user.
    pub user: Option<users::Model>,
    /// Detail lines with their products.
    pub details: Vec<(item_request_details::Model, Option<products::Model>)>,
    /// Audit trail, oldest first.
    pub logs: Vec<item_request_logs::Model>,
}

/// Aggregate request counts.
#[derive(Debug, Clone)]
pub struct RequestStats {
    /// All requests in scope.
    pub total: u64,
    /// Requests awaiting a decision.
    pub pending: u64,
    /// Approved requests.
    pub approved: u64,
    /// Cancelled requests.
    pub cancelled: u64,
    /// Sum of requested quantities across detail lines.
    pub total_requested_quantity: i64,
    /// Sum of approved quantities across detail lines.
    pub total_approved_quantity: i64,
}

/// Filter for the request listing.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    /// Restrict to one status.
    pub status: Option<RequestStatus>,
    /// Match against request number or owner name.
    pub search: Option<String>,
}

/// Result of a create or submit, carrying what the notification needs.
#[derive(Debug, Clone)]
pub struct CreatedRequest {
    /// The request row after the operation.
    pub request: item_requests::Model,
    /// `(product name, quantity)` per submitted line; empty for drafts.
    pub submitted_lines: Vec<(String, i32)>,
}

/// Item request repository.
#[derive(Debug, Clone)]
pub struct ItemRequestRepository {
    db: DatabaseConnection,
}

impl ItemRequestRepository {
    /// Creates a new item request repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a request as a draft or, with `submit`, directly pending
    /// with stock reserved.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad lines, `ProductNotFound` for an
    /// unknown product, and `InsufficientStock` when a submitted line
    /// exceeds the available quantity. Any error rolls back everything.
    pub async fn create(
        &self,
        user_id: Uuid,
        note: Option<String>,
        lines: Vec<RequestLine>,
        submit: bool,
    ) -> Result<CreatedRequest, RequestError> {
        let action = RequestLifecycle::create(&lines, submit, user_id)?;
        let status = core_status_to_db(action.new_status());

        let txn = self.db.begin().await.map_err(db_err)?;

        let now = Utc::now();
        let request_number = next_request_number(&txn, now).await?;

        let now_tz = now.into();
        let request = item_requests::ActiveModel {
            id: Set(Uuid::new_v4()),
            request_number: Set(request_number),
            user_id: Set(user_id),
            note: Set(note),
            status: Set(status.clone()),
            approved_by: Set(None),
            approved_at: Set(None),
            admin_note: Set(None),
            created_at: Set(now_tz),
            updated_at: Set(now_tz),
        };
        let request = request.insert(&txn).await.map_err(db_err)?;

        let mut details = Vec::with_capacity(lines.len());
        for line in &lines {
            if products::Entity::find_by_id(line.product_id)
                .one(&txn)
                .await
                .map_err(db_err)?
                .is_none()
            {
                return Err(RequestError::ProductNotFound(line.product_id));
            }

            let detail = item_request_details::ActiveModel {
                id: Set(Uuid::new_v4()),
                item_request_id: Set(request.id),
                product_id: Set(line.product_id),
                requested_quantity: Set(line.qty),
                approved_quantity: Set(0),
                status: Set(status.clone()),
                note: Set(None),
                created_at: Set(now_tz),
                updated_at: Set(now_tz),
            };
            details.push(detail.insert(&txn).await.map_err(db_err)?);
        }

        let submitted_lines = if submit {
            reserve_stock(&txn, &request, &details).await?
        } else {
            Vec::new()
        };

        insert_log(
            &txn,
            request.id,
            user_id,
            action.log_action(),
            None,
            snapshot(&request)?,
            &action.log_description(),
        )
        .await?;

        txn.commit().await.map_err(db_err)?;

        Ok(CreatedRequest {
            request,
            submitted_lines,
        })
    }

    /// Submits a draft, reserving stock for every line.
    ///
    /// # Errors
    ///
    /// Returns `NotOwner` for a foreign request, `InvalidTransition` when
    /// the status is not `draft`, and `InsufficientStock` on overdraw.
    /// Any error leaves the draft unchanged.
    pub async fn submit(
        &self,
        request_id: Uuid,
        caller_id: Uuid,
    ) -> Result<CreatedRequest, RequestError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let request = find_locked(&txn, request_id).await?;
        if request.user_id != caller_id {
            return Err(RequestError::NotOwner {
                user_id: caller_id,
                request_id,
            });
        }

        let action = RequestLifecycle::submit(db_status_to_core(&request.status), caller_id)?;
        let old = snapshot(&request)?;

        let details = item_request_details::Entity::find()
            .filter(item_request_details::Column::ItemRequestId.eq(request_id))
            .all(&txn)
            .await
            .map_err(db_err)?;
        RequestLifecycle::validate_lines(
            &details
                .iter()
                .map(|d| RequestLine {
                    product_id: d.product_id,
                    qty: d.requested_quantity,
                })
                .collect::<Vec<_>>(),
        )?;

        let submitted_lines = reserve_stock(&txn, &request, &details).await?;

        let new_status = core_status_to_db(action.new_status());
        set_detail_statuses(&txn, &details, &new_status, false).await?;

        let now = Utc::now().into();
        let mut active: item_requests::ActiveModel = request.into();
        active.status = Set(new_status);
        active.updated_at = Set(now);
        let updated = active.update(&txn).await.map_err(db_err)?;

        insert_log(
            &txn,
            updated.id,
            caller_id,
            action.log_action(),
            Some(old),
            snapshot(&updated)?,
            &action.log_description(),
        )
        .await?;

        txn.commit().await.map_err(db_err)?;

        Ok(CreatedRequest {
            request: updated,
            submitted_lines,
        })
    }

    /// Applies an admin decision: approve, reject, or cancel.
    ///
    /// Approval grants each line in full (`approved_quantity =
    /// requested_quantity`). Cancelling an approved request restores stock
    /// per approved line before the status change.
    ///
    /// # Errors
    ///
    /// Returns `AdminRequired` without the capability, or
    /// `InvalidTransition` when the target is not reachable.
    pub async fn update_status(
        &self,
        request_id: Uuid,
        admin_id: Uuid,
        can_approve: bool,
        new_status: RequestStatus,
        admin_note: Option<String>,
    ) -> Result<item_requests::Model, RequestError> {
        if !can_approve {
            return Err(RequestError::AdminRequired);
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let request = find_locked(&txn, request_id).await?;
        let current = db_status_to_core(&request.status);
        let action = RequestLifecycle::admin_update_status(
            current,
            new_status,
            admin_id,
            admin_note.clone(),
        )?;
        let old = snapshot(&request)?;

        let details = item_request_details::Entity::find()
            .filter(item_request_details::Column::ItemRequestId.eq(request_id))
            .all(&txn)
            .await
            .map_err(db_err)?;

        let db_new = core_status_to_db(new_status);
        let now = Utc::now().into();

        match new_status {
            RequestStatus::Approved => {
                set_detail_statuses(&txn, &details, &db_new, true).await?;
            }
            RequestStatus::Cancelled => {
                if current == RequestStatus::Approved {
                    let plan = RequestLifecycle::restock_on_admin_cancel(&detail_snapshots(&details));
                    restore_stock(&txn, &plan, &request.request_number, "Approved request cancelled")
                        .await?;
                }
                set_detail_statuses(&txn, &details, &db_new, false).await?;
            }
            _ => {
                set_detail_statuses(&txn, &details, &db_new, false).await?;
            }
        }

        let mut active: item_requests::ActiveModel = request.into();
        active.status = Set(db_new);
        active.admin_note = Set(admin_note);
        if new_status == RequestStatus::Approved {
            active.approved_by = Set(Some(admin_id));
            active.approved_at = Set(Some(now));
        }
        active.updated_at = Set(now);
        let updated = active.update(&txn).await.map_err(db_err)?;

        insert_log(
            &txn,
            updated.id,
            admin_id,
            action.log_action(),
            Some(old),
            snapshot(&updated)?,
            &action.log_description(),
        )
        .await?;

        txn.commit().await.map_err(db_err)?;
        Ok(updated)
    }

    /// Cancels a request on behalf of its owner, restoring stock by each
    /// line's requested quantity.
    ///
    /// # Errors
    ///
    /// Returns `NotOwner` for a foreign request and `InvalidTransition`
    /// from a terminal state.
    pub async fn cancel(
        &self,
        request_id: Uuid,
        caller_id: Uuid,
    ) -> Result<item_requests::Model, RequestError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let request = find_locked(&txn, request_id).await?;
        let action = RequestLifecycle::cancel(
            db_status_to_core(&request.status),
            request_id,
            request.user_id,
            caller_id,
        )?;
        let old = snapshot(&request)?;

        let details = item_request_details::Entity::find()
            .filter(item_request_details::Column::ItemRequestId.eq(request_id))
            .all(&txn)
            .await
            .map_err(db_err)?;

        let plan = RequestLifecycle::restock_on_cancel(&detail_snapshots(&details));
        restore_stock(&txn, &plan, &request.request_number, "Request cancelled by user").await?;

        let db_new = core_status_to_db(RequestStatus::Cancelled);
        set_detail_statuses(&txn, &details, &db_new, false).await?;

        let mut active: item_requests::ActiveModel = request.into();
        active.status = Set(db_new);
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await.map_err(db_err)?;

        insert_log(
            &txn,
            updated.id,
            caller_id,
            action.log_action(),
            Some(old),
            snapshot(&updated)?,
            &action.log_description(),
        )
        .await?;

        txn.commit().await.map_err(db_err)?;
        Ok(updated)
    }

    /// Deletes a request. If it is currently approved, stock is restored
    /// per approved line first. Details and logs go with it by cascade.
    ///
    /// # Errors
    ///
    /// Returns `AdminRequired` without the capability and `RequestNotFound`
    /// for an unknown ID.
    pub async fn delete(&self, request_id: Uuid, can_approve: bool) -> Result<(), RequestError> {
        if !can_approve {
            return Err(RequestError::AdminRequired);
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let request = find_locked(&txn, request_id).await?;

        if db_status_to_core(&request.status) == RequestStatus::Approved {
            let details = item_request_details::Entity::find()
                .filter(item_request_details::Column::ItemRequestId.eq(request_id))
                .all(&txn)
                .await
                .map_err(db_err)?;
            let plan = RequestLifecycle::restock_on_admin_cancel(&detail_snapshots(&details));
            restore_stock(&txn, &plan, &request.request_number, "Approved request deleted").await?;
        }

        item_requests::Entity::delete_by_id(request_id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    /// Lists requests visible to the caller. Non-admins see only their
    /// own.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn list(
        &self,
        viewer_id: Uuid,
        sees_all: bool,
        filter: &RequestFilter,
        page: &PageRequest,
    ) -> Result<(Vec<RequestView>, u64), RequestError> {
        let mut query = item_requests::Entity::find();

        if !sees_all {
            query = query.filter(item_requests::Column::UserId.eq(viewer_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(item_requests::Column::Status.eq(core_status_to_db(status)));
        }
        if let Some(term) = &filter.search {
            let pattern = format!("%{term}%");
            let matching_users: Vec<Uuid> = users::Entity::find()
                .filter(users::Column::Name.like(pattern.clone()))
                .all(&self.db)
                .await
                .map_err(db_err)?
                .into_iter()
                .map(|u| u.id)
                .collect();
            query = query.filter(
                item_requests::Column::RequestNumber
                    .like(pattern)
                    .or(item_requests::Column::UserId.is_in(matching_users)),
            );
        }

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let rows = query
            .find_also_related(users::Entity)
            .order_by_desc(item_requests::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let views = rows
            .into_iter()
            .map(|(request, user)| RequestView { request, user })
            .collect();

        Ok((views, total))
    }

    /// Loads one request with owner, detail lines, and audit trail.
    ///
    /// # Errors
    ///
    /// Returns `RequestNotFound` for an unknown ID and `NotOwner` when a
    /// non-admin views someone else's request.
    pub async fn show(
        &self,
        request_id: Uuid,
        viewer_id: Uuid,
        sees_all: bool,
    ) -> Result<RequestDetailView, RequestError> {
        let (request, user) = item_requests::Entity::find_by_id(request_id)
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(RequestError::RequestNotFound(request_id))?;

        if !sees_all && request.user_id != viewer_id {
            return Err(RequestError::NotOwner {
                user_id: viewer_id,
                request_id,
            });
        }

        let details = item_request_details::Entity::find()
            .filter(item_request_details::Column::ItemRequestId.eq(request_id))
            .find_also_related(products::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let logs = item_request_logs::Entity::find()
            .filter(item_request_logs::Column::ItemRequestId.eq(request_id))
            .order_by_asc(item_request_logs::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(RequestDetailView {
            request,
            user,
            details,
            logs,
        })
    }

    /// Aggregates request counts, globally for admins or scoped to the
    /// caller's own rows otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn stats(&self, viewer_id: Uuid, sees_all: bool) -> Result<RequestStats, RequestError> {
        let scope = |mut query: sea_orm::Select<item_requests::Entity>| {
            if !sees_all {
                query = query.filter(item_requests::Column::UserId.eq(viewer_id));
            }
            query
        };

        let total = scope(item_requests::Entity::find())
            .count(&self.db)
            .await
            .map_err(db_err)?;
        let pending = scope(item_requests::Entity::find())
            .filter(item_requests::Column::Status.eq(DbRequestStatus::Pending))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        let approved = scope(item_requests::Entity::find())
            .filter(item_requests::Column::Status.eq(DbRequestStatus::Approved))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        let cancelled = scope(item_requests::Entity::find())
            .filter(item_requests::Column::Status.eq(DbRequestStatus::Cancelled))
            .count(&self.db)
            .await
            .map_err(db_err)?;

        let mut sums = item_request_details::Entity::find();
        if !sees_all {
            sums = sums
                .join(
                    JoinType::InnerJoin,
                    item_request_details::Relation::ItemRequests.def(),
                )
                .filter(item_requests::Column::UserId.eq(viewer_id));
        }
        let quantities: Option<(Option<i64>, Option<i64>)> = sums
            .select_only()
            .column_as(
                item_request_details::Column::RequestedQuantity.sum(),
                "requested",
            )
            .column_as(
                item_request_details::Column::ApprovedQuantity.sum(),
                "approved",
            )
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let (requested, approved_qty) = quantities.unwrap_or((None, None));

        Ok(RequestStats {
            total,
            pending,
            approved,
            cancelled,
            total_requested_quantity: requested.unwrap_or(0),
            total_approved_quantity: approved_qty.unwrap_or(0),
        })
    }
}

/// Fetches a request under an exclusive row lock.
async fn find_locked(
    txn: &DatabaseTransaction,
    request_id: Uuid,
) -> Result<item_requests::Model, RequestError> {
    item_requests::Entity::find_by_id(request_id)
        .lock_exclusive()
        .one(txn)
        .await
        .map_err(db_err)?
        .ok_or(RequestError::RequestNotFound(request_id))
}

/// Decrements stock for every detail line, writing one `out` movement
/// each. Products are locked so the sufficiency check and the decrement
/// share one locking scope.
async fn reserve_stock(
    txn: &DatabaseTransaction,
    request: &item_requests::Model,
    details: &[item_request_details::Model],
) -> Result<Vec<(String, i32)>, RequestError> {
    let now = Utc::now().into();
    let mut lines = Vec::with_capacity(details.len());

    for detail in details {
        let product = products::Entity::find_by_id(detail.product_id)
            .lock_exclusive()
            .one(txn)
            .await
            .map_err(db_err)?
            .ok_or(RequestError::ProductNotFound(detail.product_id))?;

        if detail.requested_quantity > product.stock_quantity {
            return Err(RequestError::InsufficientStock {
                product_name: product.name,
                available: product.stock_quantity,
                requested: detail.requested_quantity,
            });
        }

        let change = StockLedger::apply(
            product.stock_quantity,
            MovementType::Out,
            detail.requested_quantity,
        )
        .map_err(|e| RequestError::Database(e.to_string()))?;
        let status = StockStatus::determine(change.current, product.min_stock_level);
        let product_name = product.name.clone();

        let mut active: products::ActiveModel = product.into();
        active.stock_quantity = Set(change.current);
        active.status = Set(stock_status_to_db(status));
        active.updated_at = Set(now);
        active.update(txn).await.map_err(db_err)?;

        let movement = stock_movements::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(detail.product_id),
            movement_type: Set(movement_type_to_db(MovementType::Out)),
            quantity: Set(detail.requested_quantity),
            previous_stock: Set(change.previous),
            current_stock: Set(change.current),
            reference: Set(Some(request.request_number.clone())),
            notes: Set(Some("Item request submission".to_string())),
            created_at: Set(now),
        };
        movement.insert(txn).await.map_err(db_err)?;

        lines.push((product_name, detail.requested_quantity));
    }

    Ok(lines)
}

/// Increments stock per restock entry, writing one `in` movement each.
async fn restore_stock(
    txn: &DatabaseTransaction,
    plan: &[RestockEntry],
    reference: &str,
    notes: &str,
) -> Result<(), RequestError> {
    let now = Utc::now().into();

    for entry in plan {
        let product = products::Entity::find_by_id(entry.product_id)
            .lock_exclusive()
            .one(txn)
            .await
            .map_err(db_err)?
            .ok_or(RequestError::ProductNotFound(entry.product_id))?;

        let change = StockLedger::apply(product.stock_quantity, MovementType::In, entry.quantity)
            .map_err(|e| RequestError::Database(e.to_string()))?;
        let status = StockStatus::determine(change.current, product.min_stock_level);

        let mut active: products::ActiveModel = product.into();
        active.stock_quantity = Set(change.current);
        active.status = Set(stock_status_to_db(status));
        active.updated_at = Set(now);
        active.update(txn).await.map_err(db_err)?;

        let movement = stock_movements::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(entry.product_id),
            movement_type: Set(movement_type_to_db(MovementType::In)),
            quantity: Set(entry.quantity),
            previous_stock: Set(change.previous),
            current_stock: Set(change.current),
            reference: Set(Some(reference.to_string())),
            notes: Set(Some(notes.to_string())),
            created_at: Set(now),
        };
        movement.insert(txn).await.map_err(db_err)?;
    }

    Ok(())
}

/// Moves every detail to `status`; with `grant_full`, also sets
/// `approved_quantity = requested_quantity` per line.
async fn set_detail_statuses(
    txn: &DatabaseTransaction,
    details: &[item_request_details::Model],
    status: &DbRequestStatus,
    grant_full: bool,
) -> Result<(), RequestError> {
    let now = Utc::now().into();

    for detail in details {
        let requested = detail.requested_quantity;
        let mut active: item_request_details::ActiveModel = detail.clone().into();
        active.status = Set(status.clone());
        if grant_full {
            active.approved_quantity = Set(requested);
        }
        active.updated_at = Set(now);
        active.update(txn).await.map_err(db_err)?;
    }

    Ok(())
}

/// Appends one audit-log row.
async fn insert_log(
    txn: &DatabaseTransaction,
    request_id: Uuid,
    user_id: Uuid,
    action: &str,
    old_data: Option<serde_json::Value>,
    new_data: serde_json::Value,
    description: &str,
) -> Result<(), RequestError> {
    let log = item_request_logs::ActiveModel {
        id: Set(Uuid::new_v4()),
        item_request_id: Set(request_id),
        user_id: Set(user_id),
        action: Set(action.to_string()),
        old_data: Set(old_data),
        new_data: Set(new_data),
        description: Set(Some(description.to_string())),
        created_at: Set(Utc::now().into()),
    };
    log.insert(txn).await.map_err(db_err)?;
    Ok(())
}

/// Allocates the next `REQ-YYYYMMDD-NNN` number; the sequence restarts
/// each day. Uniqueness is enforced by the column constraint.
async fn next_request_number(
    txn: &DatabaseTransaction,
    now: chrono::DateTime<Utc>,
) -> Result<String, RequestError> {
    let prefix = format!("REQ-{}-", now.format("%Y%m%d"));

    let last = item_requests::Entity::find()
        .filter(item_requests::Column::RequestNumber.like(format!("{prefix}%")))
        .order_by_desc(item_requests::Column::RequestNumber)
        .one(txn)
        .await
        .map_err(db_err)?
        .map(|r| r.request_number);

    Ok(RequestLifecycle::next_request_number(last.as_deref(), now))
}

/// Converts detail rows into the core snapshot type used by restock
/// planning.
fn detail_snapshots(details: &[item_request_details::Model]) -> Vec<DetailSnapshot> {
    details
        .iter()
        .map(|d| DetailSnapshot {
            product_id: d.product_id,
            requested_quantity: d.requested_quantity,
            approved_quantity: d.approved_quantity,
            status: db_status_to_core(&d.status),
        })
        .collect()
}

/// Serializes a request row for the audit log.
fn snapshot(request: &item_requests::Model) -> Result<serde_json::Value, RequestError> {
    serde_json::to_value(request).map_err(|e| RequestError::Database(e.to_string()))
}

fn db_err(e: sea_orm::DbErr) -> RequestError {
    RequestError::Database(e.to_string())
}

/// Maps a database status onto the core enum.
pub(crate) const fn db_status_to_core(status: &DbRequestStatus) -> RequestStatus {
    match status {
        DbRequestStatus::Draft => RequestStatus::Draft,
        DbRequestStatus::Pending => RequestStatus::Pending,
        DbRequestStatus::Approved => RequestStatus::Approved,
        DbRequestStatus::Rejected => RequestStatus::Rejected,
        DbRequestStatus::PartiallyApproved => RequestStatus::PartiallyApproved,
        DbRequestStatus::Completed => RequestStatus::Completed,
        DbRequestStatus::Cancelled => RequestStatus::Cancelled,
    }
}

/// Maps a core status onto the database enum.
pub(crate) const fn core_status_to_db(status: RequestStatus) -> DbRequestStatus {
    match status {
        RequestStatus::Draft => DbRequestStatus::Draft,
        RequestStatus::Pending => DbRequestStatus::Pending,
        RequestStatus::Approved => DbRequestStatus::Approved,
        RequestStatus::Rejected => DbRequestStatus::Rejected,
        RequestStatus::PartiallyApproved => DbRequestStatus::PartiallyApproved,
        RequestStatus::Completed => DbRequestStatus::Completed,
        RequestStatus::Cancelled => DbRequestStatus::Cancelled,
    }
}

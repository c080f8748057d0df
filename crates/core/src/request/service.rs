//! State transition and validation logic for item requests.
//!
//! `RequestLifecycle` validates transitions and inputs before any
//! persistence happens; the repository layer executes the resulting
//! `LifecycleAction` inside a single database transaction.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::request::error::RequestError;
use crate::request::types::{LifecycleAction, RequestLine, RequestStatus};

/// Snapshot of a detail line used to compute restock plans.
#[derive(Debug, Clone)]
pub struct DetailSnapshot {
    /// The product on this line.
    pub product_id: Uuid,
    /// Quantity the requester asked for.
    pub requested_quantity: i32,
    /// Quantity the admin granted (0 until approval).
    pub approved_quantity: i32,
    /// Line-level status.
    pub status: RequestStatus,
}

/// One stock restoration to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockEntry {
    /// The product to restore.
    pub product_id: Uuid,
    /// Quantity to add back.
    pub quantity: i32,
}

/// Stateless service for item-request lifecycle transitions.
pub struct RequestLifecycle;

impl RequestLifecycle {
    /// Validates request lines: non-empty, quantities >= 1, no duplicate
    /// product within one request.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate_lines(lines: &[RequestLine]) -> Result<(), RequestError> {
        if lines.is_empty() {
            return Err(RequestError::EmptyLines);
        }

        let mut seen = Vec::with_capacity(lines.len());
        for line in lines {
            if line.qty < 1 {
                return Err(RequestError::InvalidQuantity {
                    product_id: line.product_id,
                    qty: line.qty,
                });
            }
            if seen.contains(&line.product_id) {
                return Err(RequestError::DuplicateProduct(line.product_id));
            }
            seen.push(line.product_id);
        }

        Ok(())
    }

    /// Creates a new request as a draft or directly submitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines are invalid.
    pub fn create(
        lines: &[RequestLine],
        submit: bool,
        created_by: Uuid,
    ) -> Result<LifecycleAction, RequestError> {
        Self::validate_lines(lines)?;

        Ok(LifecycleAction::Create {
            new_status: if submit {
                RequestStatus::Pending
            } else {
                RequestStatus::Draft
            },
            created_by,
            created_at: Utc::now(),
        })
    }

    /// Submits a draft for approval.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidTransition` unless the current status
    /// is exactly `Draft`.
    pub fn submit(
        current_status: RequestStatus,
        submitted_by: Uuid,
    ) -> Result<LifecycleAction, RequestError> {
        match current_status {
            RequestStatus::Draft => Ok(LifecycleAction::Submit {
                new_status: RequestStatus::Pending,
                submitted_by,
                submitted_at: Utc::now(),
            }),
            _ => Err(RequestError::InvalidTransition {
                from: current_status,
                to: RequestStatus::Pending,
            }),
        }
    }

    /// Applies an admin decision (approve, reject, or cancel).
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidTransition` if the target is not an
    /// admin-settable status or the transition is not allowed from the
    /// current status.
    pub fn admin_update_status(
        current_status: RequestStatus,
        new_status: RequestStatus,
        updated_by: Uuid,
        admin_note: Option<String>,
    ) -> Result<LifecycleAction, RequestError> {
        let allowed = match new_status {
            RequestStatus::Approved | RequestStatus::Rejected => {
                current_status == RequestStatus::Pending
            }
            RequestStatus::Cancelled => current_status.is_cancellable(),
            _ => false,
        };

        if !allowed {
            return Err(RequestError::InvalidTransition {
                from: current_status,
                to: new_status,
            });
        }

        Ok(LifecycleAction::UpdateStatus {
            new_status,
            updated_by,
            updated_at: Utc::now(),
            admin_note,
        })
    }

    /// Cancels a request on behalf of its owner.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::NotOwner` if the caller does not own the
    /// request, or `RequestError::InvalidTransition` from a terminal state.
    pub fn cancel(
        current_status: RequestStatus,
        request_id: Uuid,
        owner_id: Uuid,
        caller_id: Uuid,
    ) -> Result<LifecycleAction, RequestError> {
        if owner_id != caller_id {
            return Err(RequestError::NotOwner {
                user_id: caller_id,
                request_id,
            });
        }

        if !current_status.is_cancellable() {
            return Err(RequestError::InvalidTransition {
                from: current_status,
                to: RequestStatus::Cancelled,
            });
        }

        Ok(LifecycleAction::Cancel {
            new_status: RequestStatus::Cancelled,
            cancelled_by: caller_id,
            cancelled_at: Utc::now(),
        })
    }

    /// Restock plan for a self-service cancellation.
    ///
    /// Restores every line by its `requested_quantity`, mirroring the
    /// reservation taken at submit time.
    #[must_use]
    pub fn restock_on_cancel(details: &[DetailSnapshot]) -> Vec<RestockEntry> {
        details
            .iter()
            .filter(|d| d.requested_quantity > 0)
            .map(|d| RestockEntry {
                product_id: d.product_id,
                quantity: d.requested_quantity,
            })
            .collect()
    }

    /// Restock plan for an admin cancelling an `approved` request.
    ///
    /// Restores only lines currently `approved`, each by its
    /// `approved_quantity`. Never conflate this with
    /// [`Self::restock_on_cancel`]: the approved quantity is authoritative
    /// once an admin has granted it.
    #[must_use]
    pub fn restock_on_admin_cancel(details: &[DetailSnapshot]) -> Vec<RestockEntry> {
        details
            .iter()
            .filter(|d| d.status == RequestStatus::Approved && d.approved_quantity > 0)
            .map(|d| RestockEntry {
                product_id: d.product_id,
                quantity: d.approved_quantity,
            })
            .collect()
    }

    /// Checks if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Draft → Pending (submit)
    /// - Pending → Approved / Rejected / PartiallyApproved / Completed
    /// - Draft / Pending / Approved → Cancelled
    #[must_use]
    pub fn is_valid_transition(from: RequestStatus, to: RequestStatus) -> bool {
        matches!(
            (from, to),
            (RequestStatus::Draft, RequestStatus::Pending)
                | (
                    RequestStatus::Pending,
                    RequestStatus::Approved
                        | RequestStatus::Rejected
                        | RequestStatus::PartiallyApproved
                        | RequestStatus::Completed
                )
                | (
                    RequestStatus::Draft | RequestStatus::Pending | RequestStatus::Approved,
                    RequestStatus::Cancelled
                )
        )
    }

    /// Formats a request number for the given date and per-day sequence.
    ///
    /// Format: `REQ-YYYYMMDD-NNN`.
    #[must_use]
    pub fn format_request_number(date: NaiveDate, sequence: u32) -> String {
        format!("REQ-{}-{sequence:03}", date.format("%Y%m%d"))
    }

    /// Computes the next request number from the latest one issued today.
    ///
    /// `last_today` is the highest existing number with today's date prefix,
    /// if any; the sequence restarts at 001 each day.
    #[must_use]
    pub fn next_request_number(last_today: Option<&str>, now: DateTime<Utc>) -> String {
        let date = now.date_naive();
        let next_seq = last_today
            .and_then(|n| n.rsplit('-').next())
            .and_then(|seq| seq.parse::<u32>().ok())
            .map_or(1, |seq| seq + 1);

        Self::format_request_number(date, next_seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn line(product_id: Uuid, qty: i32) -> RequestLine {
        RequestLine { product_id, qty }
    }

    #[test]
    fn test_validate_empty_lines() {
        let result = RequestLifecycle::validate_lines(&[]);
        assert!(matches!(result, Err(RequestError::EmptyLines)));
    }

    #[test]
    fn test_validate_zero_quantity() {
        let product = Uuid::new_v4();
        let result = RequestLifecycle::validate_lines(&[line(product, 0)]);
        assert!(matches!(
            result,
            Err(RequestError::InvalidQuantity { qty: 0, .. })
        ));
    }

    #[test]
    fn test_validate_duplicate_product() {
        let product = Uuid::new_v4();
        let result = RequestLifecycle::validate_lines(&[line(product, 2), line(product, 3)]);
        assert!(matches!(result, Err(RequestError::DuplicateProduct(p)) if p == product));
    }

    #[test]
    fn test_validate_ok() {
        let lines = [line(Uuid::new_v4(), 1), line(Uuid::new_v4(), 10)];
        assert!(RequestLifecycle::validate_lines(&lines).is_ok());
    }

    #[test]
    fn test_create_draft_and_submit() {
        let user = Uuid::new_v4();
        let lines = [line(Uuid::new_v4(), 5)];

        let draft = RequestLifecycle::create(&lines, false, user).unwrap();
        assert_eq!(draft.new_status(), RequestStatus::Draft);
        assert_eq!(draft.log_action(), "created_draft");

        let submitted = RequestLifecycle::create(&lines, true, user).unwrap();
        assert_eq!(submitted.new_status(), RequestStatus::Pending);
        assert_eq!(submitted.log_action(), "created_pending");
    }

    #[test]
    fn test_submit_from_draft() {
        let user = Uuid::new_v4();
        let action = RequestLifecycle::submit(RequestStatus::Draft, user).unwrap();
        assert_eq!(action.new_status(), RequestStatus::Pending);
        assert_eq!(action.log_action(), "submitted");
    }

    #[test]
    fn test_submit_twice_fails() {
        let user = Uuid::new_v4();
        let result = RequestLifecycle::submit(RequestStatus::Pending, user);
        assert!(matches!(
            result,
            Err(RequestError::InvalidTransition {
                from: RequestStatus::Pending,
                to: RequestStatus::Pending,
            })
        ));
    }

    #[test]
    fn test_admin_approve_from_pending() {
        let admin = Uuid::new_v4();
        let action = RequestLifecycle::admin_update_status(
            RequestStatus::Pending,
            RequestStatus::Approved,
            admin,
            None,
        )
        .unwrap();
        assert_eq!(action.new_status(), RequestStatus::Approved);
    }

    #[test]
    fn test_admin_approve_from_draft_fails() {
        let admin = Uuid::new_v4();
        let result = RequestLifecycle::admin_update_status(
            RequestStatus::Draft,
            RequestStatus::Approved,
            admin,
            None,
        );
        assert!(matches!(
            result,
            Err(RequestError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_admin_cancel_approved() {
        let admin = Uuid::new_v4();
        let action = RequestLifecycle::admin_update_status(
            RequestStatus::Approved,
            RequestStatus::Cancelled,
            admin,
            Some("over-ordered".to_string()),
        )
        .unwrap();
        assert_eq!(action.new_status(), RequestStatus::Cancelled);
        assert_eq!(action.log_action(), "status_updated");
    }

    #[test]
    fn test_admin_cannot_set_arbitrary_status() {
        let admin = Uuid::new_v4();
        let result = RequestLifecycle::admin_update_status(
            RequestStatus::Pending,
            RequestStatus::Draft,
            admin,
            None,
        );
        assert!(matches!(
            result,
            Err(RequestError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_cancel_requires_ownership() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let request_id = Uuid::new_v4();

        let result =
            RequestLifecycle::cancel(RequestStatus::Pending, request_id, owner, stranger);
        assert!(matches!(result, Err(RequestError::NotOwner { .. })));

        let ok = RequestLifecycle::cancel(RequestStatus::Pending, request_id, owner, owner);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_cancel_terminal_fails() {
        let owner = Uuid::new_v4();
        let request_id = Uuid::new_v4();
        let result =
            RequestLifecycle::cancel(RequestStatus::Cancelled, request_id, owner, owner);
        assert!(matches!(
            result,
            Err(RequestError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_restock_on_cancel_uses_requested_quantity() {
        let product = Uuid::new_v4();
        let details = [DetailSnapshot {
            product_id: product,
            requested_quantity: 10,
            approved_quantity: 8,
            status: RequestStatus::Approved,
        }];

        let plan = RequestLifecycle::restock_on_cancel(&details);
        assert_eq!(
            plan,
            vec![RestockEntry {
                product_id: product,
                quantity: 10
            }]
        );
    }

    #[test]
    fn test_restock_on_admin_cancel_uses_approved_quantity() {
        let approved = Uuid::new_v4();
        let pending = Uuid::new_v4();
        let details = [
            DetailSnapshot {
                product_id: approved,
                requested_quantity: 10,
                approved_quantity: 8,
                status: RequestStatus::Approved,
            },
            DetailSnapshot {
                product_id: pending,
                requested_quantity: 4,
                approved_quantity: 0,
                status: RequestStatus::Pending,
            },
        ];

        let plan = RequestLifecycle::restock_on_admin_cancel(&details);
        assert_eq!(
            plan,
            vec![RestockEntry {
                product_id: approved,
                quantity: 8
            }]
        );
    }

    #[test]
    fn test_is_valid_transition() {
        assert!(RequestLifecycle::is_valid_transition(
            RequestStatus::Draft,
            RequestStatus::Pending
        ));
        assert!(RequestLifecycle::is_valid_transition(
            RequestStatus::Pending,
            RequestStatus::Approved
        ));
        assert!(RequestLifecycle::is_valid_transition(
            RequestStatus::Approved,
            RequestStatus::Cancelled
        ));

        assert!(!RequestLifecycle::is_valid_transition(
            RequestStatus::Draft,
            RequestStatus::Approved
        ));
        assert!(!RequestLifecycle::is_valid_transition(
            RequestStatus::Cancelled,
            RequestStatus::Pending
        ));
        assert!(!RequestLifecycle::is_valid_transition(
            RequestStatus::Rejected,
            RequestStatus::Cancelled
        ));
    }

    #[test]
    fn test_request_number_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        assert_eq!(
            RequestLifecycle::format_request_number(date, 1),
            "REQ-20260815-001"
        );
        assert_eq!(
            RequestLifecycle::format_request_number(date, 42),
            "REQ-20260815-042"
        );
    }

    #[test]
    fn test_next_request_number() {
        let now = Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap();

        assert_eq!(
            RequestLifecycle::next_request_number(None, now),
            "REQ-20260815-001"
        );
        assert_eq!(
            RequestLifecycle::next_request_number(Some("REQ-20260815-007"), now),
            "REQ-20260815-008"
        );
        assert_eq!(
            RequestLifecycle::next_request_number(Some("REQ-20260815-099"), now),
            "REQ-20260815-100"
        );
    }
}

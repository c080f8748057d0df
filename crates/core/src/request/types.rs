//! Domain types for the item-request lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Status of an item request (and of its detail lines).
///
/// Requests progress through these states from creation to completion.
/// The valid transitions are:
/// - Draft → Pending (submit)
/// - Pending → Approved / Rejected / PartiallyApproved / Completed (admin)
/// - Draft / Pending / Approved → Cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Saved without committing stock or triggering notifications.
    Draft,
    /// Submitted; stock is reserved, waiting for an admin decision.
    Pending,
    /// Approved in full by an admin.
    Approved,
    /// Rejected by an admin (terminal).
    Rejected,
    /// Some lines approved at a reduced quantity.
    PartiallyApproved,
    /// Fulfilled and closed (terminal).
    Completed,
    /// Withdrawn by the requester or an admin (terminal).
    Cancelled,
}

impl RequestStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::PartiallyApproved => "partially_approved",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "partially_approved" => Some(Self::PartiallyApproved),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true if no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Completed | Self::Cancelled)
    }

    /// Returns true if the requester may still cancel the request.
    #[must_use]
    pub const fn is_cancellable(&self) -> bool {
        matches!(self, Self::Draft | Self::Pending | Self::Approved)
    }

    /// Returns true if stock has been reserved for this request.
    ///
    /// Drafts never touch stock; every other non-terminal state holds a
    /// reservation made at submit time.
    #[must_use]
    pub const fn holds_reservation(&self) -> bool {
        matches!(self, Self::Pending | Self::Approved | Self::PartiallyApproved)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One requested product line, as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLine {
    /// The requested product.
    pub product_id: Uuid,
    /// Requested quantity (must be >= 1).
    pub qty: i32,
}

/// A validated state transition with audit trail information.
///
/// Each variant captures the resulting status, the audit-log action tag,
/// and who performed the transition.
#[derive(Debug, Clone)]
pub enum LifecycleAction {
    /// Create a new request as a draft or directly submitted.
    Create {
        /// The initial status (Draft or Pending).
        new_status: RequestStatus,
        /// The requesting user.
        created_by: Uuid,
        /// When the request was created.
        created_at: DateTime<Utc>,
    },
    /// Submit a draft, reserving stock.
    Submit {
        /// The new status after submission (Pending).
        new_status: RequestStatus,
        /// The user who submitted the request.
        submitted_by: Uuid,
        /// When the request was submitted.
        submitted_at: DateTime<Utc>,
    },
    /// Admin decision on a submitted request.
    UpdateStatus {
        /// The new status (Approved, Rejected, or Cancelled).
        new_status: RequestStatus,
        /// The admin who made the decision.
        updated_by: Uuid,
        /// When the decision was made.
        updated_at: DateTime<Utc>,
        /// Optional note from the admin.
        admin_note: Option<String>,
    },
    /// Self-service cancellation by the owner.
    Cancel {
        /// The new status (Cancelled).
        new_status: RequestStatus,
        /// The user who cancelled the request.
        cancelled_by: Uuid,
        /// When the request was cancelled.
        cancelled_at: DateTime<Utc>,
    },
}

impl LifecycleAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> RequestStatus {
        match self {
            Self::Create { new_status, .. }
            | Self::Submit { new_status, .. }
            | Self::UpdateStatus { new_status, .. }
            | Self::Cancel { new_status, .. } => *new_status,
        }
    }

    /// Returns the audit-log action tag for this transition.
    #[must_use]
    pub fn log_action(&self) -> &'static str {
        match self {
            Self::Create { new_status, .. } => {
                if *new_status == RequestStatus::Pending {
                    "created_pending"
                } else {
                    "created_draft"
                }
            }
            Self::Submit { .. } => "submitted",
            Self::UpdateStatus { .. } => "status_updated",
            Self::Cancel { .. } => "cancelled",
        }
    }

    /// Returns a human-readable description for the audit log.
    #[must_use]
    pub fn log_description(&self) -> String {
        match self {
            Self::Create { new_status, .. } => {
                if *new_status == RequestStatus::Pending {
                    "Request created and waiting for approval".to_string()
                } else {
                    "Request saved as draft".to_string()
                }
            }
            Self::Submit { .. } => "Draft submitted and stock reserved".to_string(),
            Self::UpdateStatus { new_status, .. } => {
                format!("Request status changed to {new_status} by admin")
            }
            Self::Cancel { .. } => "Request cancelled by user".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            RequestStatus::Draft,
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
            RequestStatus::PartiallyApproved,
            RequestStatus::Completed,
            RequestStatus::Cancelled,
        ] {
            assert_eq!(RequestStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(RequestStatus::parse("invalid"), None);
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(
            RequestStatus::parse("PENDING"),
            Some(RequestStatus::Pending)
        );
        assert_eq!(
            RequestStatus::parse("Partially_Approved"),
            Some(RequestStatus::PartiallyApproved)
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(RequestStatus::Rejected.is_terminal());
        assert!(RequestStatus::Completed.is_terminal());
        assert!(RequestStatus::Cancelled.is_terminal());
        assert!(!RequestStatus::Draft.is_terminal());
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(!RequestStatus::Approved.is_terminal());
    }

    #[test]
    fn test_cancellable_states() {
        assert!(RequestStatus::Draft.is_cancellable());
        assert!(RequestStatus::Pending.is_cancellable());
        assert!(RequestStatus::Approved.is_cancellable());
        assert!(!RequestStatus::Rejected.is_cancellable());
        assert!(!RequestStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_reservation_states() {
        assert!(!RequestStatus::Draft.holds_reservation());
        assert!(RequestStatus::Pending.holds_reservation());
        assert!(RequestStatus::Approved.holds_reservation());
        assert!(!RequestStatus::Cancelled.holds_reservation());
    }

    #[test]
    fn test_log_action_tags() {
        let user = Uuid::new_v4();
        let create_draft = LifecycleAction::Create {
            new_status: RequestStatus::Draft,
            created_by: user,
            created_at: Utc::now(),
        };
        assert_eq!(create_draft.log_action(), "created_draft");

        let create_pending = LifecycleAction::Create {
            new_status: RequestStatus::Pending,
            created_by: user,
            created_at: Utc::now(),
        };
        assert_eq!(create_pending.log_action(), "created_pending");

        let cancel = LifecycleAction::Cancel {
            new_status: RequestStatus::Cancelled,
            cancelled_by: user,
            cancelled_at: Utc::now(),
        };
        assert_eq!(cancel.log_action(), "cancelled");
        assert_eq!(cancel.new_status(), RequestStatus::Cancelled);
    }
}

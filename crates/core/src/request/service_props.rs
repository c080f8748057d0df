//! Property-based tests for the request lifecycle.
//!
//! These tests validate the transition rules and restock-plan invariants
//! across randomly generated statuses, lines, and detail snapshots.

use proptest::prelude::*;
use uuid::Uuid;

use crate::request::error::RequestError;
use crate::request::service::{DetailSnapshot, RequestLifecycle};
use crate::request::types::{RequestLine, RequestStatus};

/// Strategy for generating random request statuses.
fn arb_status() -> impl Strategy<Value = RequestStatus> {
    prop_oneof![
        Just(RequestStatus::Draft),
        Just(RequestStatus::Pending),
        Just(RequestStatus::Approved),
        Just(RequestStatus::Rejected),
        Just(RequestStatus::PartiallyApproved),
        Just(RequestStatus::Completed),
        Just(RequestStatus::Cancelled),
    ]
}

/// Strategy for generating a list of lines with distinct products.
fn arb_valid_lines() -> impl Strategy<Value = Vec<RequestLine>> {
    prop::collection::vec(1i32..1000, 1..8).prop_map(|qtys| {
        qtys.into_iter()
            .map(|qty| RequestLine {
                product_id: Uuid::new_v4(),
                qty,
            })
            .collect()
    })
}

/// Strategy for generating random detail snapshots.
fn arb_details() -> impl Strategy<Value = Vec<DetailSnapshot>> {
    prop::collection::vec(
        (1i32..1000, 0i32..1000, arb_status()),
        0..8,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(requested, approved, status)| DetailSnapshot {
                product_id: Uuid::new_v4(),
                requested_quantity: requested,
                approved_quantity: approved.min(requested),
                status,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Submit succeeds from draft and from nothing else.
    #[test]
    fn prop_submit_only_from_draft(status in arb_status()) {
        let user = Uuid::new_v4();
        let result = RequestLifecycle::submit(status, user);
        prop_assert_eq!(result.is_ok(), status == RequestStatus::Draft);
    }

    /// Terminal states admit no outgoing transition.
    #[test]
    fn prop_terminal_states_are_final(from in arb_status(), to in arb_status()) {
        if from.is_terminal() {
            prop_assert!(!RequestLifecycle::is_valid_transition(from, to));
        }
    }

    /// Self-transitions are never valid.
    #[test]
    fn prop_no_self_transition(status in arb_status()) {
        prop_assert!(!RequestLifecycle::is_valid_transition(status, status));
    }

    /// Admin decisions agree with the transition table.
    #[test]
    fn prop_admin_update_matches_transition_table(
        from in arb_status(),
        to in arb_status(),
    ) {
        let admin = Uuid::new_v4();
        let result = RequestLifecycle::admin_update_status(from, to, admin, None);

        let admin_settable = matches!(
            to,
            RequestStatus::Approved | RequestStatus::Rejected | RequestStatus::Cancelled
        );
        let expected = admin_settable && RequestLifecycle::is_valid_transition(from, to);
        prop_assert_eq!(result.is_ok(), expected);
    }

    /// Valid lines always pass validation, and a duplicated product always fails.
    #[test]
    fn prop_line_validation(lines in arb_valid_lines()) {
        prop_assert!(RequestLifecycle::validate_lines(&lines).is_ok());

        let mut with_dup = lines.clone();
        with_dup.push(RequestLine {
            product_id: lines[0].product_id,
            qty: 1,
        });
        prop_assert!(matches!(
            RequestLifecycle::validate_lines(&with_dup),
            Err(RequestError::DuplicateProduct(_))
        ));
    }

    /// Self-cancel restores exactly the requested quantities, one entry per line.
    #[test]
    fn prop_cancel_restores_requested(details in arb_details()) {
        let plan = RequestLifecycle::restock_on_cancel(&details);

        let expected_total: i64 = details
            .iter()
            .map(|d| i64::from(d.requested_quantity))
            .sum();
        let plan_total: i64 = plan.iter().map(|e| i64::from(e.quantity)).sum();

        prop_assert_eq!(plan_total, expected_total);
        prop_assert!(plan.iter().all(|e| e.quantity > 0));
    }

    /// Admin-cancel restores only approved lines, by approved quantity.
    #[test]
    fn prop_admin_cancel_restores_approved_only(details in arb_details()) {
        let plan = RequestLifecycle::restock_on_admin_cancel(&details);

        let expected_total: i64 = details
            .iter()
            .filter(|d| d.status == RequestStatus::Approved)
            .map(|d| i64::from(d.approved_quantity))
            .sum();
        let plan_total: i64 = plan.iter().map(|e| i64::from(e.quantity)).sum();

        prop_assert_eq!(plan_total, expected_total);
        prop_assert!(plan.len() <= details.len());
    }

    /// Request numbers for any day and sequence keep the fixed shape.
    #[test]
    fn prop_request_number_shape(seq in 1u32..999) {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let number = RequestLifecycle::format_request_number(date, seq);

        prop_assert!(number.starts_with("REQ-20260115-"));
        prop_assert_eq!(number.len(), "REQ-20260115-000".len());
    }
}

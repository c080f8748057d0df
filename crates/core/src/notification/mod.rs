//! Notification decisions.
//!
//! The email settings row is loaded explicitly and passed in here; these
//! functions only decide whether to notify and whom, leaving transport to
//! the email service.

use serde::{Deserialize, Serialize};

/// Administrator-managed notification settings.
///
/// Mirrors the singleton `email_settings` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Primary recipient for system notifications.
    pub admin_email: String,
    /// Additional CC recipients.
    pub cc_emails: Vec<String>,
    /// Whether item-request notifications are enabled.
    pub request_notifications: bool,
    /// Whether low-stock notifications are enabled.
    pub low_stock_notifications: bool,
    /// Quantity at or below which low-stock alerts fire.
    pub low_stock_threshold: i32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            admin_email: String::new(),
            cc_emails: Vec::new(),
            request_notifications: true,
            low_stock_notifications: true,
            low_stock_threshold: 10,
        }
    }
}

/// Recipients for one outgoing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipients {
    /// The primary addressee.
    pub to: String,
    /// CC addressees.
    pub cc: Vec<String>,
}

impl NotificationSettings {
    /// Decides whether a request-submitted notification should go out.
    ///
    /// Returns `None` when request notifications are disabled or no admin
    /// email is configured; the submission itself always succeeds either way.
    #[must_use]
    pub fn request_created_recipients(&self) -> Option<Recipients> {
        if !self.request_notifications || self.admin_email.trim().is_empty() {
            return None;
        }

        Some(Recipients {
            to: self.admin_email.clone(),
            cc: self.cc_emails.clone(),
        })
    }

    /// Decides whether a low-stock alert should go out for a product that
    /// just dropped to `stock_quantity`.
    #[must_use]
    pub fn low_stock_recipients(&self, stock_quantity: i32) -> Option<Recipients> {
        if !self.low_stock_notifications
            || self.admin_email.trim().is_empty()
            || stock_quantity > self.low_stock_threshold
        {
            return None;
        }

        Some(Recipients {
            to: self.admin_email.clone(),
            cc: self.cc_emails.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> NotificationSettings {
        NotificationSettings {
            admin_email: "admin@example.com".to_string(),
            cc_emails: vec!["ops@example.com".to_string()],
            ..NotificationSettings::default()
        }
    }

    #[test]
    fn test_request_created_enabled() {
        let recipients = settings().request_created_recipients().unwrap();
        assert_eq!(recipients.to, "admin@example.com");
        assert_eq!(recipients.cc, vec!["ops@example.com".to_string()]);
    }

    #[test]
    fn test_request_created_disabled() {
        let mut s = settings();
        s.request_notifications = false;
        assert!(s.request_created_recipients().is_none());
    }

    #[test]
    fn test_request_created_no_admin_email() {
        let mut s = settings();
        s.admin_email = "  ".to_string();
        assert!(s.request_created_recipients().is_none());
    }

    #[test]
    fn test_low_stock_threshold_boundary() {
        let s = settings();
        assert!(s.low_stock_recipients(10).is_some());
        assert!(s.low_stock_recipients(0).is_some());
        assert!(s.low_stock_recipients(11).is_none());
    }

    #[test]
    fn test_low_stock_disabled() {
        let mut s = settings();
        s.low_stock_notifications = false;
        assert!(s.low_stock_recipients(1).is_none());
    }

    #[test]
    fn test_defaults() {
        let s = NotificationSettings::default();
        assert_eq!(s.low_stock_threshold, 10);
        assert!(s.request_notifications);
        assert!(s.request_created_recipients().is_none());
    }
}

//! Email settings repository.
//!
//! The settings live in a single row created on first read, then loaded
//! explicitly and handed to the notification decision logic.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use inventopia_core::notification::NotificationSettings;

use crate::entities::email_settings;

/// Input for updating the settings row. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct EmailSettingsUpdate {
    /// New primary recipient.
    pub admin_email: Option<String>,
    /// New CC list.
    pub cc_emails: Option<Vec<String>>,
    /// Toggle for item-request notifications.
    pub request_notifications: Option<bool>,
    /// Toggle for low-stock notifications.
    pub low_stock_notifications: Option<bool>,
    /// New low-stock alert threshold.
    pub low_stock_threshold: Option<i32>,
}

/// Email settings repository.
#[derive(Debug, Clone)]
pub struct EmailSettingsRepository {
    db: DatabaseConnection,
}

impl EmailSettingsRepository {
    /// Creates a new email settings repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the settings row, creating it with defaults on first read.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or insert fails.
    pub async fn get_or_create(&self) -> Result<email_settings::Model, DbErr> {
        if let Some(existing) = email_settings::Entity::find().one(&self.db).await? {
            return Ok(existing);
        }

        let defaults = NotificationSettings::default();
        let now = chrono::Utc::now().into();
        let row = email_settings::ActiveModel {
            id: Set(Uuid::new_v4()),
            admin_email: Set(defaults.admin_email),
            cc_emails: Set(serde_json::json!([])),
            request_notifications: Set(defaults.request_notifications),
            low_stock_notifications: Set(defaults.low_stock_notifications),
            low_stock_threshold: Set(defaults.low_stock_threshold),
            created_at: Set(now),
            updated_at: Set(now),
        };

        row.insert(&self.db).await
    }

    /// Updates the settings row, creating it first if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails.
    pub async fn update(
        &self,
        input: EmailSettingsUpdate,
    ) -> Result<email_settings::Model, DbErr> {
        let current = self.get_or_create().await?;

        let mut active: email_settings::ActiveModel = current.into();
        if let Some(admin_email) = input.admin_email {
            active.admin_email = Set(admin_email);
        }
        if let Some(cc_emails) = input.cc_emails {
            active.cc_emails = Set(serde_json::json!(cc_emails));
        }
        if let Some(request_notifications) = input.request_notifications {
            active.request_notifications = Set(request_notifications);
        }
        if let Some(low_stock_notifications) = input.low_stock_notifications {
            active.low_stock_notifications = Set(low_stock_notifications);
        }
        if let Some(low_stock_threshold) = input.low_stock_threshold {
            active.low_stock_threshold = Set(low_stock_threshold);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(&self.db).await
    }

    /// Loads the settings as the core notification decision type.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails.
    pub async fn notification_settings(&self) -> Result<NotificationSettings, DbErr> {
        let row = self.get_or_create().await?;
        Ok(to_notification_settings(&row))
    }
}

/// Converts the settings row into the core decision type.
#[must_use]
pub fn to_notification_settings(row: &email_settings::Model) -> NotificationSettings {
    let cc_emails = row
        .cc_emails
        .as_array()
        .map(|values| {
            values
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect()
        })
        .unwrap_or_default();

    NotificationSettings {
        admin_email: row.admin_email.clone(),
        cc_emails,
        request_notifications: row.request_notifications,
        low_stock_notifications: row.low_stock_notifications,
        low_stock_threshold: row.low_stock_threshold,
    }
}

//! User repository for account management operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use inventopia_shared::types::PageRequest;

use crate::entities::{roles, users};

/// Error types for user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// User not found.
    #[error("User {0} not found")]
    NotFound(Uuid),

    /// Email already registered.
    #[error("Email '{0}' is already taken")]
    EmailTaken(String),

    /// Username already registered.
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    /// Referenced role does not exist.
    #[error("Role {0} not found")]
    RoleNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// Display name.
    pub name: String,
    /// Unique username.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role, if any.
    pub role_id: Option<Uuid>,
}

/// Input for updating a user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    /// New display name.
    pub name: Option<String>,
    /// New username.
    pub username: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New role assignment.
    pub role_id: Option<Option<Uuid>>,
}

/// User repository for CRUD and credential operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds a user together with their role.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_with_role(
        &self,
        id: Uuid,
    ) -> Result<Option<(users::Model, Option<roles::Model>)>, DbErr> {
        users::Entity::find_by_id(id)
            .find_also_related(roles::Entity)
            .one(&self.db)
            .await
    }

    /// Lists users with their roles, optionally filtered by a name/email
    /// search term.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> Result<(Vec<(users::Model, Option<roles::Model>)>, u64), DbErr> {
        let mut query = users::Entity::find();

        if let Some(term) = search {
            let pattern = format!("%{term}%");
            query = query.filter(
                users::Column::Name
                    .like(pattern.clone())
                    .or(users::Column::Email.like(pattern.clone()))
                    .or(users::Column::Username.like(pattern)),
            );
        }

        let total = query.clone().count(&self.db).await?;

        let rows = query
            .find_also_related(roles::Entity)
            .order_by_desc(users::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((rows, total))
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns `UserError::EmailTaken` / `UserError::UsernameTaken` on
    /// uniqueness conflicts and `UserError::RoleNotFound` for a dangling
    /// role reference.
    pub async fn create(&self, input: CreateUserInput) -> Result<users::Model, UserError> {
        if self.email_exists(&input.email).await? {
            return Err(UserError::EmailTaken(input.email));
        }
        if self.username_exists(&input.username).await? {
            return Err(UserError::UsernameTaken(input.username));
        }
        if let Some(role_id) = input.role_id {
            if roles::Entity::find_by_id(role_id).one(&self.db).await?.is_none() {
                return Err(UserError::RoleNotFound(role_id));
            }
        }

        let now = chrono::Utc::now().into();
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            username: Set(input.username),
            email: Set(input.email),
            password_hash: Set(input.password_hash),
            is_blocked: Set(false),
            role_id: Set(input.role_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(user.insert(&self.db).await?)
    }

    /// Updates a user's profile fields.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotFound` for an unknown ID or a uniqueness
    /// error if the new email/username is taken by another account.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateUserInput,
    ) -> Result<users::Model, UserError> {
        let user = users::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound(id))?;

        if let Some(email) = &input.email {
            if email != &user.email && self.email_exists(email).await? {
                return Err(UserError::EmailTaken(email.clone()));
            }
        }
        if let Some(username) = &input.username {
            if username != &user.username && self.username_exists(username).await? {
                return Err(UserError::UsernameTaken(username.clone()));
            }
        }

        let mut active: users::ActiveModel = user.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(username) = input.username {
            active.username = Set(username);
        }
        if let Some(email) = input.email {
            active.email = Set(email);
        }
        if let Some(role_id) = input.role_id {
            active.role_id = Set(role_id);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Replaces a user's password hash.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotFound` for an unknown ID.
    pub async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<users::Model, UserError> {
        let user = users::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound(id))?;

        let mut active: users::ActiveModel = user.into();
        active.password_hash = Set(password_hash.to_string());
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Blocks or unblocks a user account. Blocked users cannot log in.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotFound` for an unknown ID.
    pub async fn set_blocked(&self, id: Uuid, blocked: bool) -> Result<users::Model, UserError> {
        let user = users::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound(id))?;

        let mut active: users::ActiveModel = user.into();
        active.is_blocked = Set(blocked);
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns `UserError::NotFound` for an unknown ID.
    pub async fn delete(&self, id: Uuid) -> Result<(), UserError> {
        let result = users::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(UserError::NotFound(id));
        }
        Ok(())
    }

    /// Checks if an email is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// Checks if a username is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }
}

//! Role and permission lookup repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::{permissions, role_permission, roles, users};

/// Read-only repository for roles and permissions.
#[derive(Debug, Clone)]
pub struct PermissionRepository {
    db: DatabaseConnection,
}

impl PermissionRepository {
    /// Creates a new permission repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all permissions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_permissions(&self) -> Result<Vec<permissions::Model>, DbErr> {
        permissions::Entity::find()
            .order_by_asc(permissions::Column::Name)
            .all(&self.db)
            .await
    }

    /// Lists all roles.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_roles(&self) -> Result<Vec<roles::Model>, DbErr> {
        roles::Entity::find()
            .order_by_asc(roles::Column::Name)
            .all(&self.db)
            .await
    }

    /// Finds a role by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<roles::Model>, DbErr> {
        roles::Entity::find()
            .filter(roles::Column::Name.eq(name))
            .one(&self.db)
            .await
    }

    /// Lists the permissions granted to one role.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn role_permissions(&self, role_id: Uuid) -> Result<Vec<permissions::Model>, DbErr> {
        let grants = role_permission::Entity::find()
            .filter(role_permission::Column::RoleId.eq(role_id))
            .all(&self.db)
            .await?;

        let ids: Vec<Uuid> = grants.into_iter().map(|g| g.permission_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        permissions::Entity::find()
            .filter(permissions::Column::Id.is_in(ids))
            .order_by_asc(permissions::Column::Name)
            .all(&self.db)
            .await
    }

    /// Lists the permission names held by one user through their role.
    ///
    /// A user without a role holds no permissions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn user_permissions(&self, user_id: Uuid) -> Result<Vec<String>, DbErr> {
        let Some(user) = users::Entity::find_by_id(user_id).one(&self.db).await? else {
            return Ok(Vec::new());
        };
        let Some(role_id) = user.role_id else {
            return Ok(Vec::new());
        };

        let granted = self.role_permissions(role_id).await?;
        Ok(granted.into_iter().map(|p| p.name).collect())
    }
}

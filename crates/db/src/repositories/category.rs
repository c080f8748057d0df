//! Category repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use inventopia_shared::types::PageRequest;

use crate::entities::categories;
use crate::repositories::slugify;

/// Error types for category operations.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    /// Category not found.
    #[error("Category {0} not found")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating or updating a category.
#[derive(Debug, Clone)]
pub struct CategoryInput {
    /// Display name; the slug is derived from it.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional display color.
    pub color: Option<String>,
    /// Whether the category is selectable for new products.
    pub is_active: bool,
}

/// Category repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a category by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<categories::Model>, DbErr> {
        categories::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists categories, optionally filtered by a name search term.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> Result<(Vec<categories::Model>, u64), DbErr> {
        let mut query = categories::Entity::find();

        if let Some(term) = search {
            query = query.filter(categories::Column::Name.like(format!("%{term}%")));
        }

        let total = query.clone().count(&self.db).await?;
        let rows = query
            .order_by_asc(categories::Column::Name)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((rows, total))
    }

    /// Creates a category, deriving a unique slug from the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CategoryInput) -> Result<categories::Model, CategoryError> {
        let slug = self.unique_slug(&input.name, None).await?;

        let now = chrono::Utc::now().into();
        let category = categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            slug: Set(slug),
            description: Set(input.description),
            color: Set(input.color),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(category.insert(&self.db).await?)
    }

    /// Updates a category, re-deriving the slug when the name changes.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::NotFound` for an unknown ID.
    pub async fn update(
        &self,
        id: Uuid,
        input: CategoryInput,
    ) -> Result<categories::Model, CategoryError> {
        let category = categories::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        let slug = if category.name == input.name {
            category.slug.clone()
        } else {
            self.unique_slug(&input.name, Some(id)).await?
        };

        let mut active: categories::ActiveModel = category.into();
        active.name = Set(input.name);
        active.slug = Set(slug);
        active.description = Set(input.description);
        active.color = Set(input.color);
        active.is_active = Set(input.is_active);
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a category. Products referencing it are removed by cascade.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::NotFound` for an unknown ID.
    pub async fn delete(&self, id: Uuid) -> Result<(), CategoryError> {
        let result = categories::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(CategoryError::NotFound(id));
        }
        Ok(())
    }

    /// Derives a slug from `name`, appending a numeric suffix until unique.
    async fn unique_slug(&self, name: &str, exclude: Option<Uuid>) -> Result<String, DbErr> {
        let base = slugify(name);
        let mut candidate = base.clone();
        let mut counter = 2u32;

        loop {
            let mut query =
                categories::Entity::find().filter(categories::Column::Slug.eq(candidate.clone()));
            if let Some(id) = exclude {
                query = query.filter(categories::Column::Id.ne(id));
            }

            if query.count(&self.db).await? == 0 {
                return Ok(candidate);
            }

            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }
}

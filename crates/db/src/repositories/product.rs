//! Product repository.
//!
//! All stock mutations go through [`ProductRepository::update_stock`],
//! which applies the ledger arithmetic, recomputes the derived status,
//! and appends the immutable movement row in one transaction.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use inventopia_core::stock::{MovementType, StockError, StockLedger, StockStatus};
use inventopia_shared::types::PageRequest;

use crate::entities::{categories, products, sea_orm_active_enums, stock_movements};
use crate::repositories::slugify;

/// Error types for product operations.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// Product not found.
    #[error("Product {0} not found")]
    NotFound(Uuid),

    /// Referenced category does not exist.
    #[error("Category {0} not found")]
    CategoryNotFound(Uuid),

    /// SKU already in use.
    #[error("SKU '{0}' is already taken")]
    SkuTaken(String),

    /// Stock arithmetic rejected the movement.
    #[error(transparent)]
    Stock(#[from] StockError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    /// Display name; the slug is derived from it.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Unique stock-keeping unit.
    pub sku: String,
    /// Selling price.
    pub price: Decimal,
    /// Acquisition cost, if tracked.
    pub cost_price: Option<Decimal>,
    /// Opening stock quantity.
    pub stock_quantity: i32,
    /// Threshold for the low-stock status band.
    pub min_stock_level: i32,
    /// Optional upper stock bound (informational).
    pub max_stock_level: Option<i32>,
    /// Owning category.
    pub category_id: Uuid,
    /// Optional stored image path.
    pub image: Option<String>,
    /// Whether the product is requestable.
    pub is_active: bool,
}

/// Input for updating a product. `None` fields are left unchanged.
/// Stock quantity is deliberately absent: it only moves through
/// [`ProductRepository::update_stock`].
#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<Option<String>>,
    /// New SKU.
    pub sku: Option<String>,
    /// New selling price.
    pub price: Option<Decimal>,
    /// New cost price.
    pub cost_price: Option<Option<Decimal>>,
    /// New low-stock threshold.
    pub min_stock_level: Option<i32>,
    /// New upper stock bound.
    pub max_stock_level: Option<Option<i32>>,
    /// New owning category.
    pub category_id: Option<Uuid>,
    /// New image path.
    pub image: Option<Option<String>>,
    /// New active flag.
    pub is_active: Option<bool>,
}

/// Input for a manual stock update.
#[derive(Debug, Clone)]
pub struct StockUpdateInput {
    /// Movement direction.
    pub movement_type: MovementType,
    /// Quantity moved (absolute target for adjustments).
    pub quantity: i32,
    /// Optional reference (document number, request number).
    pub reference: Option<String>,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// Filter for product listing.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Match against name or SKU.
    pub search: Option<String>,
    /// Restrict to one category.
    pub category_id: Option<Uuid>,
    /// Restrict to one availability status.
    pub status: Option<StockStatus>,
    /// Restrict by active flag.
    pub is_active: Option<bool>,
}

/// Aggregate counts for the dashboard.
#[derive(Debug, Clone)]
pub struct ProductStats {
    /// Total number of products.
    pub total: u64,
    /// Products currently in stock.
    pub in_stock: u64,
    /// Products at or below their minimum level.
    pub low_stock: u64,
    /// Products with no stock.
    pub out_of_stock: u64,
    /// Sum of `price * stock_quantity` over all products.
    pub inventory_value: Decimal,
}

/// Product repository for catalog and stock operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Creates a new product repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a product by ID, with its category.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_with_category(
        &self,
        id: Uuid,
    ) -> Result<Option<(products::Model, Option<categories::Model>)>, DbErr> {
        products::Entity::find_by_id(id)
            .find_also_related(categories::Entity)
            .one(&self.db)
            .await
    }

    /// Finds a product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<products::Model>, DbErr> {
        products::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists products with their categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<(Vec<(products::Model, Option<categories::Model>)>, u64), DbErr> {
        let mut query = products::Entity::find();

        if let Some(term) = &filter.search {
            let pattern = format!("%{term}%");
            query = query.filter(
                products::Column::Name
                    .like(pattern.clone())
                    .or(products::Column::Sku.like(pattern)),
            );
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(products::Column::CategoryId.eq(category_id));
        }
        if let Some(status) = &filter.status {
            query = query.filter(products::Column::Status.eq(stock_status_to_db(*status)));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(products::Column::IsActive.eq(is_active));
        }

        let total = query.clone().count(&self.db).await?;
        let rows = query
            .find_also_related(categories::Entity)
            .order_by_desc(products::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((rows, total))
    }

    /// Creates a product with a derived unique slug and a status computed
    /// from the opening quantity.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::SkuTaken` or `ProductError::CategoryNotFound`
    /// on referential problems.
    pub async fn create(&self, input: CreateProductInput) -> Result<products::Model, ProductError> {
        if self.sku_exists(&input.sku, None).await? {
            return Err(ProductError::SkuTaken(input.sku));
        }
        if categories::Entity::find_by_id(input.category_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(ProductError::CategoryNotFound(input.category_id));
        }

        let slug = self.unique_slug(&input.name, None).await?;
        let status = StockStatus::determine(input.stock_quantity, input.min_stock_level);

        let now = chrono::Utc::now().into();
        let product = products::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            slug: Set(slug),
            description: Set(input.description),
            sku: Set(input.sku),
            price: Set(input.price),
            cost_price: Set(input.cost_price),
            stock_quantity: Set(input.stock_quantity),
            min_stock_level: Set(input.min_stock_level),
            max_stock_level: Set(input.max_stock_level),
            status: Set(stock_status_to_db(status)),
            category_id: Set(input.category_id),
            image: Set(input.image),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(product.insert(&self.db).await?)
    }

    /// Updates a product's catalog fields and recomputes the derived
    /// status when the minimum stock level changes.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::NotFound` for an unknown ID.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateProductInput,
    ) -> Result<products::Model, ProductError> {
        let product = products::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        if let Some(sku) = &input.sku {
            if sku != &product.sku && self.sku_exists(sku, Some(id)).await? {
                return Err(ProductError::SkuTaken(sku.clone()));
            }
        }
        if let Some(category_id) = input.category_id {
            if categories::Entity::find_by_id(category_id)
                .one(&self.db)
                .await?
                .is_none()
            {
                return Err(ProductError::CategoryNotFound(category_id));
            }
        }

        let slug = match &input.name {
            Some(name) if name != &product.name => Some(self.unique_slug(name, Some(id)).await?),
            _ => None,
        };

        let stock_quantity = product.stock_quantity;
        let min_level = input.min_stock_level.unwrap_or(product.min_stock_level);

        let mut active: products::ActiveModel = product.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(slug) = slug {
            active.slug = Set(slug);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(sku) = input.sku {
            active.sku = Set(sku);
        }
        if let Some(price) = input.price {
            active.price = Set(price);
        }
        if let Some(cost_price) = input.cost_price {
            active.cost_price = Set(cost_price);
        }
        if let Some(min_stock_level) = input.min_stock_level {
            active.min_stock_level = Set(min_stock_level);
        }
        if let Some(max_stock_level) = input.max_stock_level {
            active.max_stock_level = Set(max_stock_level);
        }
        if let Some(category_id) = input.category_id {
            active.category_id = Set(category_id);
        }
        if let Some(image) = input.image {
            active.image = Set(image);
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }
        active.status = Set(stock_status_to_db(StockStatus::determine(
            stock_quantity,
            min_level,
        )));
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a product. Movements and request details referencing it are
    /// removed by cascade.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::NotFound` for an unknown ID.
    pub async fn delete(&self, id: Uuid) -> Result<(), ProductError> {
        let result = products::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }

    /// Applies a manual stock movement.
    ///
    /// Locks the product row, applies the ledger arithmetic, recomputes
    /// the derived status, and appends the movement record, all in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::Stock` when the arithmetic rejects the
    /// movement (overdraw, bad quantity) and `ProductError::NotFound` for
    /// an unknown product.
    pub async fn update_stock(
        &self,
        id: Uuid,
        input: StockUpdateInput,
    ) -> Result<products::Model, ProductError> {
        let txn = self.db.begin().await?;

        let updated = apply_movement(
            &txn,
            id,
            input.movement_type,
            input.quantity,
            input.reference.as_deref(),
            input.notes.as_deref(),
        )
        .await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Aggregates product counts by status and the total inventory value.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn stats(&self) -> Result<ProductStats, DbErr> {
        use sea_orm_active_enums::StockStatus as DbStatus;

        let total = products::Entity::find().count(&self.db).await?;
        let in_stock = products::Entity::find()
            .filter(products::Column::Status.eq(DbStatus::InStock))
            .count(&self.db)
            .await?;
        let low_stock = products::Entity::find()
            .filter(products::Column::Status.eq(DbStatus::LowStock))
            .count(&self.db)
            .await?;
        let out_of_stock = products::Entity::find()
            .filter(products::Column::Status.eq(DbStatus::OutOfStock))
            .count(&self.db)
            .await?;

        let inventory_value = products::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|p| p.price * Decimal::from(p.stock_quantity))
            .sum();

        Ok(ProductStats {
            total,
            in_stock,
            low_stock,
            out_of_stock,
            inventory_value,
        })
    }

    async fn sku_exists(&self, sku: &str, exclude: Option<Uuid>) -> Result<bool, DbErr> {
        let mut query = products::Entity::find().filter(products::Column::Sku.eq(sku));
        if let Some(id) = exclude {
            query = query.filter(products::Column::Id.ne(id));
        }
        Ok(query.count(&self.db).await? > 0)
    }

    async fn unique_slug(&self, name: &str, exclude: Option<Uuid>) -> Result<String, DbErr> {
        let base = slugify(name);
        let mut candidate = base.clone();
        let mut counter = 2u32;

        loop {
            let mut query =
                products::Entity::find().filter(products::Column::Slug.eq(candidate.clone()));
            if let Some(id) = exclude {
                query = query.filter(products::Column::Id.ne(id));
            }

            if query.count(&self.db).await? == 0 {
                return Ok(candidate);
            }

            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }
}

/// Applies one stock movement inside an open transaction.
///
/// The product row is locked for the duration so the read-check-write
/// sequence cannot interleave with a concurrent submission.
pub(crate) async fn apply_movement(
    txn: &DatabaseTransaction,
    product_id: Uuid,
    movement_type: MovementType,
    quantity: i32,
    reference: Option<&str>,
    notes: Option<&str>,
) -> Result<products::Model, ProductError> {
    let product = products::Entity::find_by_id(product_id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or(ProductError::NotFound(product_id))?;

    let change = StockLedger::apply(product.stock_quantity, movement_type, quantity)?;
    let status = StockStatus::determine(change.current, product.min_stock_level);
    let now: chrono::DateTime<chrono::FixedOffset> = chrono::Utc::now().into();

    let mut active: products::ActiveModel = product.into();
    active.stock_quantity = Set(change.current);
    active.status = Set(stock_status_to_db(status));
    active.updated_at = Set(now);
    let updated = active.update(txn).await?;

    let movement = stock_movements::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        movement_type: Set(movement_type_to_db(movement_type)),
        quantity: Set(quantity),
        previous_stock: Set(change.previous),
        current_stock: Set(change.current),
        reference: Set(reference.map(ToString::to_string)),
        notes: Set(notes.map(ToString::to_string)),
        created_at: Set(now),
    };
    movement.insert(txn).await?;

    Ok(updated)
}

/// Maps a core stock status onto the database enum.
pub(crate) const fn stock_status_to_db(status: StockStatus) -> sea_orm_active_enums::StockStatus {
    match status {
        StockStatus::InStock => sea_orm_active_enums::StockStatus::InStock,
        StockStatus::LowStock => sea_orm_active_enums::StockStatus::LowStock,
        StockStatus::OutOfStock => sea_orm_active_enums::StockStatus::OutOfStock,
    }
}

/// Maps a core movement type onto the database enum.
pub(crate) const fn movement_type_to_db(ty: MovementType) -> sea_orm_active_enums::MovementType {
    match ty {
        MovementType::In => sea_orm_active_enums::MovementType::In,
        MovementType::Out => sea_orm_active_enums::MovementType::Out,
        MovementType::Adjustment => sea_orm_active_enums::MovementType::Adjustment,
    }
}

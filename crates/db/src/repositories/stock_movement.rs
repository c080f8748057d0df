//! Stock movement history repository. Read-only: movement rows are
//! written by the product and item-request repositories.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use inventopia_core::stock::MovementType;
use inventopia_shared::types::PageRequest;

use crate::entities::{products, stock_movements};
use crate::repositories::product::movement_type_to_db;

/// Filter and ordering for the movement listing.
#[derive(Debug, Clone, Default)]
pub struct MovementFilter {
    /// Restrict to one product.
    pub product_id: Option<Uuid>,
    /// Restrict to one movement type.
    pub movement_type: Option<MovementType>,
    /// Match against product name, SKU, or movement reference.
    pub search: Option<String>,
    /// Sort field; must be in the allow list, otherwise `created_at`.
    pub sort_by: Option<String>,
    /// Ascending when true, descending otherwise.
    pub ascending: bool,
}

/// Sortable columns exposed to clients.
const SORT_FIELDS: &[(&str, stock_movements::Column)] = &[
    ("created_at", stock_movements::Column::CreatedAt),
    ("quantity", stock_movements::Column::Quantity),
    ("type", stock_movements::Column::MovementType),
    ("previous_stock", stock_movements::Column::PreviousStock),
    ("current_stock", stock_movements::Column::CurrentStock),
];

/// Stock movement repository.
#[derive(Debug, Clone)]
pub struct StockMovementRepository {
    db: DatabaseConnection,
}

impl StockMovementRepository {
    /// Creates a new stock movement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists movements with their products, filtered and paginated.
    ///
    /// Unknown sort fields silently fall back to `created_at` so clients
    /// cannot order by arbitrary columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: &MovementFilter,
        page: &PageRequest,
    ) -> Result<(Vec<(stock_movements::Model, Option<products::Model>)>, u64), DbErr> {
        let mut query = stock_movements::Entity::find();

        if let Some(product_id) = filter.product_id {
            query = query.filter(stock_movements::Column::ProductId.eq(product_id));
        }
        if let Some(ty) = filter.movement_type {
            query = query.filter(stock_movements::Column::MovementType.eq(movement_type_to_db(ty)));
        }
        if let Some(term) = &filter.search {
            let pattern = format!("%{term}%");
            let matching_products: Vec<Uuid> = products::Entity::find()
                .filter(
                    products::Column::Name
                        .like(pattern.clone())
                        .or(products::Column::Sku.like(pattern.clone())),
                )
                .all(&self.db)
                .await?
                .into_iter()
                .map(|p| p.id)
                .collect();
            query = query.filter(
                stock_movements::Column::Reference
                    .like(pattern)
                    .or(stock_movements::Column::ProductId.is_in(matching_products)),
            );
        }

        let total = query.clone().count(&self.db).await?;

        let sort_column = filter
            .sort_by
            .as_deref()
            .and_then(|field| {
                SORT_FIELDS
                    .iter()
                    .find(|(name, _)| *name == field)
                    .map(|(_, column)| *column)
            })
            .unwrap_or(stock_movements::Column::CreatedAt);

        query = if filter.ascending {
            query.order_by_asc(sort_column)
        } else {
            query.order_by_desc(sort_column)
        };

        let rows = query
            .find_also_related(products::Entity)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((rows, total))
    }

    /// Lists the movement history of one product, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn history_for_product(
        &self,
        product_id: Uuid,
        page: &PageRequest,
    ) -> Result<(Vec<stock_movements::Model>, u64), DbErr> {
        let query = stock_movements::Entity::find()
            .filter(stock_movements::Column::ProductId.eq(product_id));

        let total = query.clone().count(&self.db).await?;
        let rows = query
            .order_by_desc(stock_movements::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((rows, total))
    }
}

//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod category;
pub mod email_settings;
pub mod item_request;
pub mod permission;
pub mod product;
pub mod stock_movement;
pub mod user;

pub use category::{CategoryError, CategoryInput, CategoryRepository};
pub use email_settings::{EmailSettingsRepository, EmailSettingsUpdate};
pub use item_request::{
    CreatedRequest, ItemRequestRepository, RequestDetailView, RequestFilter, RequestStats,
    RequestView,
};
pub use permission::PermissionRepository;
pub use product::{
    CreateProductInput, ProductError, ProductFilter, ProductRepository, ProductStats,
    StockUpdateInput, UpdateProductInput,
};
pub use stock_movement::{MovementFilter, StockMovementRepository};
pub use user::{CreateUserInput, UpdateUserInput, UserError, UserRepository};

/// Builds a URL-safe slug from a display name.
///
/// Lowercases, maps runs of non-alphanumeric characters to single hyphens,
/// and trims leading/trailing hyphens.
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        slug.push_str("item");
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Office Supplies"), "office-supplies");
        assert_eq!(slugify("  A4 Paper (80gsm) "), "a4-paper-80gsm");
        assert_eq!(slugify("---"), "item");
    }
}

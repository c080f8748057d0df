//! Database seeder for Inventopia development and testing.
//!
//! Seeds one account per role, a couple of categories, a handful of
//! products, and the email settings row. Roles and permissions are
//! created by the initial migration, so the seeder only looks them up.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::str::FromStr;
use uuid::Uuid;

use inventopia_core::auth::hash_password;
use inventopia_db::entities::{
    categories, email_settings, products, roles, sea_orm_active_enums::StockStatus, users,
};

/// Password for every seeded account.
const SEED_PASSWORD: &str = "password123";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = inventopia_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding users...");
    seed_users(&db).await;

    println!("Seeding categories and products...");
    let office = seed_category(&db, "Office Supplies", "#3b82f6").await;
    let electronics = seed_category(&db, "Electronics", "#f59e0b").await;

    seed_product(&db, "Mechanical Pencil", "MLC-001", "12.50", 45, 5, office).await;
    seed_product(&db, "A4 Paper Ream", "PPR-500", "6.00", 120, 20, office).await;
    seed_product(&db, "Wireless Mouse", "MSE-201", "29.90", 8, 10, electronics).await;
    seed_product(&db, "USB-C Cable", "CBL-114", "9.75", 0, 5, electronics).await;

    println!("Seeding email settings...");
    seed_email_settings(&db).await;

    println!("Seeding complete!");
}

/// Looks up a role created by the migration.
async fn role_id(db: &DatabaseConnection, name: &str) -> Uuid {
    roles::Entity::find()
        .filter(roles::Column::Name.eq(name))
        .one(db)
        .await
        .expect("Failed to query roles")
        .unwrap_or_else(|| panic!("Role '{name}' not found; run the migrator first"))
        .id
}

/// Seeds one account per role, skipping accounts that already exist.
async fn seed_users(db: &DatabaseConnection) {
    let accounts = [
        ("Super Admin", "superadmin", "superadmin@inventopia.dev", "superadmin"),
        ("Admin", "admin", "admin@inventopia.dev", "admin"),
        ("Regular User", "user", "user@inventopia.dev", "user"),
    ];

    for (name, username, email, role_name) in accounts {
        let existing = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(db)
            .await
            .expect("Failed to query users");
        if existing.is_some() {
            println!("  User {email} already exists, skipping...");
            continue;
        }

        let role = role_id(db, role_name).await;
        let now = Utc::now().into();
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(hash_password(SEED_PASSWORD).expect("Failed to hash password")),
            is_blocked: Set(false),
            role_id: Set(Some(role)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        user.insert(db).await.expect("Failed to insert user");
        println!("  Created {email} ({role_name})");
    }
}

/// Seeds a category, returning its ID (existing or new).
async fn seed_category(db: &DatabaseConnection, name: &str, color: &str) -> Uuid {
    let slug = name.to_lowercase().replace(' ', "-");

    if let Some(existing) = categories::Entity::find()
        .filter(categories::Column::Slug.eq(&slug))
        .one(db)
        .await
        .expect("Failed to query categories")
    {
        println!("  Category {name} already exists, skipping...");
        return existing.id;
    }

    let now = Utc::now().into();
    let category = categories::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        slug: Set(slug),
        description: Set(None),
        color: Set(Some(color.to_string())),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let inserted = category
        .insert(db)
        .await
        .expect("Failed to insert category");
    println!("  Created category {name}");
    inserted.id
}

/// Seeds a product under a category, skipping existing SKUs.
async fn seed_product(
    db: &DatabaseConnection,
    name: &str,
    sku: &str,
    price: &str,
    stock: i32,
    min_level: i32,
    category_id: Uuid,
) {
    let existing = products::Entity::find()
        .filter(products::Column::Sku.eq(sku))
        .one(db)
        .await
        .expect("Failed to query products");
    if existing.is_some() {
        println!("  Product {sku} already exists, skipping...");
        return;
    }

    let status = if stock <= 0 {
        StockStatus::OutOfStock
    } else if stock <= min_level {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    };

    let now = Utc::now().into();
    let product = products::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        slug: Set(name.to_lowercase().replace(' ', "-")),
        description: Set(None),
        sku: Set(sku.to_string()),
        price: Set(Decimal::from_str(price).expect("Invalid seed price")),
        cost_price: Set(None),
        stock_quantity: Set(stock),
        min_stock_level: Set(min_level),
        max_stock_level: Set(None),
        status: Set(status),
        category_id: Set(category_id),
        image: Set(None),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    product.insert(db).await.expect("Failed to insert product");
    println!("  Created product {name} ({sku})");
}

/// Seeds the singleton email settings row with notifications enabled.
async fn seed_email_settings(db: &DatabaseConnection) {
    if email_settings::Entity::find()
        .one(db)
        .await
        .expect("Failed to query email settings")
        .is_some()
    {
        println!("  Email settings already exist, skipping...");
        return;
    }

    let now = Utc::now().into();
    let settings = email_settings::ActiveModel {
        id: Set(Uuid::new_v4()),
        admin_email: Set("admin@inventopia.dev".to_string()),
        cc_emails: Set(serde_json::json!([])),
        request_notifications: Set(true),
        low_stock_notifications: Set(true),
        low_stock_threshold: Set(10),
        created_at: Set(now),
        updated_at: Set(now),
    };
    settings
        .insert(db)
        .await
        .expect("Failed to insert email settings");
    println!("  Created email settings");
}

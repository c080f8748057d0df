//! Initial database migration.
//!
//! Creates all enums, tables, constraints, and indexes, and seeds the
//! built-in roles and permissions.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ACCESS CONTROL
        // ============================================================
        db.execute_unprepared(ROLES_SQL).await?;
        db.execute_unprepared(PERMISSIONS_SQL).await?;
        db.execute_unprepared(ROLE_PERMISSION_SQL).await?;
        db.execute_unprepared(USERS_SQL).await?;

        // ============================================================
        // PART 3: CATALOG
        // ============================================================
        db.execute_unprepared(CATEGORIES_SQL).await?;
        db.execute_unprepared(PRODUCTS_SQL).await?;
        db.execute_unprepared(STOCK_MOVEMENTS_SQL).await?;

        // ============================================================
        // PART 4: ITEM REQUESTS
        // ============================================================
        db.execute_unprepared(ITEM_REQUESTS_SQL).await?;
        db.execute_unprepared(ITEM_REQUEST_DETAILS_SQL).await?;
        db.execute_unprepared(ITEM_REQUEST_LOGS_SQL).await?;

        // ============================================================
        // PART 5: NOTIFICATION SETTINGS
        // ============================================================
        db.execute_unprepared(EMAIL_SETTINGS_SQL).await?;

        // ============================================================
        // PART 6: SEED DATA
        // ============================================================
        db.execute_unprepared(SEED_ROLES_SQL).await?;
        db.execute_unprepared(SEED_PERMISSIONS_SQL).await?;
        db.execute_unprepared(SEED_ROLE_PERMISSION_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Item request status (parent and detail rows share the same set)
CREATE TYPE request_status AS ENUM (
    'draft',
    'pending',
    'approved',
    'rejected',
    'partially_approved',
    'completed',
    'cancelled'
);

-- Stock movement direction
CREATE TYPE movement_type AS ENUM ('in', 'out', 'adjustment');

-- Derived product availability
CREATE TYPE stock_status AS ENUM ('in_stock', 'low_stock', 'out_of_stock');
";

const ROLES_SQL: &str = r"
CREATE TABLE roles (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(50) NOT NULL UNIQUE,
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const PERMISSIONS_SQL: &str = r"
CREATE TABLE permissions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(100) NOT NULL UNIQUE,
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const ROLE_PERMISSION_SQL: &str = r"
CREATE TABLE role_permission (
    role_id UUID NOT NULL REFERENCES roles(id) ON DELETE CASCADE,
    permission_id UUID NOT NULL REFERENCES permissions(id) ON DELETE CASCADE,
    PRIMARY KEY (role_id, permission_id)
);
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    username VARCHAR(100) NOT NULL UNIQUE,
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    is_blocked BOOLEAN NOT NULL DEFAULT false,
    role_id UUID REFERENCES roles(id) ON DELETE SET NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_users_email ON users(email);
CREATE INDEX idx_users_role_id ON users(role_id);
";

const CATEGORIES_SQL: &str = r"
CREATE TABLE categories (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    slug VARCHAR(255) NOT NULL UNIQUE,
    description TEXT,
    color VARCHAR(20),
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const PRODUCTS_SQL: &str = r"
CREATE TABLE products (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    slug VARCHAR(255) NOT NULL UNIQUE,
    description TEXT,
    sku VARCHAR(100) NOT NULL UNIQUE,
    price DECIMAL(15, 2) NOT NULL DEFAULT 0,
    cost_price DECIMAL(15, 2),
    stock_quantity INTEGER NOT NULL DEFAULT 0 CHECK (stock_quantity >= 0),
    min_stock_level INTEGER NOT NULL DEFAULT 0,
    max_stock_level INTEGER,
    status stock_status NOT NULL DEFAULT 'out_of_stock',
    category_id UUID NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
    image TEXT,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_products_category_id ON products(category_id);
CREATE INDEX idx_products_status ON products(status);
CREATE INDEX idx_products_sku ON products(sku);
";

const STOCK_MOVEMENTS_SQL: &str = r#"
CREATE TABLE stock_movements (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    product_id UUID NOT NULL REFERENCES products(id) ON DELETE CASCADE,
    "type" movement_type NOT NULL,
    quantity INTEGER NOT NULL,
    previous_stock INTEGER NOT NULL,
    current_stock INTEGER NOT NULL,
    reference VARCHAR(255),
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_stock_movements_product_id ON stock_movements(product_id);
CREATE INDEX idx_stock_movements_type ON stock_movements("type");
CREATE INDEX idx_stock_movements_created_at ON stock_movements(created_at);
"#;

const ITEM_REQUESTS_SQL: &str = r"
CREATE TABLE item_requests (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    request_number VARCHAR(50) NOT NULL UNIQUE,
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    note TEXT,
    status request_status NOT NULL DEFAULT 'draft',
    approved_by UUID REFERENCES users(id) ON DELETE SET NULL,
    approved_at TIMESTAMPTZ,
    admin_note TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_item_requests_user_id ON item_requests(user_id);
CREATE INDEX idx_item_requests_status ON item_requests(status);
CREATE INDEX idx_item_requests_request_number ON item_requests(request_number);
";

const ITEM_REQUEST_DETAILS_SQL: &str = r"
CREATE TABLE item_request_details (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    item_request_id UUID NOT NULL REFERENCES item_requests(id) ON DELETE CASCADE,
    product_id UUID NOT NULL REFERENCES products(id) ON DELETE CASCADE,
    requested_quantity INTEGER NOT NULL CHECK (requested_quantity > 0),
    approved_quantity INTEGER NOT NULL DEFAULT 0
        CHECK (approved_quantity >= 0 AND approved_quantity <= requested_quantity),
    status request_status NOT NULL DEFAULT 'draft',
    note TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    UNIQUE (item_request_id, product_id)
);

CREATE INDEX idx_item_request_details_request_id ON item_request_details(item_request_id);
CREATE INDEX idx_item_request_details_product_id ON item_request_details(product_id);
";

const ITEM_REQUEST_LOGS_SQL: &str = r"
CREATE TABLE item_request_logs (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    item_request_id UUID NOT NULL REFERENCES item_requests(id) ON DELETE CASCADE,
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    action VARCHAR(50) NOT NULL,
    old_data JSONB,
    new_data JSONB NOT NULL,
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_item_request_logs_request_id ON item_request_logs(item_request_id);
";

const EMAIL_SETTINGS_SQL: &str = r"
CREATE TABLE email_settings (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    admin_email VARCHAR(255) NOT NULL DEFAULT '',
    cc_emails JSONB NOT NULL DEFAULT '[]'::jsonb,
    request_notifications BOOLEAN NOT NULL DEFAULT true,
    low_stock_notifications BOOLEAN NOT NULL DEFAULT true,
    low_stock_threshold INTEGER NOT NULL DEFAULT 10,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const SEED_ROLES_SQL: &str = r"
INSERT INTO roles (name, description) VALUES
    ('Superadmin', 'Full system access'),
    ('Admin', 'Inventory and request management'),
    ('User', 'Submit and track own item requests');
";

const SEED_PERMISSIONS_SQL: &str = r"
INSERT INTO permissions (name, description) VALUES
    ('view_products', 'View products'),
    ('create_products', 'Create products'),
    ('edit_products', 'Edit products'),
    ('delete_products', 'Delete products'),
    ('view_categories', 'View categories'),
    ('create_categories', 'Create categories'),
    ('edit_categories', 'Edit categories'),
    ('delete_categories', 'Delete categories'),
    ('view_users', 'View users'),
    ('create_users', 'Create users'),
    ('edit_users', 'Edit users'),
    ('delete_users', 'Delete users'),
    ('view_requests', 'View item requests'),
    ('create_requests', 'Create item requests'),
    ('edit_requests', 'Edit item requests'),
    ('delete_requests', 'Delete item requests'),
    ('approve_requests', 'Approve or reject item requests'),
    ('view_stock_movements', 'View stock movement history'),
    ('manage_stock', 'Adjust product stock levels'),
    ('view_email_settings', 'View email settings'),
    ('edit_email_settings', 'Edit email settings');
";

const SEED_ROLE_PERMISSION_SQL: &str = r"
-- Superadmin and Admin hold every permission
INSERT INTO role_permission (role_id, permission_id)
SELECT r.id, p.id
FROM roles r, permissions p
WHERE r.name IN ('Superadmin', 'Admin');

-- Regular users browse the catalog and manage their own requests
INSERT INTO role_permission (role_id, permission_id)
SELECT r.id, p.id
FROM roles r, permissions p
WHERE r.name = 'User'
  AND p.name IN (
    'view_products',
    'view_categories',
    'view_requests',
    'create_requests',
    'edit_requests'
  );
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS email_settings CASCADE;
DROP TABLE IF EXISTS item_request_logs CASCADE;
DROP TABLE IF EXISTS item_request_details CASCADE;
DROP TABLE IF EXISTS item_requests CASCADE;
DROP TABLE IF EXISTS stock_movements CASCADE;
DROP TABLE IF EXISTS products CASCADE;
DROP TABLE IF EXISTS categories CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TABLE IF EXISTS role_permission CASCADE;
DROP TABLE IF EXISTS permissions CASCADE;
DROP TABLE IF EXISTS roles CASCADE;

DROP TYPE IF EXISTS stock_status;
DROP TYPE IF EXISTS movement_type;
DROP TYPE IF EXISTS request_status;
";

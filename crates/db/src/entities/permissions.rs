//! `SeaORM` Entity for the permissions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "permissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_permission::Entity")]
    RolePermission,
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        super::role_permission::Relation::Roles.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::role_permission::Relation::Permissions.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! `SeaORM` Entity for the item_requests table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::RequestStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "item_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub request_number: String,
    pub user_id: Uuid,
    pub note: Option<String>,
    pub status: RequestStatus,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTimeWithTimeZone>,
    pub admin_note: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(has_many = "super::item_request_details::Entity")]
    ItemRequestDetails,
    #[sea_orm(has_many = "super::item_request_logs::Entity")]
    ItemRequestLogs,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::item_request_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemRequestDetails.def()
    }
}

impl Related<super::item_request_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemRequestLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Refund request entity - A two-phase intent to pay out a user's balance.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub use super::recharge_request::RequestStatus;

/// Refund request database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "refund_requests")]
pub struct Model {
    /// Unique identifier for the request
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Requesting user
    pub user_id: i64,
    /// Requested amount, positive and within balance at submission time
    pub amount: i64,
    /// Current lifecycle state
    pub status: RequestStatus,
    /// When the request was submitted
    pub created_at: DateTimeUtc,
}

/// Defines relationships between refund requests and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each request belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

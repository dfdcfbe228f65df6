//! Recharge request entity - A two-phase intent to increase a user's balance.
//!
//! Requests start `Pending` and transition exactly once to `Approved` (or, for
//! refunds, `Failed`). The shared `RequestStatus` enum lives here and is
//! reused by the refund request entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One-way lifecycle state shared by recharge and refund requests.
/// `Pending` is initial; `Approved` and `Failed` are terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RequestStatus {
    /// Awaiting admin action
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    /// Approved by an admin; balance was adjusted
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Refund-only: balance no longer covered the amount at approval time
    #[sea_orm(string_value = "failed")]
    Failed,
}

/// Recharge request database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recharge_requests")]
pub struct Model {
    /// Unique identifier for the request
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Requesting user
    pub user_id: i64,
    /// Requested amount, always positive
    pub amount: i64,
    /// Current lifecycle state
    pub status: RequestStatus,
    /// When the request was submitted
    pub created_at: DateTimeUtc,
}

/// Defines relationships between recharge requests and other entities
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

//! Transaction entity - The append-only audit trail of balance activity.
//!
//! One row is written for every balance-related event, successful or not.
//! Rows are never mutated after insert.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// What kind of balance event a transaction records.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TransactionKind {
    /// Cart checkout debit
    #[sea_orm(string_value = "purchase")]
    #[default]
    Purchase,
    /// A recharge request was submitted (no balance change yet)
    #[sea_orm(string_value = "recharge_request")]
    RechargeRequest,
    /// An approved recharge credited the balance
    #[sea_orm(string_value = "recharge")]
    Recharge,
    /// A refund request was submitted (no balance change yet)
    #[sea_orm(string_value = "refund_request")]
    RefundRequest,
    /// A refund approval, completed or failed
    #[sea_orm(string_value = "refund")]
    Refund,
}

/// Outcome recorded on the audit row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TransactionStatus {
    /// The underlying request is still awaiting admin action
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    /// The balance mutation was applied
    #[sea_orm(string_value = "completed")]
    Completed,
    /// The operation was refused (e.g. refund with insufficient balance)
    #[sea_orm(string_value = "failed")]
    Failed,
}

/// Transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// User whose balance the event concerns
    pub user_id: i64,
    /// Kind of balance event
    pub kind: TransactionKind,
    /// Amount involved, always positive; the kind determines direction
    pub amount: i64,
    /// Human-readable description of the event
    pub description: String,
    /// Outcome of the event
    pub status: TransactionStatus,
    /// When the event was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one user
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

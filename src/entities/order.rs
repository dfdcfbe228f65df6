//! Order entity - One row per purchased or requested product.
//!
//! Cart checkout creates orders directly in the `Paid` state. Manual purchase
//! requests create `Pending` orders carrying the buyer's phone number and an
//! optional receipt reference; those are settled out-of-band by the operator.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum OrderStatus {
    /// Awaiting out-of-band settlement by the operator
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    /// Paid from balance at checkout
    #[sea_orm(string_value = "paid")]
    Paid,
}

/// Order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Buying user
    pub user_id: i64,
    /// Ordered product
    pub product_id: i64,
    /// Contact phone number, supplied on manual purchase requests
    pub phone: Option<String>,
    /// Stored receipt reference, supplied on manual purchase requests
    pub receipt: Option<String>,
    /// Current lifecycle state
    pub status: OrderStatus,
    /// When the order was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Each order references one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! User entity - Represents customer and admin accounts.
//!
//! Each user has a unique username, an opaque password credential, an admin
//! flag, and a balance in whole currency units. The balance is mutated only
//! by the ledger module and never goes negative.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name, unique across the shop
    #[sea_orm(unique)]
    pub username: String,
    /// Opaque credential; compared verbatim by the identity check
    pub password: String,
    /// Whether this account may use the admin console
    pub is_admin: bool,
    /// Spendable credit in whole currency units, never negative
    pub balance: i64,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has many cart entries
    #[sea_orm(has_many = "super::cart_item::Entity")]
    CartItems,
    /// One user has many wishlist entries
    #[sea_orm(has_many = "super::wishlist_item::Entity")]
    WishlistItems,
    /// One user has many orders
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
    /// One user has many recharge requests
    #[sea_orm(has_many = "super::recharge_request::Entity")]
    RechargeRequests,
    /// One user has many refund requests
    #[sea_orm(has_many = "super::refund_request::Entity")]
    RefundRequests,
    /// One user has many audit transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::cart_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItems.def()
    }
}

impl Related<super::wishlist_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WishlistItems.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::recharge_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RechargeRequests.def()
    }
}

impl Related<super::refund_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RefundRequests.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

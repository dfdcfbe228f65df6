//! Product entity - Catalog items created and deleted by admins.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the product
    pub name: String,
    /// Price in whole currency units, always positive
    pub price: i64,
    /// Free-form product description
    pub description: String,
    /// Image reference (an uploaded file path or an external URL)
    pub image: String,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product appears in many cart entries
    #[sea_orm(has_many = "super::cart_item::Entity")]
    CartItems,
    /// One product appears in many wishlist entries
    #[sea_orm(has_many = "super::wishlist_item::Entity")]
    WishlistItems,
    /// One product appears in many orders
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
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

impl ActiveModelBehavior for ActiveModel {}

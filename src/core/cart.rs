//! Cart business logic - A per-user keyed store of product entries.
//!
//! Duplicates are allowed: adding the same product twice means buying it
//! twice at checkout. The ledger's checkout operation reads and clears the
//! cart atomically with the balance debit; this module only covers the
//! user-facing mutations and reads.

use crate::{
    core::account::Identity,
    entities::{CartItem, Product, cart_item, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// A cart entry joined with its product.
pub type CartLine = (cart_item::Model, product::Model);

/// Adds a product to the user's cart. The product must exist; duplicates
/// are allowed.
pub async fn add_to_cart(
    db: &DatabaseConnection,
    user: &Identity,
    product_id: i64,
) -> Result<cart_item::Model> {
    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    let entry = cart_item::ActiveModel {
        user_id: Set(user.user_id),
        product_id: Set(product_id),
        ..Default::default()
    };
    entry.insert(db).await.map_err(Into::into)
}

/// Removes a cart entry, scoped to the owning user. Removing an entry that
/// does not exist (or belongs to someone else) is a silent no-op.
pub async fn remove_from_cart(db: &DatabaseConnection, user: &Identity, cart_id: i64) -> Result<()> {
    CartItem::delete_many()
        .filter(cart_item::Column::Id.eq(cart_id))
        .filter(cart_item::Column::UserId.eq(user.user_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Retrieves the user's cart entries joined with their products, newest
/// first. Entries whose product has been deleted are skipped.
pub async fn get_cart(db: &DatabaseConnection, user: &Identity) -> Result<Vec<CartLine>> {
    let lines = CartItem::find()
        .filter(cart_item::Column::UserId.eq(user.user_id))
        .find_also_related(Product)
        .order_by_desc(cart_item::Column::Id)
        .all(db)
        .await?;

    Ok(lines
        .into_iter()
        .filter_map(|(entry, product)| product.map(|p| (entry, p)))
        .collect())
}

/// Sums the prices of the given cart lines.
#[must_use]
pub fn cart_total(lines: &[CartLine]) -> i64 {
    lines.iter().map(|(_, product)| product.price).sum()
}

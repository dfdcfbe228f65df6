//! Wishlist business logic - Like the cart, but deduplicated per product.

use crate::{
    core::account::Identity,
    entities::{Product, WishlistItem, product, wishlist_item},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Adds a product to the user's wishlist.
///
/// Returns `Some(entry)` when a new entry was created and `None` when the
/// product was already wished for (the store stays unchanged).
pub async fn add_to_wishlist(
    db: &DatabaseConnection,
    user: &Identity,
    product_id: i64,
) -> Result<Option<wishlist_item::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    let existing = WishlistItem::find()
        .filter(wishlist_item::Column::UserId.eq(user.user_id))
        .filter(wishlist_item::Column::ProductId.eq(product_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(None);
    }

    let entry = wishlist_item::ActiveModel {
        user_id: Set(user.user_id),
        product_id: Set(product_id),
        ..Default::default()
    };
    Ok(Some(entry.insert(db).await?))
}

/// Removes a wishlist entry, scoped to the owning user. Silent no-op when
/// the entry does not exist.
pub async fn remove_from_wishlist(
    db: &DatabaseConnection,
    user: &Identity,
    wishlist_id: i64,
) -> Result<()> {
    WishlistItem::delete_many()
        .filter(wishlist_item::Column::Id.eq(wishlist_id))
        .filter(wishlist_item::Column::UserId.eq(user.user_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Retrieves the user's wishlist joined with products, newest first.
/// Entries whose product has been deleted are skipped.
pub async fn get_wishlist(
    db: &DatabaseConnection,
    user: &Identity,
) -> Result<Vec<(wishlist_item::Model, product::Model)>> {
    let entries = WishlistItem::find()
        .filter(wishlist_item::Column::UserId.eq(user.user_id))
        .find_also_related(Product)
        .order_by_desc(wishlist_item::Column::Id)
        .all(db)
        .await?;

    Ok(entries
        .into_iter()
        .filter_map(|(entry, product)| product.map(|p| (entry, p)))
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_to_wishlist_deduplicates() -> Result<()> {
        let db = setup_test_db().await?;
        let alice = identity_of(&create_test_user(&db, "alice").await?);
        let product = create_test_product(&db, "Mug", 1000).await?;

        let first = add_to_wishlist(&db, &alice, product.id).await?;
        assert!(first.is_some());

        let second = add_to_wishlist(&db, &alice, product.id).await?;
        assert!(second.is_none());

        assert_eq!(get_wishlist(&db, &alice).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_wishlist_dedup_is_per_user() -> Result<()> {
        let db = setup_test_db().await?;
        let alice = identity_of(&create_test_user(&db, "alice").await?);
        let bob = identity_of(&create_test_user(&db, "bob").await?);
        let product = create_test_product(&db, "Mug", 1000).await?;

        assert!(add_to_wishlist(&db, &alice, product.id).await?.is_some());
        assert!(add_to_wishlist(&db, &bob, product.id).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_wishlist() -> Result<()> {
        let db = setup_test_db().await?;
        let alice = identity_of(&create_test_user(&db, "alice").await?);
        let product = create_test_product(&db, "Mug", 1000).await?;

        let entry = add_to_wishlist(&db, &alice, product.id).await?.unwrap();
        remove_from_wishlist(&db, &alice, entry.id).await?;
        assert!(get_wishlist(&db, &alice).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_wishlist_unknown_product() -> Result<()> {
        let db = setup_test_db().await?;
        let alice = identity_of(&create_test_user(&db, "alice").await?);

        let result = add_to_wishlist(&db, &alice, 42).await;
        assert!(matches!(result.unwrap_err(), Error::ProductNotFound { id: 42 }));

        Ok(())
    }
}

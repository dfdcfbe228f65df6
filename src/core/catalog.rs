//! Catalog business logic - Product listing and admin-only mutation.
//!
//! Products are read-mostly. Deletion is a hard delete; orders and cart
//! entries that reference a deleted product keep their dangling id, which is
//! accepted current behavior.

use crate::{
    config::shop::SeedCatalog,
    core::account::Identity,
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::info;

/// Retrieves all products, newest first, for the storefront page.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_desc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product. Admin only.
///
/// Validates that the name is non-empty and the price positive; description
/// and image reference may be empty.
pub async fn create_product(
    db: &DatabaseConnection,
    admin: &Identity,
    name: String,
    price: i64,
    description: String,
    image: String,
) -> Result<product::Model> {
    admin.require_admin()?;

    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Product name cannot be empty".to_string(),
        });
    }
    if price <= 0 {
        return Err(Error::InvalidAmount { amount: price });
    }

    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        price: Set(price),
        description: Set(description),
        image: Set(image),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Hard-deletes a product. Admin only.
pub async fn delete_product(
    db: &DatabaseConnection,
    admin: &Identity,
    product_id: i64,
) -> Result<()> {
    admin.require_admin()?;

    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    product.delete(db).await?;
    Ok(())
}

/// Seeds the catalog from shop.toml when the products table is empty.
///
/// Runs during bootstrap, before any request handling, so it bypasses the
/// admin identity gate. Seeds with a non-positive price are skipped.
pub async fn seed_initial_products(db: &DatabaseConnection, seed: &SeedCatalog) -> Result<()> {
    if Product::find().count(db).await? > 0 {
        return Ok(());
    }

    let mut inserted = 0u32;
    for entry in &seed.products {
        if entry.name.trim().is_empty() || entry.price <= 0 {
            continue;
        }
        let product = product::ActiveModel {
            name: Set(entry.name.trim().to_string()),
            price: Set(entry.price),
            description: Set(entry.description.clone()),
            image: Set(entry.image.clone()),
            ..Default::default()
        };
        product.insert(db).await?;
        inserted += 1;
    }

    if inserted > 0 {
        info!(inserted, "seeded initial catalog from shop.toml");
    }
    Ok(())
}

//! Database configuration module for `DoveShop`.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. Table creation uses `Schema::create_table_from_entity` so the
//! schema is generated straight from the entity definitions without manual
//! SQL.

use crate::entities::{
    CartItem, Order, Product, RechargeRequest, RefundRequest, Transaction, User, WishlistItem,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to a local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/shop.sqlite".to_string())
}

/// Establishes a connection to the `SQLite` database.
///
/// Uses [`get_database_url`] for the connection string, so `DATABASE_URL`
/// can point tests or deployments at a different database.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all storefront tables from the entity definitions.
///
/// Seven keyed collections plus users: products, cart entries, wishlist
/// entries, orders, recharge requests, refund requests, and the audit
/// transaction log.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(User),
        schema.create_table_from_entity(Product),
        schema.create_table_from_entity(CartItem),
        schema.create_table_from_entity(WishlistItem),
        schema.create_table_from_entity(Order),
        schema.create_table_from_entity(RechargeRequest),
        schema.create_table_from_entity(RefundRequest),
        schema.create_table_from_entity(Transaction),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    Ok(())
}

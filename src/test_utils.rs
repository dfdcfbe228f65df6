//! Shared test utilities for `DoveShop`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults, plus notifier doubles
//! for asserting on (or breaking) notification dispatch.

use crate::{
    config::shop::ShopConfig,
    entities::{product, user},
    errors::{Error, Result},
    notify::Notifier,
};
use sea_orm::{DatabaseConnection, Set, prelude::*};
use std::sync::Mutex;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Sets up a database plus the usual ledger collaborators.
/// Returns (db, recording notifier, shop config with both recipients set).
pub async fn setup_ledger() -> Result<(DatabaseConnection, RecordingNotifier, ShopConfig)> {
    let db = setup_test_db().await?;
    Ok((db, RecordingNotifier::default(), test_shop_config()))
}

/// A shop configuration with both notification recipients configured.
#[must_use]
pub fn test_shop_config() -> ShopConfig {
    ShopConfig {
        shop_name: "TestShop".to_string(),
        admin_email: Some("admin@shop.test".to_string()),
        customer_email: Some("customer@shop.test".to_string()),
    }
}

/// Creates a customer account with zero balance.
pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> Result<user::Model> {
    create_user_with_balance(db, username, 0).await
}

/// Creates a customer account with the given starting balance.
pub async fn create_user_with_balance(
    db: &DatabaseConnection,
    username: &str,
    balance: i64,
) -> Result<user::Model> {
    let user = user::ActiveModel {
        username: Set(username.to_string()),
        password: Set("password".to_string()),
        is_admin: Set(false),
        balance: Set(balance),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}

/// Creates an admin account (`shopkeeper` / `1234`).
pub async fn create_admin_user(db: &DatabaseConnection) -> Result<user::Model> {
    let admin = user::ActiveModel {
        username: Set("shopkeeper".to_string()),
        password: Set("1234".to_string()),
        is_admin: Set(true),
        balance: Set(0),
        ..Default::default()
    };
    admin.insert(db).await.map_err(Into::into)
}

/// Creates an admin account and returns its identity.
pub async fn admin_identity(db: &DatabaseConnection) -> Result<crate::core::account::Identity> {
    Ok(identity_of(&create_admin_user(db).await?))
}

/// Builds the request-scoped identity for a user row.
#[must_use]
pub fn identity_of(user: &user::Model) -> crate::core::account::Identity {
    crate::core::account::Identity::from(user)
}

/// Creates a test product with an empty description and image.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    price: i64,
) -> Result<product::Model> {
    let product = product::ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        description: Set(String::new()),
        image: Set(String::new()),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Notifier double that records every message it is asked to deliver.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String, String)>>,
}

impl RecordingNotifier {
    /// Returns the (to, subject, body) triples delivered so far.
    #[must_use]
    pub fn sent(&self) -> Vec<(String, String, String)> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    async fn notify(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((to.to_string(), subject.to_string(), body.to_string()));
        }
        Ok(())
    }
}

/// Notifier double that always fails, for asserting failure isolation.
#[derive(Debug, Clone, Copy)]
pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    async fn notify(&self, _to: &str, _subject: &str, _body: &str) -> Result<()> {
        Err(Error::Config {
            message: "notifier backend is down".to_string(),
        })
    }
}

//! Shop configuration loading from environment variables and shop.toml.
//!
//! Runtime settings (shop name, notification recipients) come from the
//! environment. An optional `shop.toml` file describes catalog entries used
//! to seed the products table on first run.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Runtime shop settings used by notification builders and bootstrap.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Display name of the shop, prefixed on every notification subject
    pub shop_name: String,
    /// Where admin notices go; `None` disables admin notifications
    pub admin_email: Option<String>,
    /// Where customer notices go; `None` disables customer notifications
    pub customer_email: Option<String>,
}

impl ShopConfig {
    /// Loads shop settings from the environment.
    ///
    /// Reads `SHOP_NAME` (default `"DoveShop"`), `ADMIN_EMAIL` (falling back
    /// to `SMTP_EMAIL`), and `CUSTOMER_EMAIL`. Missing recipient addresses
    /// are valid and simply disable the corresponding notifications.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            shop_name: std::env::var("SHOP_NAME").unwrap_or_else(|_| "DoveShop".to_string()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .or_else(|_| std::env::var("SMTP_EMAIL"))
                .ok(),
            customer_email: std::env::var("CUSTOMER_EMAIL").ok(),
        }
    }
}

/// Catalog seed parsed from shop.toml
#[derive(Debug, Deserialize)]
pub struct SeedCatalog {
    /// Products to insert when the catalog is empty
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

/// One seed catalog entry
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Product display name
    pub name: String,
    /// Price in whole currency units
    pub price: i64,
    /// Product description
    #[serde(default)]
    pub description: String,
    /// Image reference (upload path or external URL)
    #[serde(default)]
    pub image: String,
}

/// Loads a catalog seed from a TOML file.
pub fn load_seed_catalog<P: AsRef<Path>>(path: P) -> Result<SeedCatalog> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read seed file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse shop.toml: {e}"),
    })
}

/// Loads the catalog seed from the default location (./shop.toml).
/// A missing file is not an error; it yields an empty seed.
pub fn load_default_seed_catalog() -> Result<SeedCatalog> {
    if !Path::new("shop.toml").exists() {
        return Ok(SeedCatalog {
            products: Vec::new(),
        });
    }
    load_seed_catalog("shop.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_seed_catalog() {
        let toml_str = r#"
            [[products]]
            name = "Handmade mug"
            price = 12000
            description = "Ceramic mug"
            image = "/uploads/mug.png"

            [[products]]
            name = "Sticker pack"
            price = 3000
        "#;

        let seed: SeedCatalog = toml::from_str(toml_str).unwrap();
        assert_eq!(seed.products.len(), 2);
        assert_eq!(seed.products[0].name, "Handmade mug");
        assert_eq!(seed.products[0].price, 12000);
        assert_eq!(seed.products[1].description, "");
        assert_eq!(seed.products[1].image, "");
    }

    #[test]
    fn test_parse_empty_seed() {
        let seed: SeedCatalog = toml::from_str("").unwrap();
        assert!(seed.products.is_empty());
    }
}

/// Database configuration and connection management
pub mod database;

/// Shop settings from environment variables and catalog seeding from shop.toml
pub mod shop;

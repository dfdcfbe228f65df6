use doveshop::{config, core, errors::Result};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load shop settings
    let shop_config = config::shop::ShopConfig::from_env();
    info!(shop = %shop_config.shop_name, "loaded shop configuration");

    // 4. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Seed the default admin account and the initial catalog
    core::account::ensure_admin_account(&db).await?;
    let seed = config::shop::load_default_seed_catalog()?;
    core::catalog::seed_initial_products(&db, &seed)
        .await
        .inspect_err(|e| error!("Failed to seed catalog: {e}"))?;

    info!(shop = %shop_config.shop_name, "storefront store is ready");
    Ok(())
}

//! Products API - REST server

use axum_helpers::server::{bind, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config, run_migrations};
use migration::Migrator;
use products_api::{api::products::pg_service, app::build_router, config::Config};
use tracing::{error, info};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_from_config(config.database.clone()).await?;

    if config.run_migrations {
        run_migrations::<Migrator>(&db, "products_api").await?;
    } else {
        info!("RUN_MIGRATIONS=false, skipping migrations");
    }

    let router = build_router(pg_service(db.clone()));

    // An unavailable port is fatal: no retry, no fallback port
    let listener = match bind(&config.server).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %config.server.address(), "Cannot start server: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting Products API on port {}", config.server.port);

    create_production_app(listener, router, config.shutdown_timeout, async move {
        info!("Shutting down: closing database connections");
        if let Err(e) = db.close().await {
            error!("Failed to close database connection: {}", e);
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}

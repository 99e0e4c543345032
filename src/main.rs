//! Paginator demo service
//!
//! Serves paginated cat listings over SQLite.
//! Reads configuration from TOML file (~/.config/paginator-service/config.toml).

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use paginator::config::{config_path_from_env, AppConfig};
use paginator::infrastructure::database::migrator::Migrator;
use paginator::infrastructure::database::seed::seed_demo_data;
use paginator::infrastructure::shutdown_signal;
use paginator::{create_api_router, init_database, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = config_path_from_env();
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Paginator Service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
        max_connections: None,
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    if let Err(e) = seed_demo_data(&db).await {
        warn!("Failed to seed demo data: {}", e);
    }

    // ── REST API ───────────────────────────────────────────────
    let api_router = create_api_router(db.clone(), app_cfg.pagination.clone());

    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("🛑 REST API server received shutdown signal");
        })
        .await?;

    // Perform final cleanup
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("✅ Database connection closed");
    }

    info!("👋 Paginator Service shutdown complete");
    Ok(())
}

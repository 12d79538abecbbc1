use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tipsymeter::server::config::configure_app;
use tipsymeter::server::services::{MemStorage, PgStorage, SettingsStore, Storage};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tipsymeter=debug,tower_http=info")),
        )
        .init();

    dotenvy::dotenv().ok();

    // Use the database when one is configured, in-memory storage otherwise.
    let storage: Arc<dyn Storage> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&url)
                .await
                .context("Failed to connect to database")?;
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            info!("Using Postgres storage");
            Arc::new(PgStorage::new(pool))
        }
        Err(_) => {
            warn!("DATABASE_URL not set, using in-memory storage");
            Arc::new(MemStorage::new())
        }
    };

    let settings_path =
        std::env::var("SETTINGS_PATH").unwrap_or_else(|_| "data/settings.json".to_string());
    let settings = Arc::new(SettingsStore::new(settings_path));

    let app = configure_app(storage, settings);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

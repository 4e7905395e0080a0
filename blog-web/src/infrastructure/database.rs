use crate::data::memory_post_repository::InMemoryPostRepository;
use crate::data::post_repository::{PostRepository, PostgresPostRepository};
use crate::infrastructure::config::{AppConfig, MEMORY_DATABASE_URL};
use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to the database")?;

    tracing::info!(
        "Database connection pool created (max_connections={})",
        max_connections
    );
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run database migrations")?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// Picks the post store named by `DATABASE_URL`, migrating Postgres first.
pub async fn connect_post_repository(
    config: &AppConfig,
) -> Result<Arc<dyn PostRepository + Send + Sync>> {
    if config.database_url == MEMORY_DATABASE_URL {
        tracing::warn!("Using in-memory post store; posts are lost on restart");
        return Ok(Arc::new(InMemoryPostRepository::new()));
    }

    tracing::info!("Connecting to database...");
    let pool = create_pool(&config.database_url, config.database_max_connections).await?;

    tracing::info!("Running database migrations...");
    run_migrations(&pool).await?;

    Ok(Arc::new(PostgresPostRepository::new(pool)))
}

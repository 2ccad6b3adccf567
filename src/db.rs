use anyhow::Context;
use sqlx::MySqlPool;
use tracing::info;

pub async fn init_db(database_url: &str) -> anyhow::Result<MySqlPool> {
    MySqlPool::connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Applies the SQL files under `migrations/`, embedded at compile time.
pub async fn run_migrations(pool: &MySqlPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply database migrations")?;

    info!("Database migrations applied");
    Ok(())
}

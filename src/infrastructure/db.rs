use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use super::config::Config;

pub type PgPool = sqlx::Pool<sqlx::Postgres>;

pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.database.url)
        .await
        .with_context(|| "failed to connect to PostgreSQL")
}

pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .with_context(|| "failed to run database migrations")
}

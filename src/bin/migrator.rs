use dotenvy::dotenv;
use student_roster::{
    infrastructure::{config::Config, db},
    telemetry,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    telemetry::init();

    let config = Config::from_env()?;
    if !config.store.uses_database() {
        anyhow::bail!(
            "store provider {:?} has no database to migrate",
            config.store.provider
        );
    }

    let pool = db::connect(&config).await?;
    db::run_migrations(&pool).await?;

    info!("student table migrations completed");

    Ok(())
}

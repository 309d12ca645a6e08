use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    domain::models::{NewStudent, Student, StudentId},
    infrastructure::{config::Config, db},
    services::errors::ServiceError,
};

mod memory;
mod postgres;

pub use memory::MemoryStudentStore;
pub use postgres::PgStudentStore;

/// Persistence seam for the `student` table.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Student>, ServiceError>;
    async fn get(&self, id: StudentId) -> Result<Option<Student>, ServiceError>;
    /// First record (lowest id) whose `sex` equals the key.
    async fn find_by_sex(&self, sex: &str) -> Result<Option<Student>, ServiceError>;
    /// Returns `None` when no record has the id.
    async fn update_email(
        &self,
        id: StudentId,
        email: &str,
    ) -> Result<Option<Student>, ServiceError>;
    async fn insert(&self, student: NewStudent) -> Result<Student, ServiceError>;
}

pub async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn StudentStore>> {
    match config.store.provider.as_str() {
        "postgres" => {
            let pool = db::connect(config).await?;
            db::run_migrations(&pool).await?;
            info!("database migrations completed successfully");
            Ok(Arc::new(PgStudentStore::new(pool)))
        }
        "memory" => Ok(Arc::new(MemoryStudentStore::default())),
        other => anyhow::bail!("unsupported store provider: {other}"),
    }
}

use async_trait::async_trait;

use super::StudentStore;
use crate::{
    domain::models::{NewStudent, Student, StudentId},
    infrastructure::db::PgPool,
    services::errors::ServiceError,
};

pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list_all(&self) -> Result<Vec<Student>, ServiceError> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT id, firstname, lastname, email, sex FROM student ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: StudentId) -> Result<Option<Student>, ServiceError> {
        let row = sqlx::query_as::<_, Student>(
            "SELECT id, firstname, lastname, email, sex FROM student WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_sex(&self, sex: &str) -> Result<Option<Student>, ServiceError> {
        let row = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, firstname, lastname, email, sex
            FROM student
            WHERE sex = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(sex)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_email(
        &self,
        id: StudentId,
        email: &str,
    ) -> Result<Option<Student>, ServiceError> {
        let row = sqlx::query_as::<_, Student>(
            "UPDATE student SET email = $1 WHERE id = $2 RETURNING id, firstname, lastname, email, sex",
        )
        .bind(email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, student: NewStudent) -> Result<Student, ServiceError> {
        let row = sqlx::query_as::<_, Student>(
            "INSERT INTO student (firstname, lastname, email, sex)
             VALUES ($1,$2,$3,$4)
             RETURNING id, firstname, lastname, email, sex",
        )
        .bind(student.firstname)
        .bind(student.lastname)
        .bind(student.email)
        .bind(student.sex)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

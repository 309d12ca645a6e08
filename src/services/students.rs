use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    domain::models::{NewStudent, Student, StudentId},
    infrastructure::state::AppState,
};

use super::errors::ServiceError;

/// Read and write access to student records.
pub struct StudentService {
    state: Arc<AppState>,
}

impl StudentService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub async fn list_all(&self) -> Result<Vec<Student>, ServiceError> {
        let students = self.state.store.list_all().await?;
        debug!(count = students.len(), "listed students");
        Ok(students)
    }

    pub async fn get_by_id(&self, id: StudentId) -> Result<Student, ServiceError> {
        self.state
            .store
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// A miss is an empty result, not an error.
    pub async fn get_by_sex(&self, sex: &str) -> Result<Option<Student>, ServiceError> {
        self.state.store.find_by_sex(sex).await
    }

    pub async fn update_email(&self, id: StudentId, email: &str) -> Result<Student, ServiceError> {
        let student = self
            .state
            .store
            .update_email(id, email)
            .await?
            .ok_or(ServiceError::NotFound)?;
        info!(student_id = student.id, "student email updated");
        Ok(student)
    }

    pub async fn create_student(&self, student: NewStudent) -> Result<Student, ServiceError> {
        let student = self.state.store.insert(student).await?;
        info!(student_id = student.id, "student created");
        Ok(student)
    }
}

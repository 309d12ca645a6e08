use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::StudentStore;
use crate::{
    domain::models::{NewStudent, Student, StudentId},
    services::errors::ServiceError,
};

/// In-process store; ids are handed out from 1 upwards and never reused.
#[derive(Default)]
pub struct MemoryStudentStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: StudentId,
    rows: BTreeMap<StudentId, Student>,
}

impl MemoryStudentStore {
    pub fn with_students(students: impl IntoIterator<Item = NewStudent>) -> Self {
        let store = Self::default();
        {
            let mut inner = store.inner.write();
            for student in students {
                inner.push(student);
            }
        }
        store
    }
}

impl Inner {
    fn push(&mut self, new: NewStudent) -> Student {
        self.last_id += 1;
        let student = Student::from_new(self.last_id, new);
        self.rows.insert(student.id, student.clone());
        student
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list_all(&self) -> Result<Vec<Student>, ServiceError> {
        Ok(self.inner.read().rows.values().cloned().collect())
    }

    async fn get(&self, id: StudentId) -> Result<Option<Student>, ServiceError> {
        Ok(self.inner.read().rows.get(&id).cloned())
    }

    async fn find_by_sex(&self, sex: &str) -> Result<Option<Student>, ServiceError> {
        Ok(self
            .inner
            .read()
            .rows
            .values()
            .find(|student| student.sex == sex)
            .cloned())
    }

    async fn update_email(
        &self,
        id: StudentId,
        email: &str,
    ) -> Result<Option<Student>, ServiceError> {
        let mut inner = self.inner.write();
        Ok(inner.rows.get_mut(&id).map(|student| {
            student.email = email.to_string();
            student.clone()
        }))
    }

    async fn insert(&self, student: NewStudent) -> Result<Student, ServiceError> {
        Ok(self.inner.write().push(student))
    }
}

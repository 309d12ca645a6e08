use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, Error, ErrorExtensions, Object, Result, Schema, SimpleObject, ID,
};
use tracing::{debug, warn};

use crate::{
    domain::models::Student,
    infrastructure::state::AppState,
    services::{errors::ServiceError, students::StudentService},
    validation::rules::{parse_student_id, require_student_id},
};

pub type StudentSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Application state is attached to each request, not to the schema.
pub fn build_schema() -> StudentSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish()
}

/// Public projection of a student; `sex` stays server-side.
#[derive(Debug, Clone, SimpleObject)]
pub struct StudentType {
    pub id: ID,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl From<Student> for StudentType {
    fn from(student: Student) -> Self {
        Self {
            id: ID(student.id.to_string()),
            firstname: student.firstname,
            lastname: student.lastname,
            email: student.email,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct StudentMutation {
    pub latest_student: StudentType,
}

impl ErrorExtensions for ServiceError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", self.code()))
    }
}

fn service(ctx: &Context<'_>) -> Result<StudentService> {
    let state = ctx.data::<Arc<AppState>>()?;
    Ok(StudentService::new(Arc::clone(state)))
}

fn to_graphql(err: ServiceError) -> Error {
    if matches!(
        err,
        ServiceError::StoreUnavailable(_) | ServiceError::Internal(_)
    ) {
        warn!(error = %err, "graphql resolver failed");
    }
    err.extend()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn all_students(&self, ctx: &Context<'_>) -> Result<Vec<StudentType>> {
        debug!("resolving allStudents");
        let students = service(ctx)?.list_all().await.map_err(to_graphql)?;
        Ok(students.into_iter().map(StudentType::from).collect())
    }

    async fn category_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<StudentType> {
        let id = parse_student_id(&id).map_err(to_graphql)?;
        let student = service(ctx)?.get_by_id(id).await.map_err(to_graphql)?;
        Ok(student.into())
    }

    async fn category_by_sex(&self, ctx: &Context<'_>, sex: String) -> Result<Option<StudentType>> {
        let student = service(ctx)?.get_by_sex(&sex).await.map_err(to_graphql)?;
        Ok(student.map(StudentType::from))
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn update_email(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        email: String,
    ) -> Result<StudentMutation> {
        let id = require_student_id(id.as_ref().map(|id| id.as_str())).map_err(to_graphql)?;
        let student = service(ctx)?
            .update_email(id, &email)
            .await
            .map_err(to_graphql)?;
        Ok(StudentMutation {
            latest_student: student.into(),
        })
    }
}

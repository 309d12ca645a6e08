use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::Html};
use tracing::warn;

use super::templates::{error_page, send_page, test_page, StudentRows};
use crate::{
    infrastructure::state::AppState,
    services::{errors::ServiceError, students::StudentService},
};

pub const BACKEND_GREETING: &str = "hello from backend";

pub async fn test() -> Html<String> {
    Html(send_page(BACKEND_GREETING).into_string())
}

pub async fn test_backend() -> Html<String> {
    Html(test_page(BACKEND_GREETING).into_string())
}

pub async fn test_db(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let rows = StudentService::new(state)
        .list_all()
        .await
        .map_err(to_response)?;
    Ok(Html(test_page(StudentRows(&rows)).into_string()))
}

fn to_response(err: ServiceError) -> (StatusCode, Html<String>) {
    warn!(error = %err, "student table query failed");
    (err.status_code(), Html(error_page(&err).into_string()))
}

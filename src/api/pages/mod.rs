use axum::{routing::get, Router};

pub mod diagnostics;
pub mod send;
pub mod templates;

pub fn router() -> Router {
    Router::new()
        .route("/send/:email", get(send::send).post(send::send))
        .route("/test", get(diagnostics::test))
        .route("/test_backend", get(diagnostics::test_backend))
        .route("/test_db", get(diagnostics::test_db))
}

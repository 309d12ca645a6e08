//! GraphQL endpoint over the student roster, executed with async-graphql.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::Extension,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};

use crate::infrastructure::{config::Config, state::AppState};

pub mod schema;

pub use schema::{build_schema, StudentSchema};

pub fn router(config: &Config) -> Router {
    let route = if config.graphql.graphiql {
        get(graphiql).post(handler)
    } else {
        post(handler)
    };

    Router::new()
        .route("/graphql", route)
        .layer(Extension(build_schema()))
}

async fn handler(
    Extension(schema): Extension<StudentSchema>,
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(schema.execute(request.data(state)).await)
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

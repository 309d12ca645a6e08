use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

pub mod graphql;
pub mod health;
pub mod pages;

use crate::infrastructure::config::Config;

pub fn build_router(config: Arc<Config>) -> Router {
    let router = Router::new()
        .route("/health", get(health::healthcheck))
        .merge(pages::router())
        .merge(graphql::router(config.as_ref()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(config.as_ref()) {
        router.layer(cors)
    } else {
        router
    }
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "not_found"})),
    )
}

fn cors_layer(config: &Config) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .app
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%origin, error = %err, "ignoring invalid cors origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_returns_expected_payload() {
        let (status, Json(body)) = not_found().await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "not_found" }));
    }

    #[test]
    fn cors_disabled_without_valid_origins() {
        let mut config = Config::in_memory();
        assert!(cors_layer(&config).is_none());

        config.app.cors_origins = vec!["bad\norigin".to_string()];
        assert!(cors_layer(&config).is_none());

        config.app.cors_origins = vec!["http://localhost:3000".to_string()];
        assert!(cors_layer(&config).is_some());
    }
}

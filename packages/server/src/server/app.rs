//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::routes::{
    graphql_batch_handler, graphql_handler, graphql_playground, health_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router.
///
/// The GraphQL schema is constructed once here and held as read-only state
/// for the lifetime of the process.
pub fn build_app(pool: PgPool, allowed_origins: &[String]) -> Router {
    let schema = Arc::new(create_schema());
    let context = GraphQLContext::new(pool.clone());
    let state = AppState { db_pool: pool };

    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE])
    };

    Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler))
        .route("/health", get(health_handler))
        .layer(Extension(context))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

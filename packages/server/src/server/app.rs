//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::{LocalBlobStorage, ServerDeps};
use crate::server::auth::JwtService;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    generate_contract_pdf_handler, health_handler, serve_file_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
    pub jwt_service: Arc<JwtService>,
    /// Concrete blob storage, needed by the file route for signature
    /// verification.
    pub files: Arc<LocalBlobStorage>,
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    let jwt_service = state.jwt_service.clone();

    Router::new()
        .route("/health", get(health_handler))
        .route("/contracts/:contract_id/pdf", post(generate_contract_pdf_handler))
        .route("/files/*path", get(serve_file_handler))
        .layer(middleware::from_fn(move |request, next| {
            jwt_auth_middleware(jwt_service.clone(), request, next)
        }))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE]),
        )
}

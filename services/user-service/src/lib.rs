use axum::{routing::get, Router};
use tower::ServiceBuilder;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;

pub use config::Config;

pub fn create_app() -> Router {
    Router::new()
        .route("/users", get(handlers::users::list_users))
        .route("/health", get(handlers::health::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace_layer())
                .layer(middleware::cors_layer()),
        )
}

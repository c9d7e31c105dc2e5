mod error;
mod extract;
mod handlers;

use std::any::Any;

use axum::{
    error_handling::HandleErrorLayer,
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    BoxError, Router,
};
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::db::Database;

pub use error::ApiError;
pub use extract::JsonBody;

/// Path prefix under which every route is mounted.
pub const API_PREFIX: &str = "/api/v0";

pub fn create_router(db: Database) -> Router {
    create_router_with_config(db, &ServerConfig::local())
}

pub fn create_router_with_config(db: Database, config: &ServerConfig) -> Router {
    let api = Router::new()
        // Projects
        .route("/project", get(handlers::list_projects))
        .route("/project", post(handlers::create_project))
        .route("/project", patch(handlers::update_project))
        .route("/project/{id}", get(handlers::get_project))
        .route("/project/{id}", delete(handlers::delete_project))
        .route("/project/{id}/task", get(handlers::list_project_tasks))
        .route("/project/{id}/note", get(handlers::list_project_notes))
        // Tasks
        .route("/task", get(handlers::list_tasks))
        .route("/task", post(handlers::create_task))
        .route("/task", patch(handlers::update_task))
        .route("/task/{id}", get(handlers::get_task))
        .route("/task/{id}", delete(handlers::delete_task))
        // Notes
        .route("/note", get(handlers::list_notes))
        .route("/note", post(handlers::create_note))
        .route("/note", patch(handlers::update_note))
        .route("/note/{id}", get(handlers::get_note))
        .route("/note/{id}", delete(handlers::delete_note))
        // Liveness
        .route("/service-status", get(handlers::service_status));

    Router::new()
        .nest(API_PREFIX, api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(HandleErrorLayer::new(handle_layer_error))
                .timeout(config.request_timeout)
                .layer(cors_layer(config)),
        )
        .with_state(db)
}

async fn handle_layer_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    ApiError::Internal("internal server error".to_string()).into_response()
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let Some(origins) = &config.cors_origins else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

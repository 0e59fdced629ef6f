//! REST surface for tasks and users.
//!
//! Handlers translate JSON bodies into service requests and map every
//! service error through [`error::ApiError`], the single boundary that picks
//! status codes and renders `{statusCode, message, timestamp}` bodies.

pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub use error::ApiError;
pub use state::AppState;

/// Creates the router for every resource.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        // Tasks API
        .route(
            "/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            get(handlers::tasks::get_task)
                .put(handlers::tasks::edit_task)
                .delete(handlers::tasks::delete_task),
        )
        .route("/tasks/{id}/assign", post(handlers::tasks::assign_task))
        .route(
            "/tasks/{id}/status",
            put(handlers::tasks::update_task_status),
        )
        // Users API
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/users/{id}", get(handlers::users::get_user))
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serves the API on `listener` until Ctrl-C is received.
///
/// # Errors
///
/// Returns an I/O error when the listener fails.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "taskhub API listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

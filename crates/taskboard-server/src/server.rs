use std::time::Instant;

use axum::extract::State;
use axum::middleware;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use taskboard_core::ApiKey;
use taskboard_store::Database;
use tokio::sync::oneshot;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::config::ServerConfig;
use crate::handlers::{categories, tasks, theme};
use crate::health::{self, HealthResponse};

/// Shared application state passed to Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub api_key: Option<ApiKey>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(db: Database, api_key: Option<ApiKey>) -> Self {
        Self {
            db,
            api_key,
            start_time: Instant::now(),
        }
    }
}

/// Build the Axum router with all routes. Every route, including unknown
/// paths, sits behind the api-key gate.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route("/tasks/{id}", put(tasks::update).delete(tasks::delete))
        .route("/tasks/{id}/assign-category", post(tasks::assign_category))
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/{id}",
            get(categories::get)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route("/theme", get(theme::get).post(theme::set))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the listener and serve in a background task. Returns a handle that
/// triggers graceful shutdown.
pub async fn start(config: ServerConfig, db: Database) -> Result<ServerHandle, std::io::Error> {
    if config.api_key.is_none() {
        tracing::warn!("no API key configured; every request will fail with 500");
    }

    let state = AppState::new(db, config.api_key.clone());
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let local_addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let result = axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
        if let Err(e) = result {
            tracing::error!(error = %e, "server exited with error");
        }
    });

    tracing::info!(addr = %local_addr, "taskboard server started");

    Ok(ServerHandle {
        port: local_addr.port(),
        shutdown_tx,
        server,
    })
}

/// Handle returned by `start()`; keeps the server task alive.
pub struct ServerHandle {
    pub port: u16,
    shutdown_tx: oneshot::Sender<()>,
    server: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Stop accepting connections, let in-flight requests finish, and wait
    /// for the server task to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        if let Err(e) = self.server.await {
            tracing::error!(error = %e, "server task panicked");
        }
        tracing::info!("taskboard server stopped");
    }
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health::health_check(state.start_time))
}

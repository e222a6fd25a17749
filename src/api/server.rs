use anyhow::Context;
use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::users;
use crate::config::Config;
use crate::db;
use crate::db::repo::{self, SqliteUserStore};
use crate::service::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Opens the store, serves until a shutdown signal, then closes the store.
pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let pool = db::connect(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database_url))?;
    repo::create_user_table(&pool)
        .await
        .context("Failed to create users table")?;
    info!(url = %config.database_url, "Database successfully connected");

    let store = Arc::new(SqliteUserStore::new(pool.clone()));
    let state = Arc::new(AppState {
        users: UserService::new(store),
    });

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Server open and running on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    pool.close().await;
    info!("Database connection closed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

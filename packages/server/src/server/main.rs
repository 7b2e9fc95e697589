// Main entry point for the job board API server

use std::sync::Arc;

use anyhow::{Context, Result};
use job_board_core::kernel::{
    spawn_health_probe, BaseJobStore, ConnectionMonitor, PostgresJobStore, ServerKernel, MIGRATOR,
};
use job_board_core::server::build_app;
use job_board_core::{Config, StoreKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,job_board_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Job Board API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(store = ?config.store, "Configuration loaded");

    let (kernel, probe) = match config.store {
        StoreKind::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = PostgresJobStore::connect(
                &config.database_url,
                config.max_connections,
                config.selection_timeout,
            )
            .await
            .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            tracing::info!("Running database migrations...");
            MIGRATOR
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations complete");

            let monitor = ConnectionMonitor::connected();
            let store: Arc<dyn BaseJobStore> = Arc::new(PostgresJobStore::new(
                pool,
                config.selection_timeout,
                monitor.clone(),
            ));
            let probe = spawn_health_probe(
                store.clone(),
                monitor.clone(),
                config.health_probe_interval,
            );
            (Arc::new(ServerKernel::new(store, monitor)), Some(probe))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory job store; postings are lost on restart");
            (Arc::new(ServerKernel::in_memory()), None)
        }
    };

    let app = build_app(kernel.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped, releasing storage");
    kernel.shutdown().await;
    if let Some(probe) = probe {
        let _ = probe.await;
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl+c");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c interrupt, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

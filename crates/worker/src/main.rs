use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reachout_dispatch::executor::DispatchExecutor;
use reachout_queue::worker::DispatchWorker;

/// Default interval between queue polls when no job is ready.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reachout_worker=debug,reachout_queue=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = reachout_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    reachout_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let poll_interval_secs: u64 = std::env::var("WORKER_POLL_INTERVAL_SECS")
        .unwrap_or_else(|_| DEFAULT_POLL_INTERVAL_SECS.to_string())
        .parse()
        .expect("WORKER_POLL_INTERVAL_SECS must be a valid u64");

    let executor = DispatchExecutor::new(pool.clone());
    let worker = DispatchWorker::new(pool, Arc::new(executor))
        .with_poll_interval(Duration::from_secs(poll_interval_secs));

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_cancel.cancel();
    });

    tracing::info!(poll_interval_secs, "Dispatch worker starting");
    worker.run(cancel).await;
    tracing::info!("Dispatch worker stopped");
}

/// Wait for SIGINT (Ctrl-C) or SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

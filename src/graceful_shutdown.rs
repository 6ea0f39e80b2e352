use std::future::Future;

use tokio::signal;
use tracing::{error, warn};

async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            error!("Failed to listen for SIGTERM: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    tokio::select! {
        _ = ctrl_c() => {
            warn!("🛑 Ctrl+C received, initiating shutdown...")
        },
        _ = terminate() => {
            warn!("🛑 SIGTERM received, initiating shutdown...");
        }
    }
}

/// Runs `server` until it exits on its own or a shutdown signal arrives.
pub async fn run_until_shutdown<F>(server: F) -> std::io::Result<()>
where
    F: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}

// backend/src/lib.rs

//! nordnotes back-end: serves static system information under `/api/v1/info`.

use std::future::Future;

use tokio::{net::TcpListener, signal};

pub mod config;
pub mod models;
pub mod routes;

pub use config::Config;
pub use routes::router;

/// Serves the API on an already bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("API listening on http://{addr}");

    axum::serve(listener, router().into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("API stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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
        _ = ctrl_c => tracing::info!("received Ctrl+C"),
        _ = terminate => tracing::info!("received terminate signal"),
    }
}

//! HTTP server lifecycle.
//!
//! `run` serves in the foreground until Ctrl-C. `start_server_on` binds,
//! spawns the server in a background task and returns a handle with a
//! shutdown channel.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::api::router::api_router;
use crate::api::types::AppContext;
use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Handle to a server running in a background task.
pub struct ServerHandle {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Signal graceful shutdown and wait for the server task to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Server shutdown signal sent");
        }
        let _ = (&mut self.task).await;
    }
}

async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Serve until Ctrl-C.
pub async fn run(config: &Config, ctx: AppContext) -> Result<(), ServerError> {
    let listener = bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    let app = api_router(ctx, &config.cors_origin);

    tracing::info!(%addr, "Server running");

    serve(listener, app, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown requested");
    })
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind `addr` (port 0 picks an ephemeral port) and serve in the background.
pub async fn start_server_on(
    addr: SocketAddr,
    ctx: AppContext,
    cors_origin: &str,
) -> Result<ServerHandle, ServerError> {
    let listener = bind(addr).await?;
    let addr = listener.local_addr()?;
    let app = api_router(ctx, cors_origin);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
        };

        tracing::info!(%addr, "Server started");
        if let Err(e) = serve(listener, app, shutdown_signal).await {
            tracing::error!("Server error: {e}");
        }
        tracing::info!("Server stopped");
    });

    Ok(ServerHandle {
        addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}

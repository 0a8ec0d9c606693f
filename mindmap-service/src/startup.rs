//! Application startup and lifecycle management.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use mindmap_core::error::AppError;
use mindmap_core::gateway::{CompletionProvider, GroqCompletionProvider};
use mindmap_core::handlers::{build_router, AppState};

use crate::config::ServiceConfig;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn CompletionProvider> =
            Arc::new(GroqCompletionProvider::new(config.relay.groq.clone()));
        tracing::info!(
            model = %config.relay.groq.model,
            "Groq completion provider initialized"
        );

        let state = AppState {
            provider,
            normalize_headings: config.relay.normalize_headings,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::Unexpected(e.into())
        })?;
        let port = listener
            .local_addr()
            .map_err(|e| AppError::Unexpected(e.into()))?
            .port();

        tracing::info!("Mind map service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

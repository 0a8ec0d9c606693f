use mindmap_core::observability::{init_metrics, init_tracing};
use mindmap_service::config::ServiceConfig;
use mindmap_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    init_tracing("mindmap-service", "info");

    // Initialize metrics
    init_metrics();

    let config = ServiceConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}

//! Metrics collection for the mind map relay.

use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize metrics collection. Call once, from the process entry point;
/// per-invocation deployments skip it and `/metrics` degrades gracefully.
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record one upstream completion call.
pub fn record_provider_call(provider: &str, status: &str) {
    let labels = [
        ("provider", provider.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("mindmap_provider_calls_total", &labels).increment(1);
}

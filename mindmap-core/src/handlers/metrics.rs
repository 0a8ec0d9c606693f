use crate::observability;

/// Expose metrics in Prometheus text format.
pub async fn metrics() -> String {
    observability::get_metrics()
}

//! Metrics collection and exposition.
//!
//! # Metrics
//! - `doghouse_requests_total` (counter): requests by method, status, endpoint
//! - `doghouse_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Endpoint label is the stable route name, never the raw path, to keep
//!   cardinality bounded

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`. Failure to install
/// is logged, not fatal: the service runs without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, endpoint: &str, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();
    metrics::counter!(
        "doghouse_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "endpoint" => endpoint.to_string(),
    )
    .increment(1);
    metrics::histogram!(
        "doghouse_request_duration_seconds",
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
    )
    .record(elapsed);
}

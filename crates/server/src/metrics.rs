//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the cabinet server:
//! - HTTP request metrics (latency, counts, errors)
//! - Media lookups
//! - Orchestrator state (collected dynamically)

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "slotbox_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("slotbox_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "slotbox_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Media Metrics
// =============================================================================

/// Media lookups by kind and result.
pub static MEDIA_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("slotbox_media_requests_total", "Media file lookups"),
        &["kind", "result"], // result: "found", "missing"
    )
    .unwrap()
});

// =============================================================================
// Orchestrator Metrics (collected dynamically)
// =============================================================================

/// Actuator state (1 = spinning, 0 = idle).
pub static ACTUATOR_SPINNING: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "slotbox_actuator_spinning",
        "Whether the reel motor is currently spinning (1) or idle (0)",
    )
    .unwrap()
});

/// Current win ratio in thousandths.
pub static WIN_RATIO_PERMILLE: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "slotbox_win_ratio_permille",
        "Configured win ratio in thousandths",
    )
    .unwrap()
});

/// Position of the outcome cycle cursor.
pub static CYCLE_POSITION: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "slotbox_cycle_position",
        "Index of the next slot in the outcome cycle",
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Media
    registry
        .register(Box::new(MEDIA_REQUESTS.clone()))
        .unwrap();

    // Orchestrator
    registry
        .register(Box::new(ACTUATOR_SPINNING.clone()))
        .unwrap();
    registry
        .register(Box::new(WIN_RATIO_PERMILLE.clone()))
        .unwrap();
    registry
        .register(Box::new(CYCLE_POSITION.clone()))
        .unwrap();

    // Core metrics (plays, queue, actuator, settings)
    for metric in slotbox_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Collect dynamic metrics from current application state.
///
/// Called before encoding so gauges reflect the orchestrator right now.
pub fn collect_dynamic_metrics(state: &crate::state::AppState) {
    let status = state.orchestrator().status();
    ACTUATOR_SPINNING.set(i64::from(status.spinning));
    WIN_RATIO_PERMILLE.set((status.win_ratio * 1000.0).round() as i64);
    CYCLE_POSITION.set(status.cycle_position as i64);
}

/// Normalize a path for metric labels.
///
/// Media kinds collapse to `{kind}` and anything outside the known surfaces
/// (static UI assets) collapses to `/static`, keeping label cardinality fixed.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with("/media/") {
        return "/media/{kind}".to_string();
    }
    let known = path == "/health"
        || path == "/metrics"
        || path == "/settings"
        || path.starts_with("/api/");
    if known {
        path.trim_end_matches('/').to_string()
    } else {
        "/static".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_media() {
        assert_eq!(normalize_path("/media/win"), "/media/{kind}");
        assert_eq!(normalize_path("/media/loose"), "/media/{kind}");
    }

    #[test]
    fn test_normalize_path_api() {
        assert_eq!(normalize_path("/api/next-event"), "/api/next-event");
        assert_eq!(normalize_path("/api/config/"), "/api/config");
    }

    #[test]
    fn test_normalize_path_static_assets() {
        assert_eq!(normalize_path("/"), "/static");
        assert_eq!(normalize_path("/js/reels.js"), "/static");
    }

    #[test]
    fn test_normalize_path_no_ids() {
        assert_eq!(normalize_path("/health"), "/health");
    }

    #[test]
    fn test_encode_metrics_returns_prometheus_format() {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/test", "200"])
            .inc();

        let output = encode_metrics();
        assert!(output.contains("slotbox_http_requests_total"));
        assert!(output.contains("# HELP"));
        assert!(output.contains("# TYPE"));
    }

    #[test]
    fn test_registry_contains_all_metrics() {
        // Prometheus only outputs vector metrics that have a labelled child
        HTTP_REQUEST_DURATION
            .with_label_values(&["GET", "/test", "200"])
            .observe(0.1);
        HTTP_REQUESTS_IN_FLIGHT.set(0);
        MEDIA_REQUESTS.with_label_values(&["win", "found"]).inc();
        ACTUATOR_SPINNING.set(0);
        CYCLE_POSITION.set(0);
        slotbox_core::metrics::PLAYS_TOTAL
            .with_label_values(&["manual", "lose"])
            .inc();

        let output = encode_metrics();

        assert!(output.contains("slotbox_http_request_duration_seconds"));
        assert!(output.contains("slotbox_http_requests_in_flight"));
        assert!(output.contains("slotbox_media_requests_total"));
        assert!(output.contains("slotbox_actuator_spinning"));
        assert!(output.contains("slotbox_cycle_position"));
        assert!(output.contains("slotbox_plays_total"));
        assert!(output.contains("slotbox_pending_events"));
    }
}

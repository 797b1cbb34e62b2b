//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Plays (by trigger source and outcome)
//! - Actuator spins (started, dropped while busy, simulated)
//! - Pending event queue depth

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, IntGauge, Opts};

// =============================================================================
// Plays
// =============================================================================

/// Plays total by source and result.
pub static PLAYS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("slotbox_plays_total", "Total plays handled"),
        &["source", "result"], // source: "sensor", "manual", "simulated"; result: "win", "lose"
    )
    .unwrap()
});

/// Events currently waiting for a consumer.
pub static PENDING_EVENTS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "slotbox_pending_events",
        "Number of play events waiting to be consumed",
    )
    .unwrap()
});

/// Events handed to consumers.
pub static EVENTS_CONSUMED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "slotbox_events_consumed_total",
        "Total play events dequeued by consumers",
    )
    .unwrap()
});

// =============================================================================
// Actuator
// =============================================================================

/// Spin requests by outcome.
pub static SPINS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("slotbox_spins_total", "Total spin requests"),
        &["outcome"], // "started", "busy", "simulated"
    )
    .unwrap()
});

/// Spins that stopped early because the motor driver failed.
pub static SPIN_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "slotbox_spin_failures_total",
        "Total spins aborted by a motor driver error",
    )
    .unwrap()
});

// =============================================================================
// Settings
// =============================================================================

/// Settings updates by result.
pub static SETTINGS_UPDATES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("slotbox_settings_updates_total", "Total settings updates"),
        &["result"], // "saved", "unsaved", "rejected"
    )
    .unwrap()
});

/// Get all core metrics for registration.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Plays
        Box::new(PLAYS_TOTAL.clone()),
        Box::new(PENDING_EVENTS.clone()),
        Box::new(EVENTS_CONSUMED.clone()),
        // Actuator
        Box::new(SPINS_TOTAL.clone()),
        Box::new(SPIN_FAILURES.clone()),
        // Settings
        Box::new(SETTINGS_UPDATES.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_metrics_register_cleanly() {
        let registry = prometheus::Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }
        PLAYS_TOTAL.with_label_values(&["manual", "win"]).inc();
        let families = registry.gather();
        assert!(families
            .iter()
            .any(|f| f.get_name() == "slotbox_plays_total"));
    }
}

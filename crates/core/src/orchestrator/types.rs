//! Types for the event orchestrator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during orchestration.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The requested win ratio is not a finite number.
    #[error("invalid win ratio: {0}")]
    InvalidRatio(f64),
}

/// Current status of the orchestrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrchestratorStatus {
    /// Whether the startup hook has run.
    pub started: bool,
    /// Whether the orchestrator has been shut down.
    pub shut_down: bool,
    /// Events waiting for a consumer.
    pub pending_events: usize,
    /// Actuator implementation ("stepper" or "simulated").
    pub actuator: String,
    /// Whether a spin is in progress.
    pub spinning: bool,
    /// Whether a sensor capability is present.
    pub sensor_present: bool,
    /// Win ratio in effect.
    pub win_ratio: f64,
    /// Length of the outcome cycle.
    pub cycle_size: usize,
    /// Slot the next play will use.
    pub cycle_position: usize,
}

use std::fmt;
use std::sync::Arc;

use crate::orchestrator::TriggerHandle;

use super::HardwareError;

/// Coil states for one step of a four-wire stepper.
pub type PhasePattern = [bool; 4];

/// Drives the coils of the win-indicator motor.
pub trait MotorDriver: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Set every coil output to the given pattern.
    fn energize(&self, pattern: &PhasePattern) -> Result<(), HardwareError>;

    /// De-energize every output. Must be safe to call repeatedly.
    fn disengage(&self) -> Result<(), HardwareError>;
}

/// A beam-break (or similar) input that reports play triggers.
///
/// Implementations own edge detection and debouncing; each accepted edge is
/// posted through the [`TriggerHandle`] given to [`arm`](Self::arm).
pub trait TriggerSensor: Send + Sync {
    fn name(&self) -> &str;

    /// Start delivering triggers to `handle`.
    fn arm(&self, handle: TriggerHandle) -> Result<(), HardwareError>;

    /// Stop delivering triggers and release the input. Idempotent.
    fn disarm(&self);
}

/// Hardware found at startup. Decided once and never re-probed.
#[derive(Clone, Default)]
pub struct HardwareCapabilities {
    pub motor: Option<Arc<dyn MotorDriver>>,
    pub sensor: Option<Arc<dyn TriggerSensor>>,
}

impl HardwareCapabilities {
    /// No hardware at all: simulated spins, no sensor.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_motor(mut self, motor: Arc<dyn MotorDriver>) -> Self {
        self.motor = Some(motor);
        self
    }

    pub fn with_sensor(mut self, sensor: Arc<dyn TriggerSensor>) -> Self {
        self.sensor = Some(sensor);
        self
    }
}

impl fmt::Debug for HardwareCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HardwareCapabilities")
            .field("motor", &self.motor.as_ref().map(|m| m.name().to_string()))
            .field("sensor", &self.sensor.as_ref().map(|s| s.name().to_string()))
            .finish()
    }
}

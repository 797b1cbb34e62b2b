//! Hardware capabilities consumed by the cabinet.
//!
//! Pin-level drivers live outside this crate. They plug in through
//! [`MotorDriver`] and [`TriggerSensor`]; when a capability is missing the
//! cabinet runs degraded (simulated spins, no sensor triggers).

mod error;
mod traits;

pub use error::HardwareError;
pub use traits::{HardwareCapabilities, MotorDriver, PhasePattern, TriggerSensor};

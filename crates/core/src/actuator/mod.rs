//! Win-indicator actuator.
//!
//! A win fires the stepper motor for a fixed time. Spins never queue: a win
//! that arrives while the motor is still turning is dropped. Without a motor
//! driver the actuator only keeps time so behaviour stays consistent in
//! simulation.

mod simulated;
mod stepper;
mod traits;

pub use simulated::SimulatedActuator;
pub use stepper::{StepperActuator, HALF_STEP_SEQUENCE};
pub use traits::{Actuator, SpinOutcome};

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::info;

use crate::hardware::MotorDriver;

/// Create the actuator for the motor capability found at startup.
pub fn create_actuator(motor: Option<Arc<dyn MotorDriver>>, runtime: Handle) -> Arc<dyn Actuator> {
    match motor {
        Some(driver) => {
            info!(driver = driver.name(), "Using stepper actuator");
            Arc::new(StepperActuator::new(driver, runtime))
        }
        None => {
            info!("No motor driver available, spins are simulated");
            Arc::new(SimulatedActuator::new(runtime))
        }
    }
}

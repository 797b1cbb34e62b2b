//! Mock motor driver for testing.

use std::sync::Mutex;

use crate::hardware::{HardwareError, MotorDriver, PhasePattern};

#[derive(Debug, Default)]
struct DriverState {
    energized: Vec<PhasePattern>,
    disengaged: usize,
    /// Remaining successful `energize` calls before failing, if limited.
    fail_after: Option<usize>,
}

/// Mock implementation of the MotorDriver trait.
///
/// Records every coil pattern written and every disengage call, and can be
/// told to start failing after a number of writes.
///
/// # Example
///
/// ```rust,ignore
/// use slotbox_core::testing::MockMotorDriver;
///
/// let driver = Arc::new(MockMotorDriver::new());
/// let actuator = StepperActuator::new(driver.clone(), Handle::current());
///
/// actuator.try_spin_for(Duration::from_millis(50));
/// // ... wait ...
/// assert!(!driver.energized().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MockMotorDriver {
    state: Mutex<DriverState>,
}

impl MockMotorDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every `energize` call after the next `writes` succeed.
    pub fn fail_after(&self, writes: usize) {
        self.state.lock().unwrap().fail_after = Some(writes);
    }

    /// All patterns written so far.
    pub fn energized(&self) -> Vec<PhasePattern> {
        self.state.lock().unwrap().energized.clone()
    }

    /// Number of `disengage` calls.
    pub fn disengage_count(&self) -> usize {
        self.state.lock().unwrap().disengaged
    }
}

impl MotorDriver for MockMotorDriver {
    fn name(&self) -> &str {
        "mock"
    }

    fn energize(&self, pattern: &PhasePattern) -> Result<(), HardwareError> {
        let mut state = self.state.lock().unwrap();
        match state.fail_after {
            Some(0) => {
                return Err(HardwareError::OutputFailed {
                    driver: "mock".to_string(),
                    message: "simulated write failure".to_string(),
                })
            }
            Some(ref mut remaining) => *remaining -= 1,
            None => {}
        }
        state.energized.push(*pattern);
        Ok(())
    }

    fn disengage(&self) -> Result<(), HardwareError> {
        self.state.lock().unwrap().disengaged += 1;
        Ok(())
    }
}

//! Hand-fired trigger sensor for testing.

use std::sync::Mutex;

use crate::hardware::{HardwareError, TriggerSensor};
use crate::orchestrator::TriggerHandle;

/// A TriggerSensor that fires only when a test calls [`fire`](Self::fire).
///
/// Stands in for a beam-break input: once armed it posts `sensor` triggers
/// through the handle it was given, from whatever thread calls `fire`.
#[derive(Debug, Default)]
pub struct ManualSensor {
    handle: Mutex<Option<TriggerHandle>>,
    arm_count: Mutex<usize>,
    fail_arm: bool,
}

impl ManualSensor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sensor whose `arm` always fails.
    pub fn broken() -> Self {
        Self {
            fail_arm: true,
            ..Self::default()
        }
    }

    /// Simulate a beam break. Returns false if the sensor is not armed.
    pub fn fire(&self) -> bool {
        match self.handle.lock().unwrap().as_ref() {
            Some(handle) => handle.sensor_triggered(),
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.lock().unwrap().is_some()
    }

    /// How many times `arm` has been called.
    pub fn arm_count(&self) -> usize {
        *self.arm_count.lock().unwrap()
    }
}

impl TriggerSensor for ManualSensor {
    fn name(&self) -> &str {
        "manual-test"
    }

    fn arm(&self, handle: TriggerHandle) -> Result<(), HardwareError> {
        *self.arm_count.lock().unwrap() += 1;
        if self.fail_arm {
            return Err(HardwareError::Sensor("simulated arm failure".to_string()));
        }
        *self.handle.lock().unwrap() = Some(handle);
        Ok(())
    }

    fn disarm(&self) {
        self.handle.lock().unwrap().take();
    }
}

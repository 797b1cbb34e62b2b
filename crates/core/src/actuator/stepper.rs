//! Stepper motor actuator (ULN2003 + 28BYJ-48 style four-coil motor).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::hardware::{HardwareError, MotorDriver, PhasePattern};
use crate::metrics::{SPINS_TOTAL, SPIN_FAILURES};

use super::traits::{Actuator, SpinOutcome};

/// Half-step coil sequence, one full electrical cycle.
pub const HALF_STEP_SEQUENCE: [PhasePattern; 8] = [
    [true, false, false, false],
    [true, true, false, false],
    [false, true, false, false],
    [false, true, true, false],
    [false, false, true, false],
    [false, false, true, true],
    [false, false, false, true],
    [true, false, false, true],
];

/// Delay between half-steps.
const STEP_DELAY: Duration = Duration::from_millis(2);

/// Disengages the motor and clears the busy flag when the spin task ends,
/// whether it finishes, fails or is cancelled with its runtime.
struct SpinGuard {
    driver: Arc<dyn MotorDriver>,
    busy: Arc<AtomicBool>,
}

impl Drop for SpinGuard {
    fn drop(&mut self) {
        if let Err(e) = self.driver.disengage() {
            warn!(driver = self.driver.name(), "Failed to disengage motor: {}", e);
        }
        self.busy.store(false, Ordering::Release);
    }
}

/// Drives a real motor through a [`MotorDriver`], one spin at a time.
pub struct StepperActuator {
    driver: Arc<dyn MotorDriver>,
    busy: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    runtime: Handle,
    step_delay: Duration,
}

impl StepperActuator {
    pub fn new(driver: Arc<dyn MotorDriver>, runtime: Handle) -> Self {
        Self {
            driver,
            busy: Arc::new(AtomicBool::new(false)),
            stop: Arc::new(AtomicBool::new(false)),
            runtime,
            step_delay: STEP_DELAY,
        }
    }

    /// Override the half-step delay.
    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }
}

/// Run whole half-step cycles until `duration` has passed or `stop` is set.
///
/// `stop` is checked before every half-step.
async fn drive(
    driver: &dyn MotorDriver,
    duration: Duration,
    step_delay: Duration,
    stop: &AtomicBool,
) -> Result<(), HardwareError> {
    let deadline = Instant::now() + duration;
    while Instant::now() < deadline {
        for pattern in HALF_STEP_SEQUENCE.iter() {
            if stop.load(Ordering::Acquire) {
                debug!("Spin stopped early");
                return Ok(());
            }
            driver.energize(pattern)?;
            tokio::time::sleep(step_delay).await;
        }
    }
    Ok(())
}

impl Actuator for StepperActuator {
    fn kind(&self) -> &'static str {
        "stepper"
    }

    fn try_spin_for(&self, duration: Duration) -> SpinOutcome {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Motor busy, spin dropped");
            SPINS_TOTAL.with_label_values(&["busy"]).inc();
            return SpinOutcome::Busy;
        }

        self.stop.store(false, Ordering::Release);
        let guard = SpinGuard {
            driver: Arc::clone(&self.driver),
            busy: Arc::clone(&self.busy),
        };
        let driver = Arc::clone(&self.driver);
        let stop = Arc::clone(&self.stop);
        let step_delay = self.step_delay;

        self.runtime.spawn(async move {
            let _guard = guard;
            if let Err(e) = drive(driver.as_ref(), duration, step_delay, &stop).await {
                warn!(driver = driver.name(), "Spin aborted: {}", e);
                SPIN_FAILURES.inc();
            }
        });

        SPINS_TOTAL.with_label_values(&["started"]).inc();
        debug!(duration_ms = duration.as_millis() as u64, "Spin started");
        SpinOutcome::Started
    }

    fn is_spinning(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Stop any running spin and disengage the outputs.
    fn release(&self) {
        self.stop.store(true, Ordering::Release);
        match self.driver.disengage() {
            Ok(()) => info!(driver = self.driver.name(), "Motor outputs released"),
            Err(e) => warn!(driver = self.driver.name(), "Failed to release motor: {}", e),
        }
    }
}

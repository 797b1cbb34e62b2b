//! Actuator used when no motor driver is present.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::metrics::SPINS_TOTAL;

use super::traits::{Actuator, SpinOutcome};

struct ActiveGuard(Arc<AtomicUsize>);

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Keeps spin timing without moving anything.
///
/// There is no motor to protect, so overlapping spins are all accepted.
pub struct SimulatedActuator {
    active: Arc<AtomicUsize>,
    runtime: Handle,
}

impl SimulatedActuator {
    pub fn new(runtime: Handle) -> Self {
        Self {
            active: Arc::new(AtomicUsize::new(0)),
            runtime,
        }
    }

    /// Number of simulated spins still running.
    pub fn active_spins(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }
}

impl Actuator for SimulatedActuator {
    fn kind(&self) -> &'static str {
        "simulated"
    }

    fn try_spin_for(&self, duration: Duration) -> SpinOutcome {
        self.active.fetch_add(1, Ordering::AcqRel);
        let guard = ActiveGuard(Arc::clone(&self.active));
        self.runtime.spawn(async move {
            let _guard = guard;
            tokio::time::sleep(duration).await;
        });
        SPINS_TOTAL.with_label_values(&["simulated"]).inc();
        SpinOutcome::Simulated
    }

    fn is_spinning(&self) -> bool {
        self.active_spins() > 0
    }

    fn release(&self) {}
}

//! Thread-safe cursor over the outcome cycle.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::cycle::{build_cycle, clamp_ratio};

#[derive(Debug)]
struct CycleState {
    ratio: f64,
    pattern: Vec<bool>,
    cursor: usize,
}

impl CycleState {
    fn rebuild(&mut self, cycle_size: usize, ratio: f64) {
        self.ratio = clamp_ratio(ratio);
        self.pattern = build_cycle(cycle_size, self.ratio);
        self.cursor %= self.pattern.len();
    }
}

/// Hands out pre-committed win/lose outcomes one slot at a time.
///
/// All reads and writes go through one mutex; every call to [`next`] consumes
/// a distinct slot even under concurrent callers.
///
/// [`next`]: OutcomeScheduler::next
#[derive(Debug)]
pub struct OutcomeScheduler {
    state: Mutex<CycleState>,
}

impl OutcomeScheduler {
    /// Create a scheduler with the given ratio and cycle length (minimum 1).
    pub fn new(ratio: f64, cycle_size: usize) -> Self {
        let mut state = CycleState {
            ratio: 0.0,
            pattern: vec![false],
            cursor: 0,
        };
        state.rebuild(cycle_size, ratio);
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CycleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Change the target ratio. Values outside `[0, 1]` are clamped.
    ///
    /// The cursor keeps its position, so a ratio change mid-cycle takes effect
    /// from the next slot rather than restarting the cycle.
    pub fn set_ratio(&self, ratio: f64) {
        let mut state = self.lock();
        let cycle_size = state.pattern.len();
        state.rebuild(cycle_size, ratio);
        debug!(
            ratio = state.ratio,
            cursor = state.cursor,
            "Outcome cycle rebuilt"
        );
    }

    /// Change the cycle length, keeping the current ratio.
    ///
    /// The cursor is reduced modulo the new length.
    pub fn set_cycle_size(&self, cycle_size: usize) {
        let mut state = self.lock();
        let ratio = state.ratio;
        state.rebuild(cycle_size, ratio);
        debug!(
            cycle_size = state.pattern.len(),
            cursor = state.cursor,
            "Outcome cycle resized"
        );
    }

    /// Return the outcome at the cursor and advance it, wrapping at the end.
    pub fn next(&self) -> bool {
        let mut state = self.lock();
        let outcome = state.pattern[state.cursor];
        state.cursor = (state.cursor + 1) % state.pattern.len();
        outcome
    }

    /// The clamped ratio currently in effect.
    pub fn ratio(&self) -> f64 {
        self.lock().ratio
    }

    pub fn cycle_size(&self) -> usize {
        self.lock().pattern.len()
    }

    /// Index of the slot the next call to [`next`](Self::next) will return.
    pub fn position(&self) -> usize {
        self.lock().cursor
    }

    /// Snapshot of the current cycle.
    pub fn pattern(&self) -> Vec<bool> {
        self.lock().pattern.clone()
    }
}

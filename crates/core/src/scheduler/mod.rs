//! Rigged outcome scheduling.
//!
//! Wins are not drawn at random. A fixed-length cycle is pre-computed so that
//! every full pass over it yields exactly `round(cycle_size * ratio)` wins,
//! spread as evenly as the greedy placement allows.

mod cycle;
mod outcome;

pub use cycle::{build_cycle, win_count, DEFAULT_CYCLE_SIZE};
pub use outcome::OutcomeScheduler;

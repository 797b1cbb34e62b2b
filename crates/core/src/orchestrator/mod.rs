//! Event orchestrator.
//!
//! Ties every trigger source to the outcome schedule, the reel symbols, the
//! pending event queue and the win actuator:
//! - **Triggers**: synchronous callers use [`EventOrchestrator::handle_trigger`];
//!   the sensor posts messages through a [`TriggerHandle`] drained by a
//!   [`TriggerPump`]
//! - **Consumers**: poll [`EventOrchestrator::dequeue_next`], which never waits

mod runner;
mod trigger;
mod types;

pub use runner::EventOrchestrator;
pub use trigger::{TriggerHandle, TriggerPump};
pub use types::{OrchestratorError, OrchestratorStatus};

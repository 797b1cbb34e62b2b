//! Play events and the queue that carries them to consumers.

mod queue;
mod types;

pub use queue::PendingQueue;
pub use types::{PlayEvent, TriggerSource};

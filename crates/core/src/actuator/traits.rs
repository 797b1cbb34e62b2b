use std::time::Duration;

/// What happened to a spin request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinOutcome {
    /// A physical spin was started.
    Started,
    /// A spin was already running; the request was dropped.
    Busy,
    /// No motor present; the duration is kept as a timing placeholder.
    Simulated,
}

impl SpinOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinOutcome::Started => "started",
            SpinOutcome::Busy => "busy",
            SpinOutcome::Simulated => "simulated",
        }
    }
}

/// Something that can show a win by moving.
pub trait Actuator: Send + Sync {
    /// Short implementation name ("stepper", "simulated").
    fn kind(&self) -> &'static str;

    /// Start a spin lasting `duration` and return immediately.
    fn try_spin_for(&self, duration: Duration) -> SpinOutcome;

    /// Whether a spin is running right now.
    fn is_spinning(&self) -> bool;

    /// Disengage all outputs. Idempotent.
    fn release(&self);
}

//! Message-passing boundary between trigger sources and the orchestrator.
//!
//! Sensor drivers fire from their own notification threads. Instead of
//! touching orchestrator state there, they post a message through a
//! [`TriggerHandle`]; the [`TriggerPump`] feeds each message into
//! [`EventOrchestrator::handle_trigger`], the same entry point synchronous
//! callers use.

use std::sync::Weak;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::events::TriggerSource;

use super::EventOrchestrator;

/// Cheaply cloneable sender for play triggers.
///
/// Sending never blocks and is safe from any thread, async or not.
#[derive(Debug, Clone)]
pub struct TriggerHandle {
    tx: mpsc::UnboundedSender<TriggerSource>,
}

impl TriggerHandle {
    pub(crate) fn channel() -> (Self, mpsc::UnboundedReceiver<TriggerSource>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Post a trigger. Returns false if the orchestrator is gone.
    pub fn trigger(&self, source: TriggerSource) -> bool {
        match self.tx.send(source) {
            Ok(()) => true,
            Err(_) => {
                debug!(%source, "Trigger dropped, orchestrator stopped");
                false
            }
        }
    }

    /// Post a sensor trigger. Intended for edge callbacks.
    pub fn sensor_triggered(&self) -> bool {
        self.trigger(TriggerSource::Sensor)
    }
}

/// Background task that drains posted triggers into the orchestrator.
///
/// Holds only a weak reference, so it never keeps the orchestrator alive. It
/// exits once every [`TriggerHandle`] is dropped or the orchestrator is gone.
pub struct TriggerPump {
    rx: mpsc::UnboundedReceiver<TriggerSource>,
    orchestrator: Weak<EventOrchestrator>,
}

impl TriggerPump {
    pub(crate) fn new(
        rx: mpsc::UnboundedReceiver<TriggerSource>,
        orchestrator: Weak<EventOrchestrator>,
    ) -> Self {
        Self { rx, orchestrator }
    }

    /// Run the pump until the channel closes.
    ///
    /// This should be spawned as a background task.
    pub async fn run(mut self) {
        info!("Trigger pump started");

        while let Some(source) = self.rx.recv().await {
            let Some(orchestrator) = self.orchestrator.upgrade() else {
                break;
            };
            orchestrator.handle_trigger(source);
        }

        info!("Trigger pump stopped");
    }
}

//! Event orchestrator implementation.
//!
//! Every trigger runs the same short, synchronous path:
//! outcome -> reels -> event -> queue -> (on a win) actuator.
//! Each step takes its own component lock and releases it before the next.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::actuator::Actuator;
use crate::events::{PendingQueue, PlayEvent, TriggerSource};
use crate::hardware::TriggerSensor;
use crate::metrics::{EVENTS_CONSUMED, PLAYS_TOTAL, SETTINGS_UPDATES};
use crate::scheduler::{OutcomeScheduler, DEFAULT_CYCLE_SIZE};
use crate::settings::{GameSettings, SettingsStore, SettingsUpdate};
use crate::symbols::SymbolSequencer;

use super::trigger::{TriggerHandle, TriggerPump};
use super::types::{OrchestratorError, OrchestratorStatus};

/// Default time the motor turns on a win.
const DEFAULT_SPIN_DURATION: Duration = Duration::from_secs(3);

/// The cabinet's event orchestrator.
///
/// Built once at startup and shared (behind an `Arc`) with the HTTP layer and
/// the trigger pump. Lifecycle: constructed -> started (first request) ->
/// shut down.
pub struct EventOrchestrator {
    scheduler: OutcomeScheduler,
    sequencer: SymbolSequencer,
    queue: PendingQueue,
    actuator: Arc<dyn Actuator>,
    sensor: Option<Arc<dyn TriggerSensor>>,
    settings: Arc<dyn SettingsStore>,
    spin_duration: Duration,

    // Runtime state
    started: OnceLock<()>,
    shut_down: AtomicBool,
    update_lock: Mutex<()>,
    trigger_handle: Mutex<Option<TriggerHandle>>,
    trigger_rx: Mutex<Option<mpsc::UnboundedReceiver<TriggerSource>>>,
}

impl EventOrchestrator {
    /// Create an orchestrator. The win ratio is taken from the settings store.
    pub fn new(settings: Arc<dyn SettingsStore>, actuator: Arc<dyn Actuator>) -> Self {
        let current = settings.get();
        let (trigger_handle, trigger_rx) = TriggerHandle::channel();

        Self {
            scheduler: OutcomeScheduler::new(current.win_ratio, DEFAULT_CYCLE_SIZE),
            sequencer: SymbolSequencer::new(),
            queue: PendingQueue::new(),
            actuator,
            sensor: None,
            settings,
            spin_duration: DEFAULT_SPIN_DURATION,
            started: OnceLock::new(),
            shut_down: AtomicBool::new(false),
            update_lock: Mutex::new(()),
            trigger_handle: Mutex::new(Some(trigger_handle)),
            trigger_rx: Mutex::new(Some(trigger_rx)),
        }
    }

    /// Use a cycle of `cycle_size` slots instead of the default 20.
    pub fn with_cycle_size(self, cycle_size: usize) -> Self {
        self.scheduler.set_cycle_size(cycle_size);
        self
    }

    pub fn with_spin_duration(mut self, spin_duration: Duration) -> Self {
        self.spin_duration = spin_duration;
        self
    }

    /// Attach the sensor capability. It is armed by [`ensure_started`].
    ///
    /// [`ensure_started`]: Self::ensure_started
    pub fn with_sensor(mut self, sensor: Arc<dyn TriggerSensor>) -> Self {
        self.sensor = Some(sensor);
        self
    }

    /// Take the pump that feeds posted triggers into this orchestrator.
    ///
    /// Returns `None` after the first call.
    pub fn trigger_pump(self: &Arc<Self>) -> Option<TriggerPump> {
        let rx = self
            .trigger_rx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()?;
        Some(TriggerPump::new(rx, Arc::downgrade(self)))
    }

    /// A handle for posting triggers, or `None` once shut down.
    pub fn trigger_handle(&self) -> Option<TriggerHandle> {
        self.trigger_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run the one-time startup hook.
    ///
    /// Called on every inbound request; only the first call does anything and
    /// concurrent first calls wait for it rather than repeating it.
    pub fn ensure_started(&self) {
        self.started.get_or_init(|| {
            if self.shut_down.load(Ordering::Acquire) {
                warn!("Start requested after shutdown, sensor not armed");
                return;
            }
            match (&self.sensor, self.trigger_handle()) {
                (Some(sensor), Some(handle)) => match sensor.arm(handle) {
                    Ok(()) => info!(sensor = sensor.name(), "Sensor armed"),
                    Err(e) => warn!(
                        sensor = sensor.name(),
                        "Failed to arm sensor, sensor triggers disabled: {}", e
                    ),
                },
                _ => info!("No sensor available, only manual and simulated triggers"),
            }
            info!(actuator = self.actuator.kind(), "Event orchestrator started");
        });
    }

    pub fn is_started(&self) -> bool {
        self.started.get().is_some()
    }

    /// Play one round for `source` and queue the resulting event.
    ///
    /// On a win the actuator is asked to spin; the call does not wait for it.
    pub fn handle_trigger(&self, source: TriggerSource) -> PlayEvent {
        let win = self.scheduler.next();
        let reels = self.sequencer.next(win);
        let event = PlayEvent::new(win, reels, source);

        self.queue.push(event.clone());
        PLAYS_TOTAL
            .with_label_values(&[source.as_str(), if win { "win" } else { "lose" }])
            .inc();
        debug!(
            id = %event.id,
            %source,
            win,
            reels = ?event.reels,
            "Play queued"
        );

        if win {
            let outcome = self.actuator.try_spin_for(self.spin_duration);
            debug!(outcome = outcome.as_str(), "Win spin requested");
        }

        event
    }

    /// Pop the oldest pending event, or `None` straight away if there is none.
    pub fn dequeue_next(&self) -> Option<PlayEvent> {
        let event = self.queue.pop();
        if event.is_some() {
            EVENTS_CONSUMED.inc();
        }
        event
    }

    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    /// Current game settings.
    pub fn get_config(&self) -> GameSettings {
        self.settings.get()
    }

    /// Apply and persist a settings change.
    ///
    /// A non-finite ratio is rejected and nothing changes. Otherwise the ratio
    /// is clamped into `[0, 1]` and the outcome cycle rebuilt. A failure to
    /// persist is logged but the new settings stay in effect.
    pub fn update_config(&self, update: SettingsUpdate) -> Result<GameSettings, OrchestratorError> {
        if !update.win_ratio.is_finite() {
            SETTINGS_UPDATES.with_label_values(&["rejected"]).inc();
            return Err(OrchestratorError::InvalidRatio(update.win_ratio));
        }

        let _guard = self
            .update_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let settings = GameSettings {
            win_ratio: update.win_ratio.clamp(0.0, 1.0),
            simulator_mode: update.simulator_mode,
            music_enabled: update.music_enabled,
            sfx_enabled: update.sfx_enabled,
        };
        self.scheduler.set_ratio(settings.win_ratio);

        match self.settings.save(&settings) {
            Ok(()) => SETTINGS_UPDATES.with_label_values(&["saved"]).inc(),
            Err(e) => {
                warn!("Settings applied but not persisted: {}", e);
                SETTINGS_UPDATES.with_label_values(&["unsaved"]).inc();
            }
        }

        info!(
            win_ratio = settings.win_ratio,
            simulator_mode = settings.simulator_mode,
            music_enabled = settings.music_enabled,
            sfx_enabled = settings.sfx_enabled,
            "Settings updated"
        );
        Ok(self.settings.get())
    }

    pub fn actuator(&self) -> &Arc<dyn Actuator> {
        &self.actuator
    }

    /// Snapshot of the orchestrator's state.
    pub fn status(&self) -> OrchestratorStatus {
        OrchestratorStatus {
            started: self.is_started(),
            shut_down: self.shut_down.load(Ordering::Acquire),
            pending_events: self.queue.len(),
            actuator: self.actuator.kind().to_string(),
            spinning: self.actuator.is_spinning(),
            sensor_present: self.sensor.is_some(),
            win_ratio: self.scheduler.ratio(),
            cycle_size: self.scheduler.cycle_size(),
            cycle_position: self.scheduler.position(),
        }
    }

    /// Release the sensor and the actuator outputs. Idempotent.
    ///
    /// Synchronous callers may keep calling [`handle_trigger`] afterwards;
    /// only posted triggers stop flowing.
    ///
    /// [`handle_trigger`]: Self::handle_trigger
    pub fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::AcqRel) {
            debug!("Event orchestrator already shut down");
            return;
        }

        info!("Shutting down event orchestrator");
        if let Some(sensor) = &self.sensor {
            sensor.disarm();
        }
        self.trigger_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.actuator.release();
        info!("Event orchestrator stopped");
    }
}

//! Player-facing game settings and their persistence.
//!
//! Settings are the tunables the cabinet operator changes at runtime (win
//! ratio, simulator mode, audio toggles). They are stored as a flat JSON
//! document next to the service.

mod json_store;
mod memory_store;
mod types;

pub use json_store::JsonFileSettingsStore;
pub use memory_store::MemorySettingsStore;
pub use types::{GameSettings, SettingsUpdate};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Where game settings live.
pub trait SettingsStore: Send + Sync {
    /// Current settings. Never fails; stores fall back to defaults.
    fn get(&self) -> GameSettings;

    /// Replace the stored settings.
    ///
    /// The in-memory copy is updated even when persisting fails, so the
    /// running cabinet keeps the new values.
    fn save(&self, settings: &GameSettings) -> Result<(), SettingsError>;
}

use std::sync::Arc;
use slotbox_core::{Config, EventOrchestrator};

use crate::media::MediaLibrary;

/// Shared application state
pub struct AppState {
    config: Config,
    orchestrator: Arc<EventOrchestrator>,
    media: MediaLibrary,
}

impl AppState {
    pub fn new(config: Config, orchestrator: Arc<EventOrchestrator>) -> Self {
        let media = MediaLibrary::new(config.media.sounds_dir.clone());
        Self {
            config,
            orchestrator,
            media,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn orchestrator(&self) -> &EventOrchestrator {
        self.orchestrator.as_ref()
    }

    pub fn media(&self) -> &MediaLibrary {
        &self.media
    }
}

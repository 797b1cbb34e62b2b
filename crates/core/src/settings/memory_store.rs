use std::sync::{Mutex, PoisonError};

use super::{GameSettings, SettingsError, SettingsStore};

/// Settings kept only in memory.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: Mutex<GameSettings>,
}

impl MemorySettingsStore {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self) -> GameSettings {
        self.settings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, settings: &GameSettings) -> Result<(), SettingsError> {
        *self.settings.lock().unwrap_or_else(PoisonError::into_inner) = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_get() {
        let store = MemorySettingsStore::default();
        let mut settings = store.get();
        settings.sfx_enabled = false;
        store.save(&settings).unwrap();
        assert!(!store.get().sfx_enabled);
    }
}

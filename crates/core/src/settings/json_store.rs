//! Settings persisted as a pretty-printed JSON file.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde_json::{Map, Value};
use tracing::{info, warn};

use super::{GameSettings, SettingsError, SettingsStore};

/// File-backed settings store.
///
/// Opening never fails on bad content: a missing file is created with
/// defaults and a malformed one is ignored in favour of defaults.
#[derive(Debug)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
    settings: Mutex<GameSettings>,
}

impl JsonFileSettingsStore {
    /// Load settings from `path`, creating the file if it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let store = if path.exists() {
            let settings = read_settings(&path)?;
            Self {
                path,
                settings: Mutex::new(settings),
            }
        } else {
            info!("Settings file {:?} not found, writing defaults", path);
            let store = Self {
                path,
                settings: Mutex::new(GameSettings::default()),
            };
            store.write(&GameSettings::default())?;
            store
        };
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, settings: &GameSettings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json).map_err(|source| SettingsError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

fn read_settings(path: &Path) -> Result<GameSettings, SettingsError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(fields)) => Ok(merge_fields(&fields)),
        Ok(_) => {
            warn!("Settings file {:?} is not a JSON object, using defaults", path);
            Ok(GameSettings::default())
        }
        Err(e) => {
            warn!("Malformed settings file {:?}, using defaults: {}", path, e);
            Ok(GameSettings::default())
        }
    }
}

/// Apply each stored key over the defaults on its own, so one bad value
/// does not discard the rest. Unknown keys are ignored.
fn merge_fields(fields: &Map<String, Value>) -> GameSettings {
    let mut settings = GameSettings::default();
    for (key, value) in fields {
        let applied = match key.as_str() {
            "win_ratio" => value.as_f64().map(|r| settings.win_ratio = r),
            "simulator_mode" => value.as_bool().map(|b| settings.simulator_mode = b),
            "music_enabled" => value.as_bool().map(|b| settings.music_enabled = b),
            "sfx_enabled" => value.as_bool().map(|b| settings.sfx_enabled = b),
            _ => Some(()),
        };
        if applied.is_none() {
            warn!(%key, %value, "Ignoring settings value of the wrong type");
        }
    }
    settings
}

impl SettingsStore for JsonFileSettingsStore {
    fn get(&self) -> GameSettings {
        self.settings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, settings: &GameSettings) -> Result<(), SettingsError> {
        let mut current = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        *current = settings.clone();
        self.write(&current)
    }
}

use serde::{Deserialize, Serialize};

/// Runtime-tunable game settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Target share of winning plays, in `[0, 1]`.
    #[serde(default = "default_win_ratio")]
    pub win_ratio: f64,
    /// Allow simulated hits from the UI.
    #[serde(default = "default_true")]
    pub simulator_mode: bool,
    #[serde(default = "default_true")]
    pub music_enabled: bool,
    #[serde(default = "default_true")]
    pub sfx_enabled: bool,
}

fn default_win_ratio() -> f64 {
    0.25
}

fn default_true() -> bool {
    true
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            win_ratio: default_win_ratio(),
            simulator_mode: true,
            music_enabled: true,
            sfx_enabled: true,
        }
    }
}

/// A full settings change requested by an operator.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsUpdate {
    pub win_ratio: f64,
    pub simulator_mode: bool,
    pub music_enabled: bool,
    pub sfx_enabled: bool,
}

impl Default for SettingsUpdate {
    fn default() -> Self {
        let defaults = GameSettings::default();
        Self {
            win_ratio: defaults.win_ratio,
            simulator_mode: defaults.simulator_mode,
            music_enabled: defaults.music_enabled,
            sfx_enabled: defaults.sfx_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.win_ratio, 0.25);
        assert!(settings.simulator_mode);
        assert!(settings.music_enabled);
        assert!(settings.sfx_enabled);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let settings: GameSettings =
            serde_json::from_str(r#"{"win_ratio": 0.5, "music_enabled": false}"#).unwrap();
        assert_eq!(settings.win_ratio, 0.5);
        assert!(!settings.music_enabled);
        assert!(settings.simulator_mode);
        assert!(settings.sfx_enabled);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings: GameSettings =
            serde_json::from_str(r#"{"win_ratio": 0.1, "theme": "neon"}"#).unwrap();
        assert_eq!(settings.win_ratio, 0.1);
    }
}

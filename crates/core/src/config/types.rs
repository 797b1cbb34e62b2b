use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::scheduler::DEFAULT_CYCLE_SIZE;

/// Root service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub hardware: HardwareConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the cabinet UI, served at `/`.
    #[serde(default = "default_ui_dir")]
    pub ui_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            ui_dir: default_ui_dir(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    5000
}

fn default_ui_dir() -> PathBuf {
    PathBuf::from("static")
}

/// Play scheduling configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameConfig {
    /// Length of the repeating win/lose cycle.
    #[serde(default = "default_cycle_size")]
    pub cycle_size: usize,
    /// How long the motor turns on a win (milliseconds).
    #[serde(default = "default_spin_duration")]
    pub spin_duration_ms: u64,
    /// JSON file holding the operator-tunable settings.
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
}

impl GameConfig {
    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cycle_size: default_cycle_size(),
            spin_duration_ms: default_spin_duration(),
            settings_path: default_settings_path(),
        }
    }
}

fn default_cycle_size() -> usize {
    DEFAULT_CYCLE_SIZE
}

fn default_spin_duration() -> u64 {
    3000 // 3 seconds
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("config.json")
}

/// Audio served to the UI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Root sounds directory, with `win/` and `loose/` subdirectories.
    #[serde(default = "default_sounds_dir")]
    pub sounds_dir: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            sounds_dir: default_sounds_dir(),
        }
    }
}

fn default_sounds_dir() -> PathBuf {
    PathBuf::from("sounds")
}

/// Wiring handed to pin-level drivers (BCM numbering).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HardwareConfig {
    #[serde(default = "default_ir_pin")]
    pub ir_pin: u8,
    #[serde(default = "default_stepper_pins")]
    pub stepper_pins: [u8; 4],
    /// Sensor debounce window (milliseconds).
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            ir_pin: default_ir_pin(),
            stepper_pins: default_stepper_pins(),
            debounce_ms: default_debounce(),
        }
    }
}

fn default_ir_pin() -> u8 {
    4
}

fn default_stepper_pins() -> [u8; 4] {
    [14, 15, 18, 23]
}

fn default_debounce() -> u64 {
    400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.game.cycle_size, 20);
        assert_eq!(config.game.spin_duration(), Duration::from_secs(3));
        assert_eq!(config.game.settings_path.to_str().unwrap(), "config.json");
        assert_eq!(config.media.sounds_dir.to_str().unwrap(), "sounds");
        assert_eq!(config.hardware.stepper_pins, [14, 15, 18, 23]);
        assert_eq!(config.hardware.ir_pin, 4);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8080
ui_dir = "/srv/cabinet"

[game]
cycle_size = 10
spin_duration_ms = 1500
settings_path = "/var/lib/slotbox/settings.json"

[media]
sounds_dir = "/srv/sounds"

[hardware]
ir_pin = 17
stepper_pins = [5, 6, 13, 19]
debounce_ms = 250
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ui_dir.to_str().unwrap(), "/srv/cabinet");
        assert_eq!(config.game.cycle_size, 10);
        assert_eq!(config.game.spin_duration(), Duration::from_millis(1500));
        assert_eq!(config.hardware.stepper_pins, [5, 6, 13, 19]);
        assert_eq!(config.hardware.debounce_ms, 250);
    }

    #[test]
    fn test_deserialize_wrong_pin_count_fails() {
        let toml = r#"
[hardware]
stepper_pins = [1, 2, 3]
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}

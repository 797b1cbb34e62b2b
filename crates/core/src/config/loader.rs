use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;
use tracing::info;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides.
///
/// A missing file is not an error: the cabinet runs on defaults, still
/// overridable from `SLOTBOX_` variables (`SLOTBOX_SERVER__PORT=8080`).
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if path.exists() {
        figment = figment.merge(Toml::file(path));
    } else {
        info!("Configuration file {:?} not found, using defaults", path);
    }

    figment
        .merge(Env::prefixed("SLOTBOX_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

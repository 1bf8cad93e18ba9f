//! TOML configuration loader.
//!
//! Reads and validates a [`SupervisorConfig`] before any serial port is
//! opened. A missing file is an error; every field has a default, so an
//! empty file yields the stock MR15 wiring (`/dev/ttyACM0` monitor,
//! `/dev/ttyACM1` controller, 9600 baud).

use std::path::Path;

use tps_common::config::SupervisorConfig;
use tps_common::error::ConfigError;

/// Load and validate the supervisor configuration.
pub fn load_config(path: &Path) -> Result<SupervisorConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
    let config: SupervisorConfig =
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

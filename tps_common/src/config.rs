//! Supervisor configuration types with validation.
//!
//! The TOML file is parsed into [`SupervisorConfig`] and then validated
//! with [`SupervisorConfig::validate`] before any port is opened.
//!
//! # TOML Example
//!
//! ```toml
//! monitor_device = "/dev/ttyACM0"
//! controller_device = "/dev/ttyACM1"
//! monitor_baud = 9600
//! controller_baud = 9600
//! read_timeout_ms = 250
//! write_timeout_ms = 100
//! telemetry_interval = 1
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default monitor PLC device path.
pub const MONITOR_DEV_DEFAULT: &str = "/dev/ttyACM0";
/// Default controller PLC device path.
pub const CONTROLLER_DEV_DEFAULT: &str = "/dev/ttyACM1";
/// Default baud rate for both PLC links.
pub const BAUD_DEFAULT: u32 = 9600;
/// Default bounded read timeout [ms].
pub const READ_TIMEOUT_MS_DEFAULT: u64 = 250;
/// Default bounded write timeout [ms].
pub const WRITE_TIMEOUT_MS_DEFAULT: u64 = 100;
/// Default telemetry log interval [cycles].
pub const TELEMETRY_INTERVAL_DEFAULT: u64 = 1;

/// Validated supervisor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisorConfig {
    /// Monitor PLC serial device path.
    #[serde(default = "default_monitor_device")]
    pub monitor_device: String,

    /// Controller PLC serial device path.
    #[serde(default = "default_controller_device")]
    pub controller_device: String,

    /// Monitor link baud rate.
    #[serde(default = "default_baud")]
    pub monitor_baud: u32,

    /// Controller link baud rate.
    #[serde(default = "default_baud")]
    pub controller_baud: u32,

    /// Bounded monitor read timeout [ms]. A timed-out read is treated
    /// as an absent sample, never as a fault.
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,

    /// Bounded controller write timeout [ms].
    #[serde(default = "default_write_timeout_ms")]
    pub write_timeout_ms: u64,

    /// Emit a telemetry log line every N cycles.
    #[serde(default = "default_telemetry_interval")]
    pub telemetry_interval: u64,
}

fn default_monitor_device() -> String {
    MONITOR_DEV_DEFAULT.to_string()
}
fn default_controller_device() -> String {
    CONTROLLER_DEV_DEFAULT.to_string()
}
fn default_baud() -> u32 {
    BAUD_DEFAULT
}
fn default_read_timeout_ms() -> u64 {
    READ_TIMEOUT_MS_DEFAULT
}
fn default_write_timeout_ms() -> u64 {
    WRITE_TIMEOUT_MS_DEFAULT
}
fn default_telemetry_interval() -> u64 {
    TELEMETRY_INTERVAL_DEFAULT
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            monitor_device: default_monitor_device(),
            controller_device: default_controller_device(),
            monitor_baud: BAUD_DEFAULT,
            controller_baud: BAUD_DEFAULT,
            read_timeout_ms: READ_TIMEOUT_MS_DEFAULT,
            write_timeout_ms: WRITE_TIMEOUT_MS_DEFAULT,
            telemetry_interval: TELEMETRY_INTERVAL_DEFAULT,
        }
    }
}

impl SupervisorConfig {
    /// Validate parameter bounds.
    ///
    /// Rules: device paths non-empty and distinct, baud rates non-zero,
    /// timeouts non-zero (an unbounded read would stall the cycle),
    /// telemetry interval non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.monitor_device.is_empty() {
            return Err(ConfigError::Validation(
                "monitor_device must not be empty".into(),
            ));
        }
        if self.controller_device.is_empty() {
            return Err(ConfigError::Validation(
                "controller_device must not be empty".into(),
            ));
        }
        if self.monitor_device == self.controller_device {
            return Err(ConfigError::Validation(format!(
                "monitor_device and controller_device must differ (both '{}')",
                self.monitor_device
            )));
        }
        if self.monitor_baud == 0 || self.controller_baud == 0 {
            return Err(ConfigError::Validation("baud rate must be non-zero".into()));
        }
        if self.read_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "read_timeout_ms must be non-zero (unbounded reads stall the cycle)".into(),
            ));
        }
        if self.write_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "write_timeout_ms must be non-zero".into(),
            ));
        }
        if self.telemetry_interval == 0 {
            return Err(ConfigError::Validation(
                "telemetry_interval must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SupervisorConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.monitor_device, "/dev/ttyACM0");
        assert_eq!(cfg.controller_device, "/dev/ttyACM1");
        assert_eq!(cfg.monitor_baud, 9600);
    }

    #[test]
    fn empty_device_rejected() {
        let cfg = SupervisorConfig {
            monitor_device: String::new(),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn same_device_rejected() {
        let cfg = SupervisorConfig {
            controller_device: "/dev/ttyACM0".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let cfg = SupervisorConfig {
            read_timeout_ms: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn parses_minimal_toml_with_defaults() {
        let cfg: SupervisorConfig = toml::from_str("").unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.read_timeout_ms, READ_TIMEOUT_MS_DEFAULT);
    }

    #[test]
    fn parses_full_toml() {
        let cfg: SupervisorConfig = toml::from_str(
            r#"
            monitor_device = "/dev/ttyUSB0"
            controller_device = "/dev/ttyUSB1"
            monitor_baud = 115200
            controller_baud = 115200
            read_timeout_ms = 500
            write_timeout_ms = 200
            telemetry_interval = 10
            "#,
        )
        .unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.monitor_device, "/dev/ttyUSB0");
        assert_eq!(cfg.monitor_baud, 115200);
        assert_eq!(cfg.telemetry_interval, 10);
    }
}

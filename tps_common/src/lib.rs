//! TPS Common Library
//!
//! Shared value types for the Tractor Performance System (TPS) workspace:
//! the sensor snapshot read from the monitor unit, the engine lifecycle
//! state, the actuation command vocabulary, the error taxonomy, and the
//! validated supervisor configuration.
//!
//! # Module Structure
//!
//! - [`snapshot`] - Validated sensor snapshot and directional inputs
//! - [`state`] - Engine lifecycle state
//! - [`command`] - Actuation command codes
//! - [`error`] - Decode / transport / config error types
//! - [`config`] - Supervisor configuration with validation

pub mod command;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod state;

pub use command::Command;
pub use error::{ConfigError, DecodeError, TransportError};
pub use snapshot::{Direction, SensorSnapshot};
pub use state::EngineState;

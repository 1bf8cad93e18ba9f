//! Error taxonomy for the supervisor.
//!
//! Decode failures are absorbed at the cycle boundary and converted to
//! "snapshot absent" — they are never fatal. Transport write failures
//! are surfaced for telemetry but never alter engine or auxiliary state.

use thiserror::Error;

/// Failure to turn a raw monitor payload into a validated snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload could not be parsed into a structured record.
    #[error("malformed sensor payload")]
    MalformedPayload,

    /// A required sensor field is absent or has the wrong type.
    #[error("incomplete sensor record: field '{field}' missing or invalid")]
    IncompleteFields {
        /// First offending field name.
        field: &'static str,
    },
}

/// Failure on the monitor or controller serial link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The underlying write failed.
    #[error("transport write failed: {0}")]
    WriteFailed(String),

    /// No data within the bounded timeout window.
    #[error("transport timed out")]
    Timeout,

    /// The device went away (unplugged, closed).
    #[error("transport disconnected: {0}")]
    Disconnected(String),
}

/// Configuration loading / validation error.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(String),

    /// TOML parsing failed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// Semantic validation failed.
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

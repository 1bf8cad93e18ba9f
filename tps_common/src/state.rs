//! Engine lifecycle state.
//!
//! Uses `#[repr(u8)]` for compact layout and stable telemetry encoding.

use serde::{Deserialize, Serialize};

/// Engine lifecycle state.
///
/// Exactly one instance exists per supervisor process, owned by the
/// engine state machine. The lifecycle cycles `Off → Standby → Running
/// → Off → …` indefinitely; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EngineState {
    /// Engine off. Exit requires RFID authorization.
    Off = 0,
    /// Authorized and waiting for the ignition preconditions.
    Standby = 1,
    /// Engine running. Exit only via the safety interlocks.
    Running = 2,
}

impl EngineState {
    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Standby),
            2 => Some(Self::Running),
            _ => None,
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_off() {
        assert_eq!(EngineState::default(), EngineState::Off);
    }

    #[test]
    fn from_u8_roundtrip() {
        for state in [EngineState::Off, EngineState::Standby, EngineState::Running] {
            assert_eq!(EngineState::from_u8(state as u8), Some(state));
        }
        assert_eq!(EngineState::from_u8(3), None);
        assert_eq!(EngineState::from_u8(255), None);
    }
}

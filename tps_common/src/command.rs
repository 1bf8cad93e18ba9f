//! Actuation command vocabulary.
//!
//! Each command maps to the single-byte code understood by the actuation
//! PLC. `Wait` is the idempotent no-op and is never written to the wire.

use serde::{Deserialize, Serialize};

/// Discrete command sent to the actuation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Command {
    /// Cut the engine immediately (interlock tripped).
    Kill = 0,
    /// Arm the standby relay (RFID authorized).
    Standby = 1,
    /// Fire the ignition relay.
    Ignition = 2,
    /// Running-state acknowledgement. Reserved: the engine state machine
    /// emits `Wait` while running, never `Run`.
    Run = 3,
    /// Raise the steering actuator.
    SteerUp = 4,
    /// Lower the steering actuator.
    SteerDown = 5,
    /// Raise the ballast carriage.
    BallastUp = 6,
    /// Lower the ballast carriage.
    BallastDown = 7,
    /// No action this cycle. Not written to the wire.
    Wait = 8,
}

impl Command {
    /// Single-byte wire code for the actuation protocol.
    ///
    /// Codes `A`–`H` are fixed by the PLC firmware; `I` is the reserved
    /// running-state code.
    #[inline]
    pub const fn wire_code(&self) -> u8 {
        match self {
            Self::Kill => b'A',
            Self::Standby => b'B',
            Self::Ignition => b'C',
            Self::BallastUp => b'D',
            Self::BallastDown => b'E',
            Self::SteerUp => b'F',
            Self::SteerDown => b'G',
            Self::Wait => b'H',
            Self::Run => b'I',
        }
    }

    /// True for the no-op command, which the dispatcher skips.
    #[inline]
    pub const fn is_wait(&self) -> bool {
        matches!(self, Self::Wait)
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::Wait
    }
}

//! Validated sensor snapshot.
//!
//! A snapshot is complete-or-rejected: the decoder either produces a
//! fully populated `SensorSnapshot` or fails, so the engine state
//! machine never observes partial sensor state. No partially populated
//! snapshot type exists anywhere in the API.

use serde::{Deserialize, Serialize};

/// Directional input for the steering and ballast axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// Raise / increase.
    Up = 0,
    /// Lower / decrease.
    Down = 1,
    /// No movement requested.
    Neutral = 2,
}

impl Direction {
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Up),
            1 => Some(Self::Down),
            2 => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Parse the wire string (`"up"`, `"down"`, `"neutral"`).
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Neutral
    }
}

/// One validated, complete read of all sensor fields for a single
/// decision cycle.
///
/// Created fresh each cycle by the decoder and discarded after use;
/// no history is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Physical kill button pressed.
    pub kill: bool,
    /// Operator present in the seat.
    pub seat_occupied: bool,
    /// Hitch attached to the sled.
    pub hitch_attached: bool,
    /// RFID tag authorized for startup.
    pub rfid_authorized: bool,
    /// Ignition button pressed.
    pub ignition_requested: bool,
    /// CVT guard closed.
    pub cvt_guard_closed: bool,
    /// Brakes engaged.
    pub brakes_engaged: bool,
    /// Requested steering motor direction.
    pub steering: Direction,
    /// Requested ballast motor direction.
    pub ballast: Direction,
}

impl SensorSnapshot {
    /// True when any safety interlock demands an immediate engine kill:
    /// kill button pressed, seat vacated, or hitch detached.
    #[inline]
    pub const fn interlock_tripped(&self) -> bool {
        self.kill || !self.seat_occupied || !self.hitch_attached
    }

    /// True when every ignition precondition holds: ignition requested,
    /// CVT guard closed, and brakes engaged.
    #[inline]
    pub const fn ignition_permitted(&self) -> bool {
        self.ignition_requested && self.cvt_guard_closed && self.brakes_engaged
    }
}

//! Auxiliary rate controllers (steering, ballast).
//!
//! Two independent signed accumulators stepped once per cycle from the
//! directional sensor inputs. Deliberately decoupled from the engine
//! lifecycle: the steering and ballast motors operate even while the
//! engine gate is closed.
//!
//! Accumulation is unbounded and never reset for the session. The axes
//! are `i64`, so overflow is not a practical concern at one step per
//! monitor sample.

use tps_common::command::Command;
use tps_common::snapshot::Direction;

/// Auxiliary axis identity, selecting the command pair to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Axis {
    /// Steering actuator.
    Steering = 0,
    /// Ballast carriage.
    Ballast = 1,
}

impl Axis {
    /// Command emitted for `Direction::Up` on this axis.
    #[inline]
    pub const fn up_command(&self) -> Command {
        match self {
            Self::Steering => Command::SteerUp,
            Self::Ballast => Command::BallastUp,
        }
    }

    /// Command emitted for `Direction::Down` on this axis.
    #[inline]
    pub const fn down_command(&self) -> Command {
        match self {
            Self::Steering => Command::SteerDown,
            Self::Ballast => Command::BallastDown,
        }
    }
}

/// Rate controller for one auxiliary axis.
///
/// Owns the axis' accumulated speed; mutated at most once per cycle.
#[derive(Debug, Clone)]
pub struct AxisController {
    axis: Axis,
    speed: i64,
}

impl AxisController {
    /// Create a controller for the given axis with zero accumulated speed.
    pub const fn new(axis: Axis) -> Self {
        Self { axis, speed: 0 }
    }

    /// Axis identity.
    #[inline]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Accumulated speed (monotonic per direction, never reset).
    #[inline]
    pub const fn speed(&self) -> i64 {
        self.speed
    }

    /// Advance one cycle from the directional input.
    ///
    /// `Up` increments the accumulator and emits the axis Up command;
    /// `Down` decrements and emits the axis Down command; `Neutral`
    /// leaves the accumulator unchanged and emits `Wait`.
    pub fn step(&mut self, direction: Direction) -> Command {
        match direction {
            Direction::Up => {
                self.speed += 1;
                self.axis.up_command()
            }
            Direction::Down => {
                self.speed -= 1;
                self.axis.down_command()
            }
            Direction::Neutral => Command::Wait,
        }
    }
}

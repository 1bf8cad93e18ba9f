//! Telemetry boundary for the operator display.
//!
//! Once per cycle the supervisor pushes a read-only [`TelemetryFrame`]
//! to a [`TelemetrySink`]. The sink has no decision authority and no
//! write access to any core state; the bundled [`LogSink`] renders
//! frames as structured log events, throttled to every N cycles.

use tps_common::command::Command;
use tps_common::snapshot::SensorSnapshot;
use tps_common::state::EngineState;

use crate::dispatch::CycleCommands;

/// Read-only per-cycle view for the display boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryFrame {
    /// Monotonic cycle counter.
    pub cycle: u64,
    /// Engine state after this cycle's transition.
    pub engine_state: EngineState,
    /// This cycle's validated snapshot, or `None` when the sample was
    /// absent (read timeout or decode failure).
    pub snapshot: Option<SensorSnapshot>,
    /// The commands chosen this cycle.
    pub commands: CycleCommands,
    /// Accumulated steering speed.
    pub steering_speed: i64,
    /// Accumulated ballast speed.
    pub ballast_speed: i64,
    /// Commands actually written to the wire this cycle.
    pub dispatched: u8,
    /// Most recent error description (decode or transport), carried
    /// until replaced. Telemetry keeps updating through errors.
    pub last_error: Option<String>,
    /// Last cycle duration [µs].
    pub cycle_time_us: u64,
}

/// Passive renderer of the supervisor's per-cycle state.
pub trait TelemetrySink {
    /// Render one frame. Must not block the cycle loop.
    fn render(&mut self, frame: &TelemetryFrame);
}

/// Structured-log telemetry renderer.
///
/// Emits one `tracing` event every `interval` cycles, and always on an
/// engine command or error so operators see lifecycle edges immediately.
pub struct LogSink {
    interval: u64,
}

impl LogSink {
    /// Create a sink emitting every `interval` cycles (min 1).
    pub const fn new(interval: u64) -> Self {
        Self {
            interval: if interval == 0 { 1 } else { interval },
        }
    }
}

impl TelemetrySink for LogSink {
    fn render(&mut self, frame: &TelemetryFrame) {
        let edge = !frame.commands.engine.is_wait() || frame.last_error.is_some();
        if !edge && frame.cycle % self.interval != 0 {
            return;
        }
        tracing::info!(
            cycle = frame.cycle,
            state = ?frame.engine_state,
            engine = ?frame.commands.engine,
            steering = ?frame.commands.steering,
            ballast = ?frame.commands.ballast,
            steering_speed = frame.steering_speed,
            ballast_speed = frame.ballast_speed,
            dispatched = frame.dispatched,
            sample = frame.snapshot.is_some(),
            error = frame.last_error.as_deref(),
            cycle_time_us = frame.cycle_time_us,
            "cycle"
        );
    }
}

/// Frame with idle defaults, used as the pre-first-cycle placeholder.
impl Default for TelemetryFrame {
    fn default() -> Self {
        Self {
            cycle: 0,
            engine_state: EngineState::Off,
            snapshot: None,
            commands: CycleCommands::idle(),
            steering_speed: 0,
            ballast_speed: 0,
            dispatched: 0,
            last_error: None,
            cycle_time_us: 0,
        }
    }
}

impl TelemetryFrame {
    /// True when this cycle produced any actuation command.
    #[inline]
    pub fn is_active(&self) -> bool {
        !(self.commands.engine.is_wait()
            && self.commands.steering.is_wait()
            && self.commands.ballast.is_wait())
    }

    /// Engine command shorthand for renderers.
    #[inline]
    pub const fn engine_command(&self) -> Command {
        self.commands.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_is_idle() {
        let frame = TelemetryFrame::default();
        assert_eq!(frame.engine_state, EngineState::Off);
        assert!(!frame.is_active());
        assert_eq!(frame.engine_command(), Command::Wait);
    }

    #[test]
    fn frame_with_engine_command_is_active() {
        let frame = TelemetryFrame {
            commands: CycleCommands {
                engine: Command::Kill,
                steering: Command::Wait,
                ballast: Command::Wait,
            },
            ..Default::default()
        };
        assert!(frame.is_active());
        assert_eq!(frame.engine_command(), Command::Kill);
    }

    #[test]
    fn log_sink_interval_floor_is_one() {
        // interval 0 would never emit; constructor clamps it.
        let sink = LogSink::new(0);
        assert_eq!(sink.interval, 1);
    }
}

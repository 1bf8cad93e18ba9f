//! Supervisor cycle loop: read → decide → dispatch → report.
//!
//! One iteration per available monitor sample. The loop is
//! single-threaded and synchronous; the engine and auxiliary state are
//! owned here and mutated nowhere else. Pacing comes from the bounded
//! monitor read: when the PLC has nothing to say within the timeout,
//! the cycle still runs with an absent sample and emits `Wait`.
//!
//! Errors never escape the loop. Decode failures and read timeouts are
//! absorbed as "snapshot absent"; dispatch failures are recorded for
//! telemetry and dropped. A termination flag is checked at cycle
//! boundaries only, so a half-formed command is never emitted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{debug, warn};

use tps_common::snapshot::Direction;

use crate::auxiliary::{Axis, AxisController};
use crate::decode::decode;
use crate::dispatch::{CycleCommands, Dispatcher};
use crate::engine::EngineStateMachine;
use crate::telemetry::{TelemetryFrame, TelemetrySink};
use crate::transport::{ControllerPort, MonitorPort};

// ─── Cycle Statistics ───────────────────────────────────────────────

/// O(1) per-cycle statistics, updated without allocation.
#[derive(Debug, Clone)]
pub struct CycleStats {
    /// Total cycles executed.
    pub cycle_count: u64,
    /// Last cycle duration [µs].
    pub last_cycle_us: u64,
    /// Minimum cycle duration [µs].
    pub min_cycle_us: u64,
    /// Maximum cycle duration [µs].
    pub max_cycle_us: u64,
    /// Running sum for average computation.
    pub sum_cycle_us: u64,
    /// Cycles with no usable sample (timeout or decode failure).
    pub absent_samples: u64,
    /// Cycles with a failed dispatch.
    pub dispatch_errors: u64,
}

impl CycleStats {
    /// Create a zeroed stats instance.
    pub const fn new() -> Self {
        Self {
            cycle_count: 0,
            last_cycle_us: 0,
            min_cycle_us: u64::MAX,
            max_cycle_us: 0,
            sum_cycle_us: 0,
            absent_samples: 0,
            dispatch_errors: 0,
        }
    }

    /// Record one cycle.
    #[inline]
    pub fn record(&mut self, duration_us: u64, absent: bool, dispatch_failed: bool) {
        self.cycle_count += 1;
        self.last_cycle_us = duration_us;
        if duration_us < self.min_cycle_us {
            self.min_cycle_us = duration_us;
        }
        if duration_us > self.max_cycle_us {
            self.max_cycle_us = duration_us;
        }
        self.sum_cycle_us += duration_us;
        if absent {
            self.absent_samples += 1;
        }
        if dispatch_failed {
            self.dispatch_errors += 1;
        }
    }

    /// Average cycle time [µs] (0 before the first cycle).
    #[inline]
    pub fn avg_cycle_us(&self) -> u64 {
        if self.cycle_count == 0 {
            0
        } else {
            self.sum_cycle_us / self.cycle_count
        }
    }
}

impl Default for CycleStats {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Supervisor ─────────────────────────────────────────────────────

/// The supervisor: owns all carried-forward state and drives one
/// decision per monitor sample.
pub struct Supervisor<M, C, S>
where
    M: MonitorPort,
    C: ControllerPort,
    S: TelemetrySink,
{
    monitor: M,
    dispatcher: Dispatcher<C>,
    sink: S,
    engine: EngineStateMachine,
    steering: AxisController,
    ballast: AxisController,
    stats: CycleStats,
    last_error: Option<String>,
}

impl<M, C, S> Supervisor<M, C, S>
where
    M: MonitorPort,
    C: ControllerPort,
    S: TelemetrySink,
{
    /// Assemble the supervisor around its transports and telemetry sink.
    pub fn new(monitor: M, controller: C, sink: S) -> Self {
        Self {
            monitor,
            dispatcher: Dispatcher::new(controller),
            sink,
            engine: EngineStateMachine::new(),
            steering: AxisController::new(Axis::Steering),
            ballast: AxisController::new(Axis::Ballast),
            stats: CycleStats::new(),
            last_error: None,
        }
    }

    /// Cycle statistics.
    #[inline]
    pub const fn stats(&self) -> &CycleStats {
        &self.stats
    }

    /// Current engine state (read-only, for reporting).
    #[inline]
    pub const fn engine_state(&self) -> tps_common::state::EngineState {
        self.engine.state()
    }

    /// Run cycles until the termination flag clears.
    ///
    /// The flag is sampled between cycles, never mid-cycle, so the
    /// in-flight command sequence always completes before exit.
    pub fn run(&mut self, running: &AtomicBool) {
        while running.load(Ordering::SeqCst) {
            self.cycle();
        }
        debug!("supervisor loop exited cleanly after {} cycles", self.stats.cycle_count);
    }

    /// Execute one full cycle and return the telemetry frame pushed to
    /// the sink.
    pub fn cycle(&mut self) -> TelemetryFrame {
        let started = Instant::now();

        // ═══ READ ═══
        // Timeout and decode failure both collapse to an absent sample;
        // neither may influence state in any other way.
        let snapshot = match self.monitor.read_frame() {
            Ok(line) => match decode(&line) {
                Ok(snap) => Some(snap),
                Err(e) => {
                    warn!("sensor decode failed: {e}");
                    self.last_error = Some(e.to_string());
                    None
                }
            },
            Err(tps_common::error::TransportError::Timeout) => {
                debug!("no monitor sample within timeout window");
                None
            }
            Err(e) => {
                warn!("monitor read failed: {e}");
                self.last_error = Some(e.to_string());
                None
            }
        };

        // ═══ DECIDE ═══
        let engine = self.engine.step(snapshot.as_ref());
        let steering_dir = snapshot.map_or(Direction::Neutral, |s| s.steering);
        let ballast_dir = snapshot.map_or(Direction::Neutral, |s| s.ballast);
        let commands = CycleCommands {
            engine,
            steering: self.steering.step(steering_dir),
            ballast: self.ballast.step(ballast_dir),
        };

        // ═══ DISPATCH ═══
        let outcome = self.dispatcher.dispatch(&commands);
        if let Some(ref e) = outcome.error {
            warn!("dispatch failed after {} command(s): {e}", outcome.sent);
            self.last_error = Some(e.to_string());
        }

        // ═══ REPORT ═══
        let duration_us = started.elapsed().as_micros() as u64;
        self.stats
            .record(duration_us, snapshot.is_none(), !outcome.is_ok());

        let frame = TelemetryFrame {
            cycle: self.stats.cycle_count,
            engine_state: self.engine.state(),
            snapshot,
            commands,
            steering_speed: self.steering.speed(),
            ballast_speed: self.ballast.speed(),
            dispatched: outcome.sent,
            last_error: self.last_error.clone(),
            cycle_time_us: duration_us,
        };
        self.sink.render(&frame);
        frame
    }
}

// ─── Tests ──────────────────────────────────────────────────────────

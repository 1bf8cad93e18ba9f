//! Engine lifecycle state machine.
//!
//! Derives the next engine state and the cycle's engine command from a
//! validated snapshot (or its absence). Rules are evaluated in strict
//! priority order, first match wins, every cycle regardless of the
//! current state:
//!
//! 1. Snapshot absent → `Wait`, state unchanged. Never act on missing
//!    data.
//! 2. Interlock tripped (kill pressed, seat vacated, or hitch detached)
//!    → `Off` + `Kill`, from any state including `Running`.
//! 3. Otherwise by current state:
//!    - `Off` → `Standby` + `Standby` on RFID authorization, else `Wait`.
//!    - `Standby` → `Running` + `Ignition` only when ignition is
//!      requested AND the CVT guard is closed AND the brakes are
//!      engaged, else `Wait`. A guard or brake failure never silently
//!      allows ignition.
//!    - `Running` → `Wait`; rule 2 is the only exit.
//!
//! The interlock check mirrors a priority interrupt rather than a
//! transition table: an operator leaving the seat while `Running`
//! forces `Off`/`Kill` immediately.

use tps_common::command::Command;
use tps_common::snapshot::SensorSnapshot;
use tps_common::state::EngineState;

/// Pure transition function.
///
/// Computes `(next_state, command)` from the current state and the
/// cycle's snapshot. Kept free of `&mut self` so transitions can be
/// unit-tested exhaustively without standing up serial devices.
pub const fn transition(
    state: EngineState,
    snapshot: Option<&SensorSnapshot>,
) -> (EngineState, Command) {
    let Some(snap) = snapshot else {
        return (state, Command::Wait);
    };

    if snap.interlock_tripped() {
        return (EngineState::Off, Command::Kill);
    }

    match state {
        EngineState::Off => {
            if snap.rfid_authorized {
                (EngineState::Standby, Command::Standby)
            } else {
                (EngineState::Off, Command::Wait)
            }
        }
        EngineState::Standby => {
            if snap.ignition_permitted() {
                (EngineState::Running, Command::Ignition)
            } else {
                (EngineState::Standby, Command::Wait)
            }
        }
        EngineState::Running => (EngineState::Running, Command::Wait),
    }
}

/// Engine state machine holding the authoritative lifecycle state.
///
/// Exactly one instance exists per supervisor process; it is mutated
/// only from the supervisor loop's single thread of control.
#[derive(Debug, Clone)]
pub struct EngineStateMachine {
    state: EngineState,
}

impl EngineStateMachine {
    /// Create a new state machine in `Off`.
    pub const fn new() -> Self {
        Self {
            state: EngineState::Off,
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Advance one cycle: apply [`transition`] and return the engine
    /// command to dispatch.
    pub fn step(&mut self, snapshot: Option<&SensorSnapshot>) -> Command {
        let (next, command) = transition(self.state, snapshot);
        self.state = next;
        command
    }
}

impl Default for EngineStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tps_common::snapshot::Direction;
    use EngineState::*;

    /// Interlocks satisfied, nothing requested.
    fn safe_snapshot() -> SensorSnapshot {
        SensorSnapshot {
            kill: false,
            seat_occupied: true,
            hitch_attached: true,
            rfid_authorized: false,
            ignition_requested: false,
            cvt_guard_closed: false,
            brakes_engaged: false,
            steering: Direction::Neutral,
            ballast: Direction::Neutral,
        }
    }

    #[test]
    fn initial_state_is_off() {
        assert_eq!(EngineStateMachine::new().state(), Off);
    }

    #[test]
    fn kill_forces_off_from_any_state() {
        let snap = SensorSnapshot {
            kill: true,
            ..safe_snapshot()
        };
        for state in [Off, Standby, Running] {
            assert_eq!(
                transition(state, Some(&snap)),
                (Off, Command::Kill),
                "kill from {state:?}"
            );
        }
    }

    #[test]
    fn vacant_seat_is_equivalent_to_kill() {
        let snap = SensorSnapshot {
            seat_occupied: false,
            ..safe_snapshot()
        };
        for state in [Off, Standby, Running] {
            assert_eq!(transition(state, Some(&snap)), (Off, Command::Kill));
        }
    }

    #[test]
    fn detached_hitch_kills_while_running() {
        let snap = SensorSnapshot {
            hitch_attached: false,
            ..safe_snapshot()
        };
        assert_eq!(transition(Running, Some(&snap)), (Off, Command::Kill));
    }

    #[test]
    fn interlock_beats_rfid_authorization() {
        // Kill pressed AND RFID authorized: the interlock wins.
        let snap = SensorSnapshot {
            kill: true,
            rfid_authorized: true,
            ..safe_snapshot()
        };
        assert_eq!(transition(Off, Some(&snap)), (Off, Command::Kill));
    }

    #[test]
    fn absent_snapshot_never_changes_state() {
        for state in [Off, Standby, Running] {
            assert_eq!(transition(state, None), (state, Command::Wait));
        }
    }

    #[test]
    fn off_to_standby_on_rfid() {
        let snap = SensorSnapshot {
            rfid_authorized: true,
            ..safe_snapshot()
        };
        assert_eq!(transition(Off, Some(&snap)), (Standby, Command::Standby));
    }

    #[test]
    fn off_stays_off_without_rfid() {
        assert_eq!(transition(Off, Some(&safe_snapshot())), (Off, Command::Wait));
    }

    #[test]
    fn standby_to_running_when_all_preconditions_hold() {
        let snap = SensorSnapshot {
            ignition_requested: true,
            cvt_guard_closed: true,
            brakes_engaged: true,
            ..safe_snapshot()
        };
        assert_eq!(
            transition(Standby, Some(&snap)),
            (Running, Command::Ignition)
        );
    }

    #[test]
    fn open_guard_blocks_ignition() {
        let snap = SensorSnapshot {
            ignition_requested: true,
            cvt_guard_closed: false,
            brakes_engaged: true,
            ..safe_snapshot()
        };
        assert_eq!(transition(Standby, Some(&snap)), (Standby, Command::Wait));
    }

    #[test]
    fn any_single_missing_precondition_blocks_ignition() {
        for missing in 0..3 {
            let snap = SensorSnapshot {
                ignition_requested: missing != 0,
                cvt_guard_closed: missing != 1,
                brakes_engaged: missing != 2,
                ..safe_snapshot()
            };
            assert_eq!(
                transition(Standby, Some(&snap)),
                (Standby, Command::Wait),
                "precondition {missing} missing must block ignition"
            );
        }
    }

    #[test]
    fn running_holds_until_interlock() {
        let snap = SensorSnapshot {
            // RFID and ignition inputs are irrelevant while running.
            rfid_authorized: true,
            ignition_requested: true,
            cvt_guard_closed: true,
            brakes_engaged: true,
            ..safe_snapshot()
        };
        assert_eq!(transition(Running, Some(&snap)), (Running, Command::Wait));
    }

    #[test]
    fn full_lifecycle_off_standby_running_off() {
        let mut sm = EngineStateMachine::new();

        let authorized = SensorSnapshot {
            rfid_authorized: true,
            ..safe_snapshot()
        };
        assert_eq!(sm.step(Some(&authorized)), Command::Standby);
        assert_eq!(sm.state(), Standby);

        let ready = SensorSnapshot {
            ignition_requested: true,
            cvt_guard_closed: true,
            brakes_engaged: true,
            ..safe_snapshot()
        };
        assert_eq!(sm.step(Some(&ready)), Command::Ignition);
        assert_eq!(sm.state(), Running);

        let killed = SensorSnapshot {
            kill: true,
            ..safe_snapshot()
        };
        assert_eq!(sm.step(Some(&killed)), Command::Kill);
        assert_eq!(sm.state(), Off);

        // The machine cycles; a fresh authorization restarts it.
        assert_eq!(sm.step(Some(&authorized)), Command::Standby);
        assert_eq!(sm.state(), Standby);
    }

    #[test]
    fn absent_snapshot_between_cycles_is_inert() {
        let mut sm = EngineStateMachine::new();
        let authorized = SensorSnapshot {
            rfid_authorized: true,
            ..safe_snapshot()
        };
        sm.step(Some(&authorized));
        assert_eq!(sm.state(), Standby);

        assert_eq!(sm.step(None), Command::Wait);
        assert_eq!(sm.state(), Standby);
    }
}

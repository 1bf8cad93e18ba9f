//! Command dispatcher.
//!
//! Serializes the cycle's chosen commands to the actuation transport.
//! `Wait` commands are idempotent no-ops and are skipped. Dispatch is
//! fire-and-forget at-most-once: a failed write is reported upward for
//! telemetry but never rolls back the already-computed transitions and
//! is never retried.

use tps_common::command::Command;
use tps_common::error::TransportError;

use crate::transport::ControllerPort;

/// The up-to-three commands produced by one decision cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleCommands {
    /// Engine lifecycle command.
    pub engine: Command,
    /// Steering axis command.
    pub steering: Command,
    /// Ballast axis command.
    pub ballast: Command,
}

impl CycleCommands {
    /// An all-`Wait` cycle (nothing to send).
    pub const fn idle() -> Self {
        Self {
            engine: Command::Wait,
            steering: Command::Wait,
            ballast: Command::Wait,
        }
    }
}

impl Default for CycleCommands {
    fn default() -> Self {
        Self::idle()
    }
}

/// Result of one dispatch pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of commands actually written to the wire.
    pub sent: u8,
    /// First transport failure, if any. Writes after the failure are
    /// not attempted in this cycle.
    pub error: Option<TransportError>,
}

impl DispatchOutcome {
    /// True when every non-`Wait` command went out.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Sequences cycle commands onto the controller transport.
pub struct Dispatcher<C: ControllerPort> {
    controller: C,
}

impl<C: ControllerPort> Dispatcher<C> {
    /// Wrap the controller transport.
    pub const fn new(controller: C) -> Self {
        Self { controller }
    }

    /// Send the cycle's non-`Wait` commands in engine → steering →
    /// ballast order, stopping at the first transport failure.
    pub fn dispatch(&mut self, commands: &CycleCommands) -> DispatchOutcome {
        let mut outcome = DispatchOutcome {
            sent: 0,
            error: None,
        };
        for command in [commands.engine, commands.steering, commands.ballast] {
            if command.is_wait() {
                continue;
            }
            match self.controller.send(command) {
                Ok(()) => outcome.sent += 1,
                Err(e) => {
                    outcome.error = Some(e);
                    break;
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fakes::RecordingController;

    #[test]
    fn wait_commands_are_not_sent() {
        let mut dispatcher = Dispatcher::new(RecordingController::new());
        let outcome = dispatcher.dispatch(&CycleCommands::idle());
        assert!(outcome.is_ok());
        assert_eq!(outcome.sent, 0);
        assert!(dispatcher.controller.sent.is_empty());
    }

    #[test]
    fn non_wait_commands_sent_in_order() {
        let mut dispatcher = Dispatcher::new(RecordingController::new());
        let commands = CycleCommands {
            engine: Command::Ignition,
            steering: Command::SteerUp,
            ballast: Command::BallastDown,
        };
        let outcome = dispatcher.dispatch(&commands);
        assert!(outcome.is_ok());
        assert_eq!(outcome.sent, 3);
        assert_eq!(
            dispatcher.controller.sent,
            vec![Command::Ignition, Command::SteerUp, Command::BallastDown]
        );
    }

    #[test]
    fn mixed_wait_skipped_others_sent() {
        let mut dispatcher = Dispatcher::new(RecordingController::new());
        let commands = CycleCommands {
            engine: Command::Wait,
            steering: Command::SteerDown,
            ballast: Command::Wait,
        };
        let outcome = dispatcher.dispatch(&commands);
        assert_eq!(outcome.sent, 1);
        assert_eq!(dispatcher.controller.sent, vec![Command::SteerDown]);
    }

    #[test]
    fn stops_at_first_failure() {
        let mut dispatcher = Dispatcher::new(RecordingController::failing_after(1));
        let commands = CycleCommands {
            engine: Command::Kill,
            steering: Command::SteerUp,
            ballast: Command::BallastUp,
        };
        let outcome = dispatcher.dispatch(&commands);
        assert_eq!(outcome.sent, 1);
        assert!(matches!(
            outcome.error,
            Some(TransportError::WriteFailed(_))
        ));
        // Only the command before the failure went out.
        assert_eq!(dispatcher.controller.sent, vec![Command::Kill]);
    }

    #[test]
    fn failure_on_first_write_sends_nothing() {
        let mut dispatcher = Dispatcher::new(RecordingController::failing_after(0));
        let commands = CycleCommands {
            engine: Command::Standby,
            steering: Command::Wait,
            ballast: Command::Wait,
        };
        let outcome = dispatcher.dispatch(&commands);
        assert_eq!(outcome.sent, 0);
        assert!(!outcome.is_ok());
    }
}

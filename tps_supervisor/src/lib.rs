//! # TPS Supervisor Library
//!
//! Safety-interlocked control supervisor for the MR15 tractor-pulling
//! vehicle. Samples discrete sensor state from a monitoring PLC over a
//! serial line, derives the engine lifecycle state (OFF / STANDBY /
//! RUNNING), and emits discrete commands to an actuation PLC. The
//! decision engine never emits an unsafe command, even when sensor
//! reads are partial, malformed, or missing.
//!
//! ## Decision Pipeline
//!
//! ```text
//! monitor PLC ──line──► decode ──► engine FSM ──┐
//!                               ├► steering     ├──► dispatch ──► controller PLC
//!                               └► ballast      ┘
//!                                                └──► telemetry frame (read-only)
//! ```
//!
//! ## Safety Posture
//!
//! - The decoder is the sole validation gatekeeper: snapshots are
//!   complete or absent, never partial.
//! - An absent sample never changes state and always yields `Wait`.
//! - The kill / seat / hitch interlocks are evaluated first, every
//!   cycle, and force `Off`/`Kill` from any state including `Running`.
//! - A failed dispatch is reported but never rolls back a transition.

pub mod auxiliary;
pub mod config;
pub mod cycle;
pub mod decode;
pub mod dispatch;
pub mod engine;
pub mod telemetry;
pub mod transport;

pub use cycle::Supervisor;

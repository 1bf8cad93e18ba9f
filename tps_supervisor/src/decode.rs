//! SensorFrame decoder.
//!
//! Turns one raw monitor line into a validated [`SensorSnapshot`] or a
//! [`DecodeError`]. This is the sole validation gatekeeper: the engine
//! state machine never sees a malformed or partially populated record.
//!
//! ## Wire Format
//!
//! One JSON object per line, emitted by the monitor PLC:
//!
//! ```json
//! {"kill": false, "seat": true, "hitch": true, "rfid": false,
//!  "ignition": false, "guard": true, "brakes": true,
//!  "steering": "neutral", "ballast": "neutral"}
//! ```
//!
//! Boolean keys: `kill`, `seat`, `hitch`, `rfid`, `ignition`, `guard`,
//! `brakes`. Direction keys: `steering`, `ballast` (`"up"`, `"down"`,
//! `"neutral"`). Unknown extra keys are ignored.

use serde_json::Value;

use tps_common::error::DecodeError;
use tps_common::snapshot::{Direction, SensorSnapshot};

/// Decode one raw monitor line into a validated snapshot.
///
/// Pure function of its input, no side effects.
///
/// # Errors
///
/// - [`DecodeError::MalformedPayload`] if the line is not a JSON object.
/// - [`DecodeError::IncompleteFields`] if any required field is absent
///   or has the wrong type; the first offending field is named.
pub fn decode(raw: &str) -> Result<SensorSnapshot, DecodeError> {
    let value: Value =
        serde_json::from_str(raw.trim()).map_err(|_| DecodeError::MalformedPayload)?;
    let record = value.as_object().ok_or(DecodeError::MalformedPayload)?;

    let flag = |field: &'static str| -> Result<bool, DecodeError> {
        record
            .get(field)
            .and_then(Value::as_bool)
            .ok_or(DecodeError::IncompleteFields { field })
    };
    let direction = |field: &'static str| -> Result<Direction, DecodeError> {
        record
            .get(field)
            .and_then(Value::as_str)
            .and_then(Direction::from_wire)
            .ok_or(DecodeError::IncompleteFields { field })
    };

    Ok(SensorSnapshot {
        kill: flag("kill")?,
        seat_occupied: flag("seat")?,
        hitch_attached: flag("hitch")?,
        rfid_authorized: flag("rfid")?,
        ignition_requested: flag("ignition")?,
        cvt_guard_closed: flag("guard")?,
        brakes_engaged: flag("brakes")?,
        steering: direction("steering")?,
        ballast: direction("ballast")?,
    })
}

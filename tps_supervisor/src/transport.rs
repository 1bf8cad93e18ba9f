//! Serial transports for the monitor and controller PLC links.
//!
//! The supervisor talks to two Arduino PLCs over USB serial: the
//! monitor unit streams line-oriented sensor records, the controller
//! unit accepts single-byte command codes. Both seams are traits so the
//! whole decision loop runs against in-memory fakes in tests.
//!
//! All reads and writes carry a bounded timeout. A monitor read timeout
//! is an expected condition (no sample this cycle), not a fault.

use std::io::{BufRead, BufReader, Write};
use std::time::Duration;

use serialport::SerialPort;
use tracing::info;

use tps_common::command::Command;
use tps_common::error::TransportError;

// ─── Transport Seams ────────────────────────────────────────────────

/// Inbound sensor transport: one raw line per read.
pub trait MonitorPort {
    /// Block for at most the configured timeout and return one raw
    /// sensor line.
    ///
    /// # Errors
    ///
    /// [`TransportError::Timeout`] when no complete line arrives within
    /// the window; [`TransportError::Disconnected`] when the device has
    /// gone away.
    fn read_frame(&mut self) -> Result<String, TransportError>;
}

/// Outbound actuation transport: one command code per write.
pub trait ControllerPort {
    /// Write one command's wire code.
    ///
    /// # Errors
    ///
    /// [`TransportError::WriteFailed`] or [`TransportError::Timeout`]
    /// on a failed or timed-out write.
    fn send(&mut self, command: Command) -> Result<(), TransportError>;
}

// ─── Serial Implementations ─────────────────────────────────────────

/// Buffered line reader over the monitor PLC serial link.
pub struct SerialMonitor {
    reader: BufReader<Box<dyn SerialPort>>,
}

impl SerialMonitor {
    /// Open the monitor device at the given baud rate with a bounded
    /// read timeout.
    pub fn open(device: &str, baud: u32, timeout: Duration) -> Result<Self, TransportError> {
        info!("Opening monitor PLC on {device} at {baud} baud");
        let port = serialport::new(device, baud)
            .timeout(timeout)
            .open()
            .map_err(|e| TransportError::Disconnected(format!("open {device}: {e}")))?;
        Ok(Self {
            reader: BufReader::new(port),
        })
    }
}

impl MonitorPort for SerialMonitor {
    fn read_frame(&mut self) -> Result<String, TransportError> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(TransportError::Disconnected("monitor EOF".into())),
            Ok(_) => Ok(line),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Err(TransportError::Timeout),
            Err(e) => Err(TransportError::Disconnected(format!("monitor read: {e}"))),
        }
    }
}

/// Single-byte command writer over the controller PLC serial link.
pub struct SerialController {
    port: Box<dyn SerialPort>,
}

impl SerialController {
    /// Open the controller device at the given baud rate with a bounded
    /// write timeout.
    pub fn open(device: &str, baud: u32, timeout: Duration) -> Result<Self, TransportError> {
        info!("Opening controller PLC on {device} at {baud} baud");
        let port = serialport::new(device, baud)
            .timeout(timeout)
            .open()
            .map_err(|e| TransportError::Disconnected(format!("open {device}: {e}")))?;
        Ok(Self { port })
    }
}

impl ControllerPort for SerialController {
    fn send(&mut self, command: Command) -> Result<(), TransportError> {
        let code = [command.wire_code()];
        let write = self.port.write_all(&code).and_then(|()| self.port.flush());
        match write {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Err(TransportError::Timeout),
            Err(e) => Err(TransportError::WriteFailed(format!("{code:?}: {e}"))),
        }
    }
}

// ─── Test Fakes ─────────────────────────────────────────────────────

// Licensed under the Apache-2.0 license

//! Access to the PRCMU memory ranges used by the I2C mailbox.

use core::fmt;
use thiserror::Error;

/// The two PRCMU ranges the mailbox protocol touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    /// PRCMU register block (doorbell, ack and interrupt registers).
    Registers,
    /// Tightly-coupled data memory shared with the PRCMU firmware.
    Tcdm,
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::Registers => f.write_str("prcmu"),
            Window::Tcdm => f.write_str("prcmu-tcdm"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("offset {offset:#x} is outside the {window} range")]
    OutOfRange { window: Window, offset: usize },
    #[error("misaligned {window} access at offset {offset:#x}")]
    Misaligned { window: Window, offset: usize },
    #[error("bus fault on {window} access at offset {offset:#x}")]
    Bus { window: Window, offset: usize },
}

/// Raw accessor for the PRCMU register block and TCDM window.
///
/// Implementations pass accesses straight through and never interpret the
/// data. Byte accessors address the TCDM, word accessors the register block.
pub trait TcdmTransport {
    /// Reads one byte from the TCDM window.
    fn read_u8(&mut self, offset: usize) -> Result<u8, TransportError>;

    /// Writes one byte to the TCDM window.
    fn write_u8(&mut self, offset: usize, value: u8) -> Result<(), TransportError>;

    /// Reads a 32-bit PRCMU register.
    fn read_u32(&mut self, offset: usize) -> Result<u32, TransportError>;

    /// Writes a 32-bit PRCMU register.
    fn write_u32(&mut self, offset: usize, value: u32) -> Result<(), TransportError>;
}

// Licensed under the Apache-2.0 license

use core::fmt;
use prcmu_mbox_common::TransportError;
use thiserror::Error;

/// Handshake step that ran out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStage {
    /// Waiting for a previous request to leave the outgoing mailbox.
    MailboxIdle,
    /// Waiting for the firmware to acknowledge our request.
    Ack,
}

impl fmt::Display for WaitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitStage::MailboxIdle => f.write_str("mailbox idle"),
            WaitStage::Ack => f.write_str("mailbox ack"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrcmuError {
    /// The PRCMU firmware is not in the execute state; carries the raw state.
    #[error("PRCMU firmware not ready (state: {0})")]
    NotReady(u8),
    #[error("timed out waiting for {0}")]
    Timeout(WaitStage),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

// Licensed under the Apache-2.0 license

//! One register access to the AB8500, with chip-specific status handling.

use crate::{Ab8500Error, QuirkAction, QuirkTable};
use boottime::Clock;
use log::{debug, error};
use prcmu_driver::I2cMailbox;
use prcmu_mbox_common::{Bank, BankReg, I2cOp, I2cRequest, SlaveOp, TcdmTransport};

/// How a transaction that did not fail was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The PRCMU reported the expected status.
    Success(u8),
    /// The status was wrong, but a quirk entry supplied the answer.
    QuirkResolved(u8),
}

impl TransferOutcome {
    pub fn value(self) -> u8 {
        match self {
            TransferOutcome::Success(v) | TransferOutcome::QuirkResolved(v) => v,
        }
    }
}

/// Reads or writes the register at `addr`.
///
/// `value` is sent for reads too. Reads resolve to the byte reported by the
/// PRCMU, writes to `value`.
pub fn transfer<T: TcdmTransport, C: Clock>(
    mailbox: &mut I2cMailbox<T, C>,
    quirks: &QuirkTable,
    addr: BankReg,
    value: u8,
    op: I2cOp,
) -> Result<TransferOutcome, Ab8500Error> {
    let bank = Bank::new(addr.bank()).ok_or(Ab8500Error::InvalidAddress(addr.into()))?;
    let request = I2cRequest::new(SlaveOp::new(bank, op), addr.reg(), value);

    let ack = mailbox.exchange(&request)?;

    if ack.status != op.expected_status() {
        if let Some(entry) = quirks.lookup(addr, op) {
            let QuirkAction::ReadAs(val) = entry.action;
            debug!("{:?}: status {} resolved as {val:#x}", addr, ack.status);
            return Ok(TransferOutcome::QuirkResolved(val));
        }
        error!("return status {}", ack.status);
        return Err(Ab8500Error::TransactionFailed(ack.status));
    }

    Ok(TransferOutcome::Success(match op {
        I2cOp::Read => ack.val,
        I2cOp::Write => value,
    }))
}

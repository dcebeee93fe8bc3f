// Licensed under the Apache-2.0 license

use prcmu_driver::PrcmuError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Ab8500Error {
    #[error(transparent)]
    Prcmu(#[from] PrcmuError),
    /// The PRCMU reported a status other than the one expected for the
    /// operation.
    #[error("transaction failed with status {0}")]
    TransactionFailed(u8),
    /// Register accesses move exactly one byte.
    #[error("invalid payload length {0}")]
    InvalidArgument(usize),
    /// The bank does not fit the mailbox request encoding.
    #[error("invalid register address {0:#06x}")]
    InvalidAddress(u16),
}

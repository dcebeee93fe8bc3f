// Licensed under the Apache-2.0 license

//! Chip-specific handling of non-OK transaction status.

use crate::regs::{AB8500_MISC_IC_NAME_REG, AB8500_VERSION_AB8500};
use prcmu_mbox_common::{BankReg, I2cOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuirkAction {
    /// Report success with this value instead of the failure.
    ReadAs(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuirkEntry {
    pub addr: BankReg,
    pub op: I2cOp,
    pub action: QuirkAction,
}

/// Transactions whose failure is an expected answer on some chips.
#[derive(Debug, Clone, Copy)]
pub struct QuirkTable {
    entries: &'static [QuirkEntry],
}

impl QuirkTable {
    pub const fn new(entries: &'static [QuirkEntry]) -> Self {
        QuirkTable { entries }
    }

    pub const fn empty() -> Self {
        QuirkTable { entries: &[] }
    }

    pub fn lookup(&self, addr: BankReg, op: I2cOp) -> Option<&QuirkEntry> {
        self.entries.iter().find(|e| e.addr == addr && e.op == op)
    }
}

impl Default for QuirkTable {
    fn default() -> Self {
        AB8500_QUIRKS
    }
}

/// The AB8500 has no IC-name register, but reading it is how the later
/// variants are told apart, so a failed read means AB8500.
pub const AB8500_QUIRKS: QuirkTable = QuirkTable::new(&[QuirkEntry {
    addr: AB8500_MISC_IC_NAME_REG,
    op: I2cOp::Read,
    action: QuirkAction::ReadAs(AB8500_VERSION_AB8500),
}]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ic_name_read_only() {
        let entry = AB8500_QUIRKS.lookup(AB8500_MISC_IC_NAME_REG, I2cOp::Read);
        assert_eq!(entry.map(|e| e.action), Some(QuirkAction::ReadAs(0)));
        assert!(AB8500_QUIRKS
            .lookup(AB8500_MISC_IC_NAME_REG, I2cOp::Write)
            .is_none());
        assert!(AB8500_QUIRKS.lookup(BankReg(0x1080), I2cOp::Read).is_none());
        assert!(QuirkTable::empty()
            .lookup(AB8500_MISC_IC_NAME_REG, I2cOp::Read)
            .is_none());
    }
}

// Licensed under the Apache-2.0 license

use core::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Header written to the mailbox 5 header slot; selects the I2C sub-channel.
pub const MB5_HEADER_I2C: u8 = 0;

/// `hw_bits` flag asking the PRCMU to end the transfer with a STOP condition.
pub const PRCMU_I2C_STOP_EN: u8 = 1 << 3;

/// Ack status reported by the PRCMU firmware after a successful write.
pub const I2C_WR_OK: u8 = 0x1;
/// Ack status reported by the PRCMU firmware after a successful read.
pub const I2C_RD_OK: u8 = 0x2;

/// Power state of the PRCMU (XP70) firmware, as published in the TCDM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum CoprocessorState {
    NotReady = 0x00,
    Boot = 0x01,
    Execute = 0x02,
    DeepSleep = 0x03,
    Sleep = 0x04,
    Idle = 0x05,
    Reset = 0x06,
}

/// Direction of a single-byte I2C transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum I2cOp {
    Write = 0,
    Read = 1,
}

impl I2cOp {
    /// Status the PRCMU firmware reports when this operation succeeds.
    pub const fn expected_status(self) -> u8 {
        match self {
            I2cOp::Write => I2C_WR_OK,
            I2cOp::Read => I2C_RD_OK,
        }
    }
}

/// Register bank of the PMIC; selects the I2C slave behind the PRCMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bank(u8);

impl Bank {
    /// Banks occupy bits 1..=5 of the slave-op byte.
    pub const MAX: u8 = 0x1f;

    pub const fn new(id: u8) -> Option<Self> {
        if id <= Self::MAX {
            Some(Bank(id))
        } else {
            None
        }
    }

    pub const fn id(self) -> u8 {
        self.0
    }
}

/// Register address as used by the PMIC framework: bank in the high byte,
/// register offset within the bank in the low byte.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BankReg(pub u16);

impl BankReg {
    pub const fn new(bank: u8, reg: u8) -> Self {
        BankReg(((bank as u16) << 8) | reg as u16)
    }

    pub const fn bank(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn reg(self) -> u8 {
        self.0 as u8
    }
}

impl From<u16> for BankReg {
    fn from(value: u16) -> Self {
        BankReg(value)
    }
}

impl From<BankReg> for u16 {
    fn from(value: BankReg) -> Self {
        value.0
    }
}

impl fmt::Debug for BankReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BankReg({:#04x}:{:#04x})", self.bank(), self.reg())
    }
}

/// The slave-op byte of a mailbox 5 request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlaveOp {
    pub bank: Bank,
    pub op: I2cOp,
}

impl SlaveOp {
    /// Marks the request as an I2C transfer on the PMIC bus.
    const I2C_MARKER: u8 = 1 << 6;

    pub const fn new(bank: Bank, op: I2cOp) -> Self {
        SlaveOp { bank, op }
    }

    pub const fn encode(self) -> u8 {
        (self.bank.id() << 1) | Self::I2C_MARKER | self.op as u8
    }

    /// Returns `None` for bytes that could not have come from `encode`.
    pub fn decode(byte: u8) -> Option<Self> {
        if byte & Self::I2C_MARKER == 0 || byte & 0x80 != 0 {
            return None;
        }
        let bank = Bank::new((byte >> 1) & Bank::MAX)?;
        let op = I2cOp::try_from(byte & 1).ok()?;
        Some(SlaveOp { bank, op })
    }
}

/// Request fields laid out as they appear at `PRCM_REQ_MB5`.
#[repr(C)]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
pub struct I2cRequest {
    pub slave_op: u8,
    pub hw_bits: u8,
    pub reg: u8,
    pub val: u8,
}

impl I2cRequest {
    pub const fn new(slave_op: SlaveOp, reg: u8, val: u8) -> Self {
        I2cRequest {
            slave_op: slave_op.encode(),
            hw_bits: PRCMU_I2C_STOP_EN,
            reg,
            val,
        }
    }
}

/// Result fields read back from the mailbox 5 ack area.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct I2cAck {
    pub status: u8,
    pub val: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slave_op_roundtrip_all_banks() {
        for id in 0..=Bank::MAX {
            for op in [I2cOp::Write, I2cOp::Read] {
                let slave_op = SlaveOp::new(Bank::new(id).unwrap(), op);
                assert_eq!(SlaveOp::decode(slave_op.encode()), Some(slave_op));
            }
        }
    }

    #[test]
    fn test_slave_op_encoding() {
        let bank = Bank::new(2).unwrap();
        assert_eq!(SlaveOp::new(bank, I2cOp::Write).encode(), 0x44);
        assert_eq!(SlaveOp::new(bank, I2cOp::Read).encode(), 0x45);
        let misc = Bank::new(0x10).unwrap();
        assert_eq!(SlaveOp::new(misc, I2cOp::Read).encode(), 0x61);
    }

    #[test]
    fn test_slave_op_decode_rejects_foreign_bytes() {
        assert_eq!(SlaveOp::decode(0x04), None);
        assert_eq!(SlaveOp::decode(0xc4), None);
    }

    #[test]
    fn test_bank_range() {
        assert!(Bank::new(Bank::MAX).is_some());
        assert!(Bank::new(Bank::MAX + 1).is_none());
    }

    #[test]
    fn test_bank_reg_split() {
        let addr = BankReg::from(0x1082);
        assert_eq!(addr.bank(), 0x10);
        assert_eq!(addr.reg(), 0x82);
        assert_eq!(BankReg::new(0x10, 0x82), addr);
        assert_eq!(u16::from(addr), 0x1082);
    }

    #[test]
    fn test_request_layout() {
        let slave_op = SlaveOp::new(Bank::new(2).unwrap(), I2cOp::Write);
        let req = I2cRequest::new(slave_op, 0x10, 0x55);
        assert_eq!(req.as_bytes(), &[0x44, PRCMU_I2C_STOP_EN, 0x10, 0x55]);
        let decoded = I2cRequest::read_from_bytes(&[0x45, 0x08, 0x10, 0x00]).unwrap();
        assert_eq!(decoded.slave_op, 0x45);
    }

    #[test]
    fn test_state_decode() {
        assert_eq!(
            CoprocessorState::try_from(2).ok(),
            Some(CoprocessorState::Execute)
        );
        assert!(CoprocessorState::try_from(7).is_err());
        assert_eq!(u8::from(CoprocessorState::Sleep), 4);
    }

    #[test]
    fn test_expected_status() {
        assert_eq!(I2cOp::Write.expected_status(), I2C_WR_OK);
        assert_eq!(I2cOp::Read.expected_status(), I2C_RD_OK);
    }
}

// Licensed under the Apache-2.0 license

use num_enum::{FromPrimitive, IntoPrimitive};
use prcmu_mbox_common::BankReg;

pub const AB8500_MISC: u8 = 0x10;

/// Silicon revision.
pub const AB8500_MISC_REV_REG: BankReg = BankReg::new(AB8500_MISC, 0x80);
/// Chip variant. Not implemented by the original AB8500.
pub const AB8500_MISC_IC_NAME_REG: BankReg = BankReg::new(AB8500_MISC, 0x82);

pub const AB8500_VERSION_AB8500: u8 = 0x0;

/// Contents of the IC-name register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Ab8500Version {
    Ab8500 = 0x0,
    Ab8505 = 0x1,
    Ab9540 = 0x2,
    Ab8540 = 0x4,
    #[num_enum(catch_all)]
    Unknown(u8),
}

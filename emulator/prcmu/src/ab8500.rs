// Licensed under the Apache-2.0 license

use prcmu_mbox_common::BankReg;
use std::collections::{HashMap, HashSet};

const MISC_REV: u16 = 0x1080;
const MISC_IC_NAME: u16 = 0x1082;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ab8500Variant {
    /// Original AB8500; has no IC-name register.
    Ab8500,
    Ab8505,
}

/// Register file of the PMIC as seen over the PRCMU I2C bus.
///
/// Registers spring into existence on first write. Addresses marked as holes
/// NACK both reads and writes.
#[derive(Debug, Clone)]
pub struct Ab8500Model {
    variant: Ab8500Variant,
    regs: HashMap<u16, u8>,
    holes: HashSet<u16>,
}

impl Ab8500Model {
    pub fn new(variant: Ab8500Variant) -> Self {
        let mut model = Ab8500Model {
            variant,
            regs: HashMap::new(),
            holes: HashSet::new(),
        };
        match variant {
            Ab8500Variant::Ab8500 => {
                model.regs.insert(MISC_REV, 0x30);
                model.holes.insert(MISC_IC_NAME);
            }
            Ab8500Variant::Ab8505 => {
                model.regs.insert(MISC_REV, 0x10);
                model.regs.insert(MISC_IC_NAME, 0x01);
            }
        }
        model
    }

    pub fn variant(&self) -> Ab8500Variant {
        self.variant
    }

    pub fn read(&self, addr: BankReg) -> Option<u8> {
        if self.holes.contains(&addr.0) {
            return None;
        }
        Some(self.regs.get(&addr.0).copied().unwrap_or(0))
    }

    pub fn write(&mut self, addr: BankReg, val: u8) -> bool {
        if self.holes.contains(&addr.0) {
            return false;
        }
        self.regs.insert(addr.0, val);
        true
    }

    pub fn get(&self, addr: u16) -> Option<u8> {
        self.regs.get(&addr).copied()
    }

    pub fn set(&mut self, addr: u16, val: u8) {
        self.holes.remove(&addr);
        self.regs.insert(addr, val);
    }

    /// Makes `addr` NACK from now on.
    pub fn punch_hole(&mut self, addr: u16) {
        self.regs.remove(&addr);
        self.holes.insert(addr);
    }
}

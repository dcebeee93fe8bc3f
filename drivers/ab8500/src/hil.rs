// Licensed under the Apache-2.0 license

//! Interface the PMIC framework expects from a chip driver.

use prcmu_mbox_common::BankReg;

/// Byte-wide register access to a power-management IC.
pub trait Pmic {
    type Error;

    /// Number of registers that can be enumerated linearly from zero.
    ///
    /// Chips with a sparse register space return 0.
    fn reg_count(&self) -> usize;

    /// Reads `buf.len()` registers starting at `reg`.
    fn read(&mut self, reg: BankReg, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes `buf.len()` registers starting at `reg`.
    fn write(&mut self, reg: BankReg, buf: &[u8]) -> Result<(), Self::Error>;

    fn reg_read(&mut self, reg: BankReg) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.read(reg, &mut buf)?;
        Ok(buf[0])
    }

    fn reg_write(&mut self, reg: BankReg, value: u8) -> Result<(), Self::Error> {
        self.write(reg, &[value])
    }
}

// Licensed under the Apache-2.0 license

use crate::regs::{AB8500_MISC_IC_NAME_REG, AB8500_MISC_REV_REG};
use crate::{transfer, Ab8500Error, Ab8500Version, Pmic, QuirkTable};
use boottime::Clock;
use log::{debug, error};
use prcmu_driver::I2cMailbox;
use prcmu_mbox_common::{BankReg, I2cOp, TcdmTransport};

/// Identification read at probe time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ab8500Info {
    pub version: Ab8500Version,
    pub chip_id: u8,
}

pub struct Ab8500<T, C> {
    mailbox: I2cMailbox<T, C>,
    quirks: QuirkTable,
    info: Ab8500Info,
}

impl<T: TcdmTransport, C: Clock> Ab8500<T, C> {
    /// Identifies the chip and returns a driver for it.
    pub fn probe(mailbox: I2cMailbox<T, C>, quirks: QuirkTable) -> Result<Self, Ab8500Error> {
        let mut pmic = Ab8500 {
            mailbox,
            quirks,
            info: Ab8500Info {
                version: Ab8500Version::Ab8500,
                chip_id: 0,
            },
        };

        // A plain AB8500 fails this read and the quirk table answers it. Any
        // other failure leaves the mailbox unusable, so the probe stops here.
        pmic.info.version = pmic.reg_read(AB8500_MISC_IC_NAME_REG)?.into();
        pmic.info.chip_id = pmic
            .reg_read(AB8500_MISC_REV_REG)
            .inspect_err(|e| error!("ab8500: failed to read chip id: {e}"))?;

        debug!(
            "ab8500: version: {:?}, chip id: {:#x}",
            pmic.info.version, pmic.info.chip_id
        );
        Ok(pmic)
    }

    pub fn info(&self) -> Ab8500Info {
        self.info
    }

    /// Hands the mailbox back.
    pub fn release(self) -> I2cMailbox<T, C> {
        self.mailbox
    }

    fn check_len(len: usize) -> Result<(), Ab8500Error> {
        if len != 1 {
            return Err(Ab8500Error::InvalidArgument(len));
        }
        Ok(())
    }
}

impl<T: TcdmTransport, C: Clock> Pmic for Ab8500<T, C> {
    type Error = Ab8500Error;

    fn reg_count(&self) -> usize {
        // The register space has holes that fail to read, so a linear dump
        // from zero is not possible.
        0
    }

    fn read(&mut self, reg: BankReg, buf: &mut [u8]) -> Result<(), Ab8500Error> {
        Self::check_len(buf.len())?;
        buf[0] = 0;
        let outcome = transfer(&mut self.mailbox, &self.quirks, reg, 0, I2cOp::Read)
            .inspect_err(|e| error!("read failed: {e}"))?;
        buf[0] = outcome.value();
        Ok(())
    }

    fn write(&mut self, reg: BankReg, buf: &[u8]) -> Result<(), Ab8500Error> {
        Self::check_len(buf.len())?;
        transfer(&mut self.mailbox, &self.quirks, reg, buf[0], I2cOp::Write)
            .inspect_err(|e| error!("write failed: {e}"))?;
        Ok(())
    }
}

// Licensed under the Apache-2.0 license

//! AB8500 PMIC register access through the PRCMU I2C mailbox.

#![cfg_attr(target_arch = "arm", no_std)]

mod error;
pub mod hil;
pub mod pmic;
pub mod quirks;
pub mod regs;
pub mod transfer;

pub use error::Ab8500Error;
pub use hil::Pmic;
pub use pmic::{Ab8500, Ab8500Info};
pub use quirks::{QuirkAction, QuirkEntry, QuirkTable, AB8500_QUIRKS};
pub use regs::Ab8500Version;
pub use transfer::{transfer, TransferOutcome};

// Licensed under the Apache-2.0 license

//! Host side of the PRCMU I2C mailbox (mailbox 5).
//!
//! The AB8500 PMIC hangs off an I2C bus that only the PRCMU firmware can
//! drive. Register accesses are therefore posted as requests in the PRCMU
//! TCDM, signalled with a doorbell, and completed when the firmware raises
//! the mailbox 5 acknowledgment interrupt.

#![cfg_attr(target_arch = "arm", no_std)]

mod error;
pub mod mailbox;
pub mod mmio;
pub mod readiness;

pub use error::{PrcmuError, WaitStage};
pub use mailbox::I2cMailbox;
pub use mmio::MmioTransport;
pub use readiness::check_ready;

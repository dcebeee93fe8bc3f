// Licensed under the Apache-2.0 license

//! Host-side model of the PRCMU I2C mailbox and the AB8500 behind it.

mod ab8500;
mod clock;
mod prcmu;

pub use ab8500::{Ab8500Model, Ab8500Variant};
pub use clock::FakeClock;
pub use prcmu::{Access, AckMode, Prcmu, I2C_NACK};

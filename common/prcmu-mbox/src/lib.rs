// Licensed under the Apache-2.0 license

//! Types and constants shared between the PRCMU mailbox firmware drivers
//! and the emulated PRCMU.

#![cfg_attr(target_arch = "arm", no_std)]

pub mod hil;
pub mod messages;
pub mod regs;

pub use hil::{TcdmTransport, TransportError, Window};
pub use messages::*;

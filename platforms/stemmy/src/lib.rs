// Licensed under the Apache-2.0 license

//! Board support for the Samsung U8500 phones (stemmy).
//!
//! The boot image calls [`init_console`], then [`pmic_init`] with the clock
//! from [`mtu_clock`].

#![cfg_attr(target_arch = "arm", no_std)]

use ab8500_driver::{Ab8500, Ab8500Error, AB8500_QUIRKS};
use boottime::{println, Clock, DownCounterClock, HexWord, StaticRef};
use core::fmt::Write;
use log::LevelFilter;
use prcmu_driver::{I2cMailbox, MmioTransport};
use thiserror::Error;
use tock_registers::registers::ReadOnly;
use ux500_config::{MailboxConfig, Ux500MemoryMap};

pub const STEMMY_MEMORY_MAP: Ux500MemoryMap = Ux500MemoryMap {
    prcmu_offset: 0x8015_7000,
    prcmu_size: 0x2000,
    prcmu_tcpm_offset: 0x801b_0000,
    prcmu_tcpm_size: 0x8000,
    prcmu_tcdm_offset: 0x801b_8000,
    prcmu_tcdm_size: 0x1000,
};

/// Value register of MTU0 timer 0, free running since the boot ROM.
const MTU0_TIMER0_VAL: usize = 0xa03c_6014;
const MTU_RATE_HZ: u32 = 2_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("PRCMU mailbox already in use")]
    MailboxTaken,
    #[error(transparent)]
    Pmic(#[from] Ab8500Error),
}

/// Registers the boot console and routes `log` records to it.
pub fn init_console(writer: &'static mut dyn Write, level: LevelFilter) {
    boottime::set_printer(writer);
    if boottime::init_logger(level).is_err() {
        println!("logger already set");
    }
}

/// Clock driven by the MTU.
///
/// # Safety
///
/// Must run on the board, with MTU0 timer 0 counting down.
pub unsafe fn mtu_clock() -> DownCounterClock {
    DownCounterClock::new(
        StaticRef::new(MTU0_TIMER0_VAL as *const ReadOnly<u32>),
        MTU_RATE_HZ,
    )
}

/// Probes the AB8500 behind the PRCMU.
///
/// # Safety
///
/// Must run on the board; the PRCMU ranges of [`STEMMY_MEMORY_MAP`] are
/// accessed directly.
pub unsafe fn pmic_init<C: Clock>(clock: C) -> Result<Ab8500<MmioTransport, C>, PlatformError> {
    println!(
        "PRCMU at {} (TCDM at {})",
        HexWord(STEMMY_MEMORY_MAP.prcmu_offset),
        HexWord(STEMMY_MEMORY_MAP.prcmu_tcdm_offset)
    );
    let transport = MmioTransport::take(&STEMMY_MEMORY_MAP).ok_or(PlatformError::MailboxTaken)?;
    let mailbox = I2cMailbox::new(transport, clock, MailboxConfig::default());
    Ok(Ab8500::probe(mailbox, AB8500_QUIRKS)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prcmu_mbox_common::regs::{
        PRCM_ARM_IT1_VAL, PRCM_MBOX_HEADER_REQ_MB5, PRCM_REGS_SIZE, PRCM_XP70_CUR_PWR_STATE,
    };

    #[test]
    fn test_memory_map_covers_mailbox() {
        let map = STEMMY_MEMORY_MAP;
        assert!(PRCM_ARM_IT1_VAL + 4 <= map.prcmu_size as usize);
        assert!(PRCM_REGS_SIZE <= map.prcmu_size as usize);
        assert!(PRCM_XP70_CUR_PWR_STATE < map.prcmu_tcdm_size as usize);
        assert!(PRCM_MBOX_HEADER_REQ_MB5 < map.prcmu_tcdm_size as usize);
    }

    #[test]
    fn test_tcdm_follows_tcpm() {
        let map = STEMMY_MEMORY_MAP;
        assert_eq!(
            map.prcmu_tcpm_offset + map.prcmu_tcpm_size,
            map.prcmu_tcdm_offset
        );
        assert_eq!(map, Ux500MemoryMap::default());
    }

    #[test]
    fn test_console_carries_log_records() {
        let out: *mut String = Box::into_raw(Box::default());
        init_console(unsafe { &mut *out }, LevelFilter::Info);

        log::info!("ab8500: version: Ab8505, chip id: 0x10");
        log::debug!("mailbox 5 ack");

        let out = unsafe { &*out };
        assert!(out.contains("[INFO]"));
        assert!(out.contains("chip id: 0x10"));
        assert!(!out.contains("mailbox 5 ack"));
    }
}

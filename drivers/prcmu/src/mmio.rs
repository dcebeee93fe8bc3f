// Licensed under the Apache-2.0 license

//! Memory-mapped access to the PRCMU register block and TCDM.

use core::ptr::{read_volatile, write_volatile};
use portable_atomic::{AtomicBool, Ordering};
use prcmu_mbox_common::regs::{PRCM_REGS_SIZE, PRCM_TCDM_SIZE};
use prcmu_mbox_common::{TcdmTransport, TransportError, Window};
use ux500_config::Ux500MemoryMap;

static TAKEN: AtomicBool = AtomicBool::new(false);

pub struct MmioTransport {
    regs: *mut u8,
    regs_size: usize,
    tcdm: *mut u8,
    tcdm_size: usize,
}

impl MmioTransport {
    /// Builds a transport over two raw ranges.
    ///
    /// # Safety
    ///
    /// `regs` and `tcdm` must be valid for volatile access over `regs_size`
    /// and `tcdm_size` bytes for as long as the transport lives, and nothing
    /// else may access them meanwhile.
    pub const unsafe fn from_raw_parts(
        regs: *mut u8,
        regs_size: usize,
        tcdm: *mut u8,
        tcdm_size: usize,
    ) -> Self {
        MmioTransport {
            regs,
            regs_size,
            tcdm,
            tcdm_size,
        }
    }

    /// Builds a transport over the ranges described by `map`.
    ///
    /// # Safety
    ///
    /// `map` must describe the PRCMU of the running SoC, and the caller must
    /// not create a second transport over the same ranges.
    pub unsafe fn new(map: &Ux500MemoryMap) -> Self {
        Self::from_raw_parts(
            map.prcmu_offset as usize as *mut u8,
            (map.prcmu_size as usize).min(PRCM_REGS_SIZE),
            map.prcmu_tcdm_offset as usize as *mut u8,
            (map.prcmu_tcdm_size as usize).min(PRCM_TCDM_SIZE),
        )
    }

    /// Like [`MmioTransport::new`], but returns `None` once a transport has
    /// already been taken.
    ///
    /// # Safety
    ///
    /// `map` must describe the PRCMU of the running SoC.
    pub unsafe fn take(map: &Ux500MemoryMap) -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Self::new(map))
        }
    }

    fn check(
        window: Window,
        size: usize,
        offset: usize,
        width: usize,
    ) -> Result<(), TransportError> {
        if offset % width != 0 {
            return Err(TransportError::Misaligned { window, offset });
        }
        match offset.checked_add(width) {
            Some(end) if end <= size => Ok(()),
            _ => Err(TransportError::OutOfRange { window, offset }),
        }
    }
}

impl TcdmTransport for MmioTransport {
    fn read_u8(&mut self, offset: usize) -> Result<u8, TransportError> {
        Self::check(Window::Tcdm, self.tcdm_size, offset, 1)?;
        Ok(unsafe { read_volatile(self.tcdm.add(offset)) })
    }

    fn write_u8(&mut self, offset: usize, value: u8) -> Result<(), TransportError> {
        Self::check(Window::Tcdm, self.tcdm_size, offset, 1)?;
        unsafe { write_volatile(self.tcdm.add(offset), value) };
        Ok(())
    }

    fn read_u32(&mut self, offset: usize) -> Result<u32, TransportError> {
        Self::check(Window::Registers, self.regs_size, offset, 4)?;
        Ok(unsafe { read_volatile(self.regs.add(offset) as *const u32) })
    }

    fn write_u32(&mut self, offset: usize, value: u32) -> Result<(), TransportError> {
        Self::check(Window::Registers, self.regs_size, offset, 4)?;
        unsafe { write_volatile(self.regs.add(offset) as *mut u32, value) };
        Ok(())
    }
}

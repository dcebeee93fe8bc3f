// Licensed under the Apache-2.0 license

#![cfg_attr(target_arch = "arm", no_std)]

use core::time::Duration;

/// Configures the PRCMU memory ranges used by the boot firmware.
/// These are the U8500 defaults; boards provide their own copy.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ux500MemoryMap {
    pub prcmu_offset: u32,
    pub prcmu_size: u32,
    pub prcmu_tcpm_offset: u32,
    pub prcmu_tcpm_size: u32,
    pub prcmu_tcdm_offset: u32,
    pub prcmu_tcdm_size: u32,
}

impl Default for Ux500MemoryMap {
    fn default() -> Self {
        Ux500MemoryMap {
            prcmu_offset: 0x8015_7000,
            prcmu_size: 0x2000,
            prcmu_tcpm_offset: 0x801b_0000,
            prcmu_tcpm_size: 0x8000,
            prcmu_tcdm_offset: 0x801b_8000,
            prcmu_tcdm_size: 0x1000,
        }
    }
}

impl Ux500MemoryMap {
    #[cfg(not(target_arch = "arm"))]
    pub fn hash_map(&self) -> std::collections::HashMap<String, String> {
        let mut map = std::collections::HashMap::new();
        map.insert(
            "PRCMU_OFFSET".to_string(),
            format!("0x{:x}", self.prcmu_offset),
        );
        map.insert("PRCMU_SIZE".to_string(), format!("0x{:x}", self.prcmu_size));
        map.insert(
            "PRCMU_TCPM_OFFSET".to_string(),
            format!("0x{:x}", self.prcmu_tcpm_offset),
        );
        map.insert(
            "PRCMU_TCPM_SIZE".to_string(),
            format!("0x{:x}", self.prcmu_tcpm_size),
        );
        map.insert(
            "PRCMU_TCDM_OFFSET".to_string(),
            format!("0x{:x}", self.prcmu_tcdm_offset),
        );
        map.insert(
            "PRCMU_TCDM_SIZE".to_string(),
            format!("0x{:x}", self.prcmu_tcdm_size),
        );
        map
    }
}

/// How long the PRCMU firmware gets to idle the mailbox or acknowledge a
/// request.
pub const DEFAULT_MAILBOX_TIMEOUT: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailboxConfig {
    /// Bound applied separately to the idle wait and the ack wait.
    pub timeout: Duration,
}

impl MailboxConfig {
    pub const fn new(timeout: Duration) -> Self {
        MailboxConfig { timeout }
    }
}

impl Default for MailboxConfig {
    fn default() -> Self {
        MailboxConfig::new(DEFAULT_MAILBOX_TIMEOUT)
    }
}

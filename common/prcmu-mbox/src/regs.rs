// Licensed under the Apache-2.0 license

//! PRCMU register block and TCDM layout used by the I2C mailbox (mailbox 5).

use tock_registers::register_bitfields;

/// Mailbox number reserved by the PRCMU firmware for I2C requests.
pub const I2C_MBOX: usize = 5;

// PRCMU register block offsets (32-bit registers).

/// Outgoing mailbox doorbells; a set bit means the request is still pending.
pub const PRCM_MBOX_CPU_VAL: usize = 0x0fc;
/// Writing a 1 raises the corresponding outgoing doorbell.
pub const PRCM_MBOX_CPU_SET: usize = 0x100;
/// Writing a 1 withdraws the corresponding outgoing doorbell.
pub const PRCM_MBOX_CPU_CLR: usize = 0x104;
/// Writing a 1 clears the corresponding acknowledgment interrupt.
pub const PRCM_ARM_IT1_CLR: usize = 0x48c;
/// Acknowledgment interrupts raised by the PRCMU firmware.
pub const PRCM_ARM_IT1_VAL: usize = 0x494;

/// Size of the part of the register block the mailbox protocol touches.
pub const PRCM_REGS_SIZE: usize = 0x498;

// TCDM offsets (byte addressed).

pub const PRCM_REQ_MB5: usize = 0xe44;
pub const PRCM_ACK_MB5: usize = 0xdf4;
pub const PRCM_MBOX_HEADER: usize = 0xfe8;
pub const PRCM_MBOX_HEADER_REQ_MB5: usize = PRCM_MBOX_HEADER + I2C_MBOX;
pub const PRCM_XP70_CUR_PWR_STATE: usize = 0xffc;

pub const PRCM_REQ_MB5_I2C_SLAVE_OP: usize = PRCM_REQ_MB5;
pub const PRCM_REQ_MB5_I2C_HW_BITS: usize = PRCM_REQ_MB5 + 0x1;
pub const PRCM_REQ_MB5_I2C_REG: usize = PRCM_REQ_MB5 + 0x2;
pub const PRCM_REQ_MB5_I2C_VAL: usize = PRCM_REQ_MB5 + 0x3;

pub const PRCM_ACK_MB5_I2C_STATUS: usize = PRCM_ACK_MB5 + 0x1;
pub const PRCM_ACK_MB5_I2C_VAL: usize = PRCM_ACK_MB5 + 0x3;

/// Smallest TCDM window that contains every field above.
pub const PRCM_TCDM_SIZE: usize = 0x1000;

register_bitfields![u32,
    /// PRCM_MBOX_CPU_{VAL,SET,CLR}
    pub MboxCpu [
        Mbox5 OFFSET(5) NUMBITS(1) []
    ],
    /// PRCM_ARM_IT1_{VAL,CLR}
    pub ArmIt1 [
        Mbox5Ack OFFSET(5) NUMBITS(1) []
    ],
];

/// Doorbell/ack bit for mailbox 5, identical in both registers.
pub const I2C_MBOX_BIT: u32 = 1 << I2C_MBOX;

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::LocalRegisterCopy;

    #[test]
    fn test_mailbox_bit_matches_bitfields() {
        assert_eq!(MboxCpu::Mbox5::SET.value, I2C_MBOX_BIT);
        assert_eq!(ArmIt1::Mbox5Ack::SET.value, I2C_MBOX_BIT);

        let val = LocalRegisterCopy::<u32, ArmIt1::Register>::new(0x20);
        assert!(val.is_set(ArmIt1::Mbox5Ack));
        let val = LocalRegisterCopy::<u32, MboxCpu::Register>::new(0xdf);
        assert!(!val.is_set(MboxCpu::Mbox5));
    }

    #[test]
    fn test_request_fields_fit_tcdm() {
        for offset in [
            PRCM_MBOX_HEADER_REQ_MB5,
            PRCM_REQ_MB5_I2C_VAL,
            PRCM_ACK_MB5_I2C_VAL,
            PRCM_XP70_CUR_PWR_STATE,
        ] {
            assert!(offset < PRCM_TCDM_SIZE);
        }
        assert_eq!(PRCM_MBOX_HEADER_REQ_MB5, 0xfed);
    }
}

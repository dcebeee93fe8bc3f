// Licensed under the Apache-2.0 license

use crate::{Ab8500Model, Ab8500Variant};
use log::debug;
use prcmu_mbox_common::regs::{
    I2C_MBOX_BIT, PRCM_ACK_MB5_I2C_STATUS, PRCM_ACK_MB5_I2C_VAL, PRCM_ARM_IT1_CLR,
    PRCM_ARM_IT1_VAL, PRCM_MBOX_CPU_CLR, PRCM_MBOX_CPU_SET, PRCM_MBOX_CPU_VAL,
    PRCM_MBOX_HEADER_REQ_MB5, PRCM_REGS_SIZE, PRCM_REQ_MB5_I2C_HW_BITS, PRCM_REQ_MB5_I2C_REG,
    PRCM_REQ_MB5_I2C_SLAVE_OP, PRCM_REQ_MB5_I2C_VAL, PRCM_TCDM_SIZE, PRCM_XP70_CUR_PWR_STATE,
};
use prcmu_mbox_common::{
    BankReg, CoprocessorState, I2cOp, I2cRequest, SlaveOp, TcdmTransport, TransportError, Window,
    I2C_RD_OK, I2C_WR_OK, MB5_HEADER_I2C,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Status the emulated firmware reports when the PMIC does not answer.
pub const I2C_NACK: u8 = 0x04;

/// When the emulated firmware acknowledges a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckMode {
    /// As soon as the doorbell rings.
    Immediate,
    /// Once the host has polled the ack register this many times without
    /// seeing it.
    AfterPolls(u32),
    /// The firmware never picks the request up.
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read {
        window: Window,
        offset: usize,
    },
    Write {
        window: Window,
        offset: usize,
        value: u32,
    },
}

impl Access {
    pub fn is_write(&self) -> bool {
        matches!(self, Access::Write { .. })
    }

    pub fn target(&self) -> (Window, usize) {
        match *self {
            Access::Read { window, offset } => (window, offset),
            Access::Write { window, offset, .. } => (window, offset),
        }
    }

    /// The value written, or `None` for a read.
    pub fn value(&self) -> Option<u32> {
        match *self {
            Access::Read { .. } => None,
            Access::Write { value, .. } => Some(value),
        }
    }
}

struct PrcmuState {
    tcdm: Vec<u8>,
    mbox_cpu_val: u32,
    arm_it1_val: u32,
    other_regs: HashMap<usize, u32>,
    ack_mode: AckMode,
    // Polls left before a raised doorbell is served.
    pending: Option<u32>,
    mailbox_stuck: bool,
    forced_status: Option<u8>,
    faults: HashSet<(Window, usize)>,
    log: Vec<Access>,
    requests: Vec<I2cRequest>,
    pmic: Ab8500Model,
}

impl PrcmuState {
    fn new(variant: Ab8500Variant) -> Self {
        let mut tcdm = vec![0u8; PRCM_TCDM_SIZE];
        tcdm[PRCM_XP70_CUR_PWR_STATE] = CoprocessorState::Execute.into();
        PrcmuState {
            tcdm,
            mbox_cpu_val: 0,
            arm_it1_val: 0,
            other_regs: HashMap::new(),
            ack_mode: AckMode::Immediate,
            pending: None,
            mailbox_stuck: false,
            forced_status: None,
            faults: HashSet::new(),
            log: Vec::new(),
            requests: Vec::new(),
            pmic: Ab8500Model::new(variant),
        }
    }

    fn access(&mut self, access: Access) -> Result<(), TransportError> {
        let (window, offset) = access.target();
        let (width, size) = match window {
            Window::Tcdm => (1, PRCM_TCDM_SIZE),
            Window::Registers => (4, PRCM_REGS_SIZE),
        };
        if offset % width != 0 {
            return Err(TransportError::Misaligned { window, offset });
        }
        match offset.checked_add(width) {
            Some(end) if end <= size => {}
            _ => return Err(TransportError::OutOfRange { window, offset }),
        }
        self.log.push(access);
        if self.faults.contains(&(window, offset)) {
            return Err(TransportError::Bus { window, offset });
        }
        Ok(())
    }

    fn ring(&mut self) {
        self.mbox_cpu_val |= I2C_MBOX_BIT;
        match self.ack_mode {
            AckMode::Immediate => self.serve(),
            AckMode::AfterPolls(n) => self.pending = Some(n),
            AckMode::Never => {}
        }
    }

    fn poll_ack(&mut self) -> u32 {
        match self.pending {
            Some(0) => {
                self.pending = None;
                self.serve();
            }
            Some(n) => self.pending = Some(n - 1),
            None => {}
        }
        self.arm_it1_val
    }

    fn serve(&mut self) {
        let header = self.tcdm[PRCM_MBOX_HEADER_REQ_MB5];
        let req = I2cRequest {
            slave_op: self.tcdm[PRCM_REQ_MB5_I2C_SLAVE_OP],
            hw_bits: self.tcdm[PRCM_REQ_MB5_I2C_HW_BITS],
            reg: self.tcdm[PRCM_REQ_MB5_I2C_REG],
            val: self.tcdm[PRCM_REQ_MB5_I2C_VAL],
        };
        self.requests.push(req);

        let (status, val) = match SlaveOp::decode(req.slave_op) {
            Some(op) if header == MB5_HEADER_I2C => {
                let addr = BankReg::new(op.bank.id(), req.reg);
                match op.op {
                    I2cOp::Read => match self.pmic.read(addr) {
                        Some(v) => (I2C_RD_OK, v),
                        None => (I2C_NACK, 0),
                    },
                    I2cOp::Write if self.pmic.write(addr, req.val) => (I2C_WR_OK, req.val),
                    I2cOp::Write => (I2C_NACK, 0),
                }
            }
            _ => (I2C_NACK, 0),
        };
        let status = self.forced_status.unwrap_or(status);
        debug!("served {:?}: status {status}, val {val:#04x}", req);

        self.tcdm[PRCM_ACK_MB5_I2C_STATUS] = status;
        self.tcdm[PRCM_ACK_MB5_I2C_VAL] = val;
        self.mbox_cpu_val &= !I2C_MBOX_BIT;
        self.arm_it1_val |= I2C_MBOX_BIT;
    }
}

/// Emulated PRCMU register block, TCDM and mailbox 5 firmware.
///
/// Clones share the same state, so a test can hand one clone to the driver
/// and keep another to inspect what happened.
#[derive(Clone)]
pub struct Prcmu {
    state: Arc<Mutex<PrcmuState>>,
}

impl Default for Prcmu {
    fn default() -> Self {
        Prcmu::new(Ab8500Variant::Ab8500)
    }
}

impl Prcmu {
    pub fn new(variant: Ab8500Variant) -> Self {
        Prcmu {
            state: Arc::new(Mutex::new(PrcmuState::new(variant))),
        }
    }

    pub fn set_power_state(&self, state: u8) {
        self.state.lock().unwrap().tcdm[PRCM_XP70_CUR_PWR_STATE] = state;
    }

    pub fn set_ack_mode(&self, mode: AckMode) {
        self.state.lock().unwrap().ack_mode = mode;
    }

    /// Keeps the mailbox 5 doorbell reading as busy.
    pub fn set_mailbox_stuck(&self, stuck: bool) {
        self.state.lock().unwrap().mailbox_stuck = stuck;
    }

    /// Leaves an ack behind as if an earlier request was never cleared.
    pub fn raise_stale_ack(&self) {
        self.state.lock().unwrap().arm_it1_val |= I2C_MBOX_BIT;
    }

    pub fn ack_pending(&self) -> bool {
        self.state.lock().unwrap().arm_it1_val & I2C_MBOX_BIT != 0
    }

    /// Overrides the status of every request served from now on.
    pub fn force_status(&self, status: Option<u8>) {
        self.state.lock().unwrap().forced_status = status;
    }

    /// Makes every access to `offset` in `window` fail with a bus error.
    pub fn inject_fault(&self, window: Window, offset: usize) {
        self.state.lock().unwrap().faults.insert((window, offset));
    }

    pub fn accesses(&self) -> Vec<Access> {
        self.state.lock().unwrap().log.clone()
    }

    pub fn writes(&self) -> Vec<Access> {
        self.accesses()
            .into_iter()
            .filter(Access::is_write)
            .collect()
    }

    /// Values written to `offset` in `window`, oldest first.
    pub fn writes_to(&self, window: Window, offset: usize) -> Vec<u32> {
        self.accesses()
            .into_iter()
            .filter(|a| a.target() == (window, offset))
            .filter_map(|a| a.value())
            .collect()
    }

    pub fn clear_access_log(&self) {
        self.state.lock().unwrap().log.clear();
    }

    /// Requests served by the firmware, oldest first.
    pub fn requests(&self) -> Vec<I2cRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn pmic_register(&self, addr: u16) -> Option<u8> {
        self.state.lock().unwrap().pmic.get(addr)
    }

    pub fn set_pmic_register(&self, addr: u16, val: u8) {
        self.state.lock().unwrap().pmic.set(addr, val);
    }

    /// Makes the PMIC NACK any access to `addr`.
    pub fn remove_pmic_register(&self, addr: u16) {
        self.state.lock().unwrap().pmic.punch_hole(addr);
    }
}

impl TcdmTransport for Prcmu {
    fn read_u8(&mut self, offset: usize) -> Result<u8, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.access(Access::Read {
            window: Window::Tcdm,
            offset,
        })?;
        Ok(state.tcdm[offset])
    }

    fn write_u8(&mut self, offset: usize, value: u8) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        state.access(Access::Write {
            window: Window::Tcdm,
            offset,
            value: value.into(),
        })?;
        state.tcdm[offset] = value;
        Ok(())
    }

    fn read_u32(&mut self, offset: usize) -> Result<u32, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.access(Access::Read {
            window: Window::Registers,
            offset,
        })?;
        Ok(match offset {
            PRCM_MBOX_CPU_VAL if state.mailbox_stuck => state.mbox_cpu_val | I2C_MBOX_BIT,
            PRCM_MBOX_CPU_VAL => state.mbox_cpu_val,
            PRCM_ARM_IT1_VAL => state.poll_ack(),
            _ => state.other_regs.get(&offset).copied().unwrap_or(0),
        })
    }

    fn write_u32(&mut self, offset: usize, value: u32) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        state.access(Access::Write {
            window: Window::Registers,
            offset,
            value,
        })?;
        match offset {
            PRCM_MBOX_CPU_SET if value & I2C_MBOX_BIT != 0 => state.ring(),
            PRCM_MBOX_CPU_SET => {}
            PRCM_MBOX_CPU_CLR => state.mbox_cpu_val &= !value,
            PRCM_ARM_IT1_CLR => state.arm_it1_val &= !value,
            // Status registers are read-only.
            PRCM_MBOX_CPU_VAL | PRCM_ARM_IT1_VAL => {}
            _ => {
                state.other_regs.insert(offset, value);
            }
        }
        Ok(())
    }
}

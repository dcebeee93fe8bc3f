// Licensed under the Apache-2.0 license

//! Mailbox 5 transaction engine.

use crate::{check_ready, PrcmuError, WaitStage};
use boottime::{read_poll_timeout, Clock, PollError};
use log::{error, trace, warn};
use prcmu_mbox_common::regs::{
    ArmIt1, MboxCpu, PRCM_ACK_MB5_I2C_STATUS, PRCM_ACK_MB5_I2C_VAL, PRCM_ARM_IT1_CLR,
    PRCM_ARM_IT1_VAL, PRCM_MBOX_CPU_SET, PRCM_MBOX_CPU_VAL, PRCM_MBOX_HEADER_REQ_MB5, PRCM_REQ_MB5,
};
use prcmu_mbox_common::{I2cAck, I2cRequest, TcdmTransport, TransportError, MB5_HEADER_I2C};
use tock_registers::LocalRegisterCopy;
use ux500_config::MailboxConfig;
use zerocopy::IntoBytes;

/// Sole owner of the PRCMU I2C mailbox.
///
/// Every operation takes `&mut self`, so at most one request can be in
/// flight. The handle is not `Clone`.
pub struct I2cMailbox<T, C> {
    transport: T,
    clock: C,
    config: MailboxConfig,
}

impl<T: TcdmTransport, C: Clock> I2cMailbox<T, C> {
    pub fn new(transport: T, clock: C, config: MailboxConfig) -> Self {
        I2cMailbox {
            transport,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &MailboxConfig {
        &self.config
    }

    pub fn into_inner(self) -> (T, C) {
        (self.transport, self.clock)
    }

    /// Waits until the PRCMU can accept a new request.
    ///
    /// Fails without touching the request area if the firmware is not
    /// executing or if the previous request never leaves the mailbox.
    pub fn wait_ready(&mut self) -> Result<(), PrcmuError> {
        check_ready(&mut self.transport)?;

        // A completion nobody acknowledged would satisfy our ack wait early.
        match self.transport.read_u32(PRCM_ARM_IT1_VAL) {
            Ok(val) if ack_pending(val) => {
                warn!("PRCMU i2c mailbox was not acked");
                if let Err(e) = self
                    .transport
                    .write_u32(PRCM_ARM_IT1_CLR, ArmIt1::Mbox5Ack::SET.value)
                {
                    warn!("failed to clear stale mailbox 5 ack: {e}");
                }
            }
            Ok(_) => {}
            Err(e) => warn!("failed to read mailbox 5 ack status: {e}"),
        }

        let transport = &mut self.transport;
        read_poll_timeout(
            &self.clock,
            self.config.timeout,
            || transport.read_u32(PRCM_MBOX_CPU_VAL),
            |val| !doorbell_pending(*val),
        )
        .map(|_| ())
        .map_err(|e| poll_error(e, WaitStage::MailboxIdle))
    }

    /// Rings the mailbox 5 doorbell and waits for the PRCMU to acknowledge.
    ///
    /// On timeout the ack interrupt is left as it is.
    pub fn signal_and_wait(&mut self) -> Result<(), PrcmuError> {
        self.transport
            .write_u32(PRCM_MBOX_CPU_SET, MboxCpu::Mbox5::SET.value)?;

        let transport = &mut self.transport;
        read_poll_timeout(
            &self.clock,
            self.config.timeout,
            || transport.read_u32(PRCM_ARM_IT1_VAL),
            |val| ack_pending(*val),
        )
        .map(|_| ())
        .map_err(|e| poll_error(e, WaitStage::Ack))
    }

    /// Fills the request area: header first, then the request fields in
    /// layout order.
    pub fn write_request(&mut self, request: &I2cRequest) -> Result<(), PrcmuError> {
        self.transport
            .write_u8(PRCM_MBOX_HEADER_REQ_MB5, MB5_HEADER_I2C)?;
        for (i, byte) in request.as_bytes().iter().enumerate() {
            self.transport.write_u8(PRCM_REQ_MB5 + i, *byte)?;
        }
        Ok(())
    }

    pub fn read_ack(&mut self) -> Result<I2cAck, PrcmuError> {
        let status = self.transport.read_u8(PRCM_ACK_MB5_I2C_STATUS)?;
        let val = self.transport.read_u8(PRCM_ACK_MB5_I2C_VAL)?;
        Ok(I2cAck { status, val })
    }

    pub fn clear_ack(&mut self) -> Result<(), PrcmuError> {
        self.transport
            .write_u32(PRCM_ARM_IT1_CLR, ArmIt1::Mbox5Ack::SET.value)?;
        Ok(())
    }

    /// Runs one complete mailbox 5 transaction and returns the raw ack.
    ///
    /// The status is not interpreted here. The ack interrupt is cleared after
    /// every successful ack read, whatever the status says.
    pub fn exchange(&mut self, request: &I2cRequest) -> Result<I2cAck, PrcmuError> {
        self.wait_ready()?;
        trace!("mailbox 5 request: {:?}", request);
        self.write_request(request)?;
        self.signal_and_wait().inspect_err(|e| match e {
            PrcmuError::Timeout(_) => error!("mailbox request timed out"),
            _ => error!("mailbox request failed: {e}"),
        })?;

        let ack = self.read_ack()?;
        if let Err(e) = self.clear_ack() {
            warn!("failed to clear mailbox 5 ack: {e}");
        }
        trace!("mailbox 5 ack: {:?}", ack);
        Ok(ack)
    }
}

fn doorbell_pending(val: u32) -> bool {
    LocalRegisterCopy::<u32, MboxCpu::Register>::new(val).is_set(MboxCpu::Mbox5)
}

fn ack_pending(val: u32) -> bool {
    LocalRegisterCopy::<u32, ArmIt1::Register>::new(val).is_set(ArmIt1::Mbox5Ack)
}

fn poll_error(err: PollError<TransportError>, stage: WaitStage) -> PrcmuError {
    match err {
        PollError::TimedOut => PrcmuError::Timeout(stage),
        PollError::Read(e) => PrcmuError::Transport(e),
    }
}

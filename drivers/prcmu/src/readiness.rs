// Licensed under the Apache-2.0 license

use crate::PrcmuError;
use log::error;
use prcmu_mbox_common::regs::PRCM_XP70_CUR_PWR_STATE;
use prcmu_mbox_common::{CoprocessorState, TcdmTransport};

/// Fails unless the PRCMU firmware reports that it is executing.
///
/// Nothing services the mailbox in any other state, so this must pass before
/// waiting on it. Only reads the TCDM.
pub fn check_ready<T: TcdmTransport + ?Sized>(transport: &mut T) -> Result<(), PrcmuError> {
    let state = transport.read_u8(PRCM_XP70_CUR_PWR_STATE)?;
    if !matches!(
        CoprocessorState::try_from(state),
        Ok(CoprocessorState::Execute)
    ) {
        error!("PRCMU firmware not ready (state: {state})");
        return Err(PrcmuError::NotReady(state));
    }
    Ok(())
}

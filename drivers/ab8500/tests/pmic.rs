// Licensed under the Apache-2.0 license

use ab8500_driver::regs::{AB8500_MISC_IC_NAME_REG, AB8500_MISC_REV_REG};
use ab8500_driver::{Ab8500, Ab8500Error, Ab8500Version, Pmic, AB8500_QUIRKS};
use emulator_prcmu::{Ab8500Variant, Access, AckMode, FakeClock, Prcmu, I2C_NACK};
use log::LevelFilter;
use prcmu_driver::{I2cMailbox, PrcmuError, WaitStage};
use prcmu_mbox_common::regs::{
    PRCM_ARM_IT1_CLR, PRCM_MBOX_HEADER_REQ_MB5, PRCM_REQ_MB5, PRCM_XP70_CUR_PWR_STATE,
};
use prcmu_mbox_common::{BankReg, CoprocessorState, TransportError, Window};
use simple_logger::SimpleLogger;
use std::time::Duration;
use ux500_config::MailboxConfig;

fn init_logger() {
    let _ = SimpleLogger::new().with_level(LevelFilter::Debug).init();
}

fn probe(prcmu: &Prcmu) -> Result<Ab8500<Prcmu, FakeClock>, Ab8500Error> {
    init_logger();
    let mailbox = I2cMailbox::new(
        prcmu.clone(),
        FakeClock::new(Duration::from_millis(10)),
        MailboxConfig::default(),
    );
    Ab8500::probe(mailbox, AB8500_QUIRKS)
}

/// Probes an AB8500 and forgets the probe traffic.
fn pmic(prcmu: &Prcmu) -> Ab8500<Prcmu, FakeClock> {
    let pmic = probe(prcmu).unwrap();
    prcmu.clear_access_log();
    pmic
}

fn tcdm_writes(prcmu: &Prcmu) -> Vec<(usize, u32)> {
    prcmu
        .writes()
        .into_iter()
        .filter_map(|a| match a {
            Access::Write {
                window: Window::Tcdm,
                offset,
                value,
            } => Some((offset, value)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_probe_ab8500() {
    let prcmu = Prcmu::new(Ab8500Variant::Ab8500);
    let pmic = probe(&prcmu).unwrap();

    assert_eq!(pmic.info().version, Ab8500Version::Ab8500);
    assert_eq!(pmic.info().chip_id, 0x30);
    assert!(!prcmu.ack_pending());
}

#[test]
fn test_probe_ab8505() {
    let prcmu = Prcmu::new(Ab8500Variant::Ab8505);
    let pmic = probe(&prcmu).unwrap();

    assert_eq!(pmic.info().version, Ab8500Version::Ab8505);
    assert_eq!(pmic.info().chip_id, 0x10);
}

#[test]
fn test_probe_fails_without_chip_id() {
    let prcmu = Prcmu::new(Ab8500Variant::Ab8505);
    prcmu.remove_pmic_register(AB8500_MISC_REV_REG.0);

    assert_eq!(
        probe(&prcmu).err(),
        Some(Ab8500Error::TransactionFailed(I2C_NACK))
    );
}

#[test]
fn test_probe_fails_when_prcmu_asleep() {
    let prcmu = Prcmu::default();
    prcmu.set_power_state(CoprocessorState::DeepSleep.into());

    assert_eq!(
        probe(&prcmu).err(),
        Some(Ab8500Error::Prcmu(PrcmuError::NotReady(0x03)))
    );
    assert!(prcmu.writes().is_empty());
}

#[test]
fn test_write_request_bytes() {
    let prcmu = Prcmu::default();
    let mut pmic = pmic(&prcmu);

    pmic.reg_write(BankReg::new(2, 0x10), 0x55).unwrap();

    assert_eq!(
        tcdm_writes(&prcmu),
        vec![
            (PRCM_MBOX_HEADER_REQ_MB5, 0x00),
            (PRCM_REQ_MB5, 0x44),
            (PRCM_REQ_MB5 + 1, 0x08),
            (PRCM_REQ_MB5 + 2, 0x10),
            (PRCM_REQ_MB5 + 3, 0x55),
        ]
    );
    assert_eq!(prcmu.pmic_register(0x0210), Some(0x55));
}

#[test]
fn test_read_back() {
    let prcmu = Prcmu::default();
    prcmu.set_pmic_register(0x0b00, 0x3c);
    let mut pmic = pmic(&prcmu);

    assert_eq!(pmic.reg_read(BankReg(0x0b00)), Ok(0x3c));
    let req = prcmu.requests().pop().unwrap();
    assert_eq!(req.slave_op, (0x0b << 1) | 0x40 | 1);
}

#[test]
fn test_ic_name_read_on_ab8500_is_zero() {
    let prcmu = Prcmu::new(Ab8500Variant::Ab8500);
    let mut pmic = pmic(&prcmu);

    let mut buf = [0xffu8];
    assert_eq!(pmic.read(AB8500_MISC_IC_NAME_REG, &mut buf), Ok(()));
    assert_eq!(buf, [0]);
}

#[test]
fn test_failed_read_reports_status() {
    let prcmu = Prcmu::default();
    let mut pmic = pmic(&prcmu);

    prcmu.remove_pmic_register(0x0210);
    let mut buf = [0xffu8];
    assert_eq!(
        pmic.read(BankReg(0x0210), &mut buf),
        Err(Ab8500Error::TransactionFailed(I2C_NACK))
    );
    assert_eq!(buf, [0]);

    prcmu.force_status(Some(0x7f));
    assert_eq!(
        pmic.reg_read(AB8500_MISC_REV_REG),
        Err(Ab8500Error::TransactionFailed(0x7f))
    );
}

#[test]
fn test_bad_length_touches_nothing() {
    let prcmu = Prcmu::default();
    let mut pmic = pmic(&prcmu);

    let mut buf = [0u8; 2];
    assert_eq!(
        pmic.read(BankReg(0x0210), &mut buf),
        Err(Ab8500Error::InvalidArgument(2))
    );
    assert_eq!(
        pmic.write(BankReg(0x0210), &[]),
        Err(Ab8500Error::InvalidArgument(0))
    );
    assert!(prcmu.accesses().is_empty());
}

#[test]
fn test_reg_count_is_zero() {
    let prcmu = Prcmu::default();
    assert_eq!(pmic(&prcmu).reg_count(), 0);
}

#[test]
fn test_stale_ack_is_cleared_first() {
    let prcmu = Prcmu::default();
    let mut pmic = pmic(&prcmu);

    prcmu.raise_stale_ack();
    pmic.reg_write(BankReg::new(2, 0x10), 0x01).unwrap();

    let clears = prcmu.writes_to(Window::Registers, PRCM_ARM_IT1_CLR);
    // Once for the stale ack, once for ours.
    assert_eq!(clears.len(), 2);
    assert!(!prcmu.ack_pending());
}

#[test]
fn test_slow_ack() {
    let prcmu = Prcmu::default();
    let mut pmic = pmic(&prcmu);

    prcmu.set_ack_mode(AckMode::AfterPolls(50));
    assert_eq!(pmic.reg_read(AB8500_MISC_REV_REG), Ok(0x30));
}

#[test]
fn test_ack_timeout() {
    let prcmu = Prcmu::default();
    let mut pmic = pmic(&prcmu);

    prcmu.set_ack_mode(AckMode::Never);
    assert_eq!(
        pmic.reg_write(BankReg::new(2, 0x10), 0x55),
        Err(Ab8500Error::Prcmu(PrcmuError::Timeout(WaitStage::Ack)))
    );
    let clears = prcmu.writes_to(Window::Registers, PRCM_ARM_IT1_CLR);
    assert!(clears.is_empty());

    // The request was never picked up, so the next one cannot go out either.
    assert_eq!(
        pmic.reg_read(AB8500_MISC_REV_REG),
        Err(Ab8500Error::Prcmu(PrcmuError::Timeout(
            WaitStage::MailboxIdle
        )))
    );
}

#[test]
fn test_busy_mailbox_writes_no_request() {
    let prcmu = Prcmu::default();
    let mut pmic = pmic(&prcmu);

    prcmu.set_mailbox_stuck(true);
    assert_eq!(
        pmic.reg_write(BankReg::new(2, 0x10), 0x55),
        Err(Ab8500Error::Prcmu(PrcmuError::Timeout(
            WaitStage::MailboxIdle
        )))
    );
    assert!(tcdm_writes(&prcmu).is_empty());
}

#[test]
fn test_transport_fault_is_unchanged() {
    let prcmu = Prcmu::default();
    let mut pmic = pmic(&prcmu);

    prcmu.inject_fault(Window::Tcdm, PRCM_XP70_CUR_PWR_STATE);
    assert_eq!(
        pmic.reg_read(AB8500_MISC_REV_REG),
        Err(Ab8500Error::Prcmu(PrcmuError::Transport(
            TransportError::Bus {
                window: Window::Tcdm,
                offset: PRCM_XP70_CUR_PWR_STATE,
            }
        )))
    );
}

#[test]
fn test_release_returns_mailbox() {
    let prcmu = Prcmu::default();
    let pmic = pmic(&prcmu);

    let (transport, _clock) = pmic.release().into_inner();
    assert_eq!(transport.writes().len(), 0);
}

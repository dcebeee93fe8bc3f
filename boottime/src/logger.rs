// Licensed under the Apache-2.0 license

//! `log` backend that writes through the boot console printer.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct PrinterLogger;

static LOGGER: PrinterLogger = PrinterLogger;

impl Log for PrinterLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        crate::println!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Routes `log` records to the writer registered with [`crate::set_printer`].
///
/// Records are dropped until a printer is registered.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

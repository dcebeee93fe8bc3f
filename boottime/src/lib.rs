// Licensed under the Apache-2.0 license

#![cfg_attr(target_arch = "arm", no_std)]

mod logger;
pub use logger::*;
mod static_ref;
pub use static_ref::*;
mod time;
pub use time::*;

// Helpers to handle writing to the boot console.

use core::fmt::{Display, Write};

pub static mut WRITER: Option<&'static mut dyn Write> = None;

/// Sets the global backing writer for `print` and `println` macros.
pub fn set_printer(writer: &'static mut dyn Write) {
    unsafe {
        WRITER = Some(writer);
    }
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        if let Some(writer) = unsafe { (*::core::ptr::addr_of_mut!($crate::WRITER)).as_mut() } {
            let _ = ::core::fmt::Write::write_fmt(writer, format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => {
        if let Some(writer) = unsafe { (*::core::ptr::addr_of_mut!($crate::WRITER)).as_mut() } {
            let _ = ::core::fmt::Write::write_fmt(writer, format_args!($($arg)*));
            let _ = ::core::fmt::Write::write_str(writer, "\n");
        }
    };
}

pub struct HexBytes<'a>(pub &'a [u8]);
impl Display for HexBytes<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for &x in self.0.iter() {
            let c = x >> 4;
            if c < 10 {
                f.write_char((c + b'0') as char)?;
            } else {
                f.write_char((c - 10 + b'A') as char)?;
            }
            let c = x & 0xf;
            if c < 10 {
                f.write_char((c + b'0') as char)?;
            } else {
                f.write_char((c - 10 + b'A') as char)?;
            }
        }
        Ok(())
    }
}

pub struct HexWord(pub u32);
impl Display for HexWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        HexBytes(&self.0.to_be_bytes()).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(HexBytes(&[0x0a, 0xb5]).to_string(), "0AB5");
        assert_eq!(HexWord(0x8015_7000).to_string(), "80157000");
    }
}

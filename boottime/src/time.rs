// Licensed under the Apache-2.0 license

//! Time sources and timeout-bounded polling.

use crate::StaticRef;
use core::cell::Cell;
use core::time::Duration;
use tock_registers::interfaces::Readable;
use tock_registers::registers::ReadOnly;

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed point.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollError<E> {
    /// The condition did not hold before the timeout expired.
    TimedOut,
    /// Reading the polled value failed.
    Read(E),
}

/// Calls `read` until `cond` holds for the returned value or `timeout`
/// elapses on `clock`.
///
/// Once the timeout has expired the value is read one more time, so a
/// condition met while the caller was descheduled is not reported as a
/// timeout. Read errors end the poll immediately.
pub fn read_poll_timeout<C, T, E>(
    clock: &C,
    timeout: Duration,
    mut read: impl FnMut() -> Result<T, E>,
    cond: impl Fn(&T) -> bool,
) -> Result<T, PollError<E>>
where
    C: Clock + ?Sized,
{
    let start = clock.now();
    loop {
        let val = read().map_err(PollError::Read)?;
        if cond(&val) {
            return Ok(val);
        }
        if clock.now().saturating_sub(start) > timeout {
            let val = read().map_err(PollError::Read)?;
            return if cond(&val) {
                Ok(val)
            } else {
                Err(PollError::TimedOut)
            };
        }
        core::hint::spin_loop();
    }
}

/// Clock backed by a free-running 32-bit down-counter, such as the Nomadik
/// MTU timer.
///
/// Only differences between readings are meaningful. `now` must be called at
/// least once per counter period to observe every wrap.
pub struct DownCounterClock {
    counter: StaticRef<ReadOnly<u32>>,
    rate_hz: u64,
    // (last raw counter value, ticks accumulated so far)
    state: Cell<(u32, u64)>,
}

impl DownCounterClock {
    pub const fn new(counter: StaticRef<ReadOnly<u32>>, rate_hz: u32) -> Self {
        DownCounterClock {
            counter,
            rate_hz: rate_hz as u64,
            state: Cell::new((u32::MAX, 0)),
        }
    }

    fn ticks(&self) -> u64 {
        let raw = self.counter.get();
        let (last, total) = self.state.get();
        let total = total + u64::from(last.wrapping_sub(raw));
        self.state.set((raw, total));
        total
    }
}

impl Clock for DownCounterClock {
    fn now(&self) -> Duration {
        let ticks = self.ticks();
        let secs = ticks / self.rate_hz;
        let nanos = (ticks % self.rate_hz) * 1_000_000_000 / self.rate_hz;
        Duration::new(secs, nanos as u32)
    }
}

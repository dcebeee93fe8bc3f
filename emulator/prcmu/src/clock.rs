// Licensed under the Apache-2.0 license

use boottime::Clock;
use std::cell::Cell;
use std::time::Duration;

/// Clock that moves forward by a fixed step every time it is read.
pub struct FakeClock {
    now: Cell<Duration>,
    step: Duration,
}

impl FakeClock {
    pub fn new(step: Duration) -> Self {
        FakeClock {
            now: Cell::new(Duration::ZERO),
            step,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

//! Wall-clock source for the engine

use crate::types::Hour;
use chrono::Timelike;
use parking_lot::Mutex;

/// Source of the real current hour
pub trait Clock: Send + Sync {
    fn current_hour(&self) -> Hour;
}

/// Local wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> Hour {
        let now = chrono::Local::now();
        Hour::new(now.hour()).unwrap_or(Hour::MIDNIGHT)
    }
}

/// Clock pinned to a settable hour, for tests and previews
#[derive(Debug)]
pub struct FixedClock {
    hour: Mutex<Hour>,
}

impl FixedClock {
    pub fn new(hour: Hour) -> Self {
        Self {
            hour: Mutex::new(hour),
        }
    }

    /// Move the clock to another hour
    pub fn set(&self, hour: Hour) {
        *self.hour.lock() = hour;
    }
}

impl Clock for FixedClock {
    fn current_hour(&self) -> Hour {
        *self.hour.lock()
    }
}

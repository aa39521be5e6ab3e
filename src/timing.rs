//! Delay capability.
//!
//! All pacing in the show is blocking sleeps of the calling thread. The
//! [`Sleeper`] trait makes that injectable: the binary blocks for real,
//! while tests run instantly and can still assert the requested durations.

use std::cell::RefCell;
use std::thread;
use std::time::Duration;

/// Something that can pause the show for a while.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Production sleeper; blocks the calling thread.
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// No-op sleeper (for testing).
pub struct NoSleep;

impl Sleeper for NoSleep {
    fn sleep(&self, _duration: Duration) {}
}

/// Sleeper that records every requested duration without waiting
/// (for testing).
#[derive(Default)]
pub struct RecordingSleeper {
    calls: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, in call order.
    pub fn recorded(&self) -> Vec<Duration> {
        self.calls.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.calls.borrow_mut().push(duration);
    }
}

//! Bounded, randomized polling.
//!
//! Every wait in the engine follows the same shape: draw a budget from a
//! [`Jitter`] range once at entry, compute the deadline, evaluate the
//! condition immediately and then on a fixed interval until it reports done
//! or the deadline passes. Nothing blocks indefinitely.

use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::Jitter;

/// Outcome of one poll iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Poll {
    Done,
    Pending,
}

/// Draws randomized durations and drives deadline-bounded polls.
pub struct Waiter {
    rng: SmallRng,
    poll_interval: Duration,
}

impl Waiter {
    pub fn new(poll_interval_ms: u64) -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Deterministic variant for reproducible runs.
    pub fn seeded(seed: u64, poll_interval_ms: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Draws a value from the inclusive range.
    pub fn pick(&mut self, jitter: Jitter) -> u64 {
        if jitter.min >= jitter.max {
            jitter.min
        } else {
            self.rng.gen_range(jitter.min..=jitter.max)
        }
    }

    /// Sleeps for a duration drawn from the range.
    pub fn rest(&mut self, jitter: Jitter) {
        let millis = self.pick(jitter);
        thread::sleep(Duration::from_millis(millis));
    }

    /// Polls `condition` until it reports [`Poll::Done`] or the randomized
    /// budget expires. Returns whether the condition completed in time.
    pub fn until<F>(&mut self, budget: Jitter, mut condition: F) -> bool
    where
        F: FnMut() -> Poll,
    {
        self.until_value(budget, || match condition() {
            Poll::Done => Some(()),
            Poll::Pending => None,
        })
        .is_some()
    }

    /// Like [`Waiter::until`], but carries the value that satisfied the
    /// condition back to the caller.
    pub fn until_value<T, F>(&mut self, budget: Jitter, mut condition: F) -> Option<T>
    where
        F: FnMut() -> Option<T>,
    {
        let deadline = Instant::now() + Duration::from_millis(self.pick(budget));
        loop {
            if let Some(value) = condition() {
                return Some(value);
            }
            if Instant::now() >= deadline {
                return None;
            }
            thread::sleep(self.poll_interval);
        }
    }
}

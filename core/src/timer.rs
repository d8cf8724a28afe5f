//! Repeating timers.
//!
//! State machines that own a repeating timer take a [`TimerDriver`] so the same
//! code runs on `gloo_timers` intervals in the browser and on the deterministic
//! [`ManualClock`] in tests and the CLI.

use std::collections::BTreeMap;

/// Starts and cancels repeating intervals.
///
/// A handle stays live until passed back to [`TimerDriver::cancel`]. The driver
/// is responsible for routing each tick back to the owner.
pub trait TimerDriver {
    type Handle;

    /// Start an interval firing every `period_ms`.
    fn start(&mut self, period_ms: u32) -> Self::Handle;

    /// Cancel a live interval. No further ticks fire for it.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Handle issued by [`ManualClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ManualHandle(u64);

#[derive(Debug, Clone, Copy)]
struct ManualInterval {
    period_ms: u64,
    next_due_ms: u64,
}

/// Deterministic clock: time only moves when [`ManualClock::advance`] is called.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: u64,
    next_id: u64,
    intervals: BTreeMap<ManualHandle, ManualInterval>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time in milliseconds since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of intervals that have been started and not cancelled.
    pub fn live_handles(&self) -> usize {
        self.intervals.len()
    }

    /// Milliseconds until the earliest live interval fires, if any.
    pub fn until_next_tick(&self) -> Option<u64> {
        self.intervals
            .values()
            .filter(|i| i.next_due_ms != u64::MAX)
            .map(|i| i.next_due_ms - self.now_ms)
            .min()
    }

    /// Move time forward by `ms`, returning how many ticks fired across all
    /// live intervals.
    pub fn advance(&mut self, ms: u64) -> usize {
        let target = self.now_ms.saturating_add(ms);
        let mut fired = 0usize;
        for interval in self.intervals.values_mut() {
            // A due time saturated at u64::MAX lies past the end of the clock
            if interval.next_due_ms > target || interval.next_due_ms == u64::MAX {
                continue;
            }
            let ticks = (target - interval.next_due_ms) / interval.period_ms + 1;
            fired = fired.saturating_add(usize::try_from(ticks).unwrap_or(usize::MAX));
            interval.next_due_ms = interval
                .next_due_ms
                .saturating_add(ticks.saturating_mul(interval.period_ms));
        }
        self.now_ms = target;
        fired
    }
}

impl TimerDriver for ManualClock {
    type Handle = ManualHandle;

    fn start(&mut self, period_ms: u32) -> ManualHandle {
        let handle = ManualHandle(self.next_id);
        self.next_id += 1;
        // Zero periods would never settle in `advance`
        let period_ms = u64::from(period_ms.max(1));
        self.intervals.insert(
            handle,
            ManualInterval {
                period_ms,
                next_due_ms: self.now_ms.saturating_add(period_ms),
            },
        );
        handle
    }

    fn cancel(&mut self, handle: ManualHandle) {
        self.intervals.remove(&handle);
    }
}

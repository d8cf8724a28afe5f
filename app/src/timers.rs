//! Browser timer driver backed by `gloo_timers` intervals.

use std::rc::Rc;

use folio_core::TimerDriver;
use gloo_timers::callback::Interval;

/// Starts `setInterval` timers that all call the same tick callback.
pub struct IntervalDriver {
    on_tick: Rc<dyn Fn()>,
}

impl IntervalDriver {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
        }
    }
}

impl TimerDriver for IntervalDriver {
    type Handle = Interval;

    fn start(&mut self, period_ms: u32) -> Interval {
        let on_tick = Rc::clone(&self.on_tick);
        Interval::new(period_ms, move || on_tick())
    }

    fn cancel(&mut self, handle: Interval) {
        // Dropping an Interval clears it
        drop(handle);
    }
}

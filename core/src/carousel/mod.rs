//! Testimonial carousel with hover-pause autoplay.
//!
//! The carousel owns its item markers, its index, and at most one live autoplay
//! handle. Index state and timer state are orthogonal:
//! - `Showing(i)`: exactly item `i` is active
//! - `Running` / `Paused`: whether an autoplay handle is live
//!
//! Manual steps move the index without touching the timer, so autoplay keeps
//! its original schedule after a click.


use crate::marker::{Marker, mark_only};
use crate::timer::TimerDriver;

/// Manual navigation command from the prev/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
}

/// Whether autoplay is currently scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayState {
    Running,
    Paused,
}

pub struct Carousel<M: Marker, T: TimerDriver> {
    items: Vec<M>,
    index: usize,
    period_ms: u32,
    timer: T,
    handle: Option<T::Handle>,
}

impl<M: Marker, T: TimerDriver> Carousel<M, T> {
    /// Show the first item and start autoplay.
    ///
    /// An empty item list produces a disabled carousel: no timer is started
    /// and every handler is a no-op.
    pub fn initialize(items: Vec<M>, timer: T, period_ms: u32) -> Self {
        let mut carousel = Self {
            items,
            index: 0,
            period_ms,
            timer,
            handle: None,
        };

        if carousel.items.is_empty() {
            tracing::debug!("Carousel disabled: no items");
            return carousel;
        }

        carousel.show();
        carousel.handle = Some(carousel.timer.start(period_ms));
        tracing::debug!(items = carousel.items.len(), period_ms, "Carousel started");
        carousel
    }

    pub fn is_enabled(&self) -> bool {
        !self.items.is_empty()
    }

    /// Index of the active item, `None` when disabled.
    pub fn index(&self) -> Option<usize> {
        self.is_enabled().then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[M] {
        &self.items
    }

    pub fn autoplay(&self) -> AutoplayState {
        if self.handle.is_some() {
            AutoplayState::Running
        } else {
            AutoplayState::Paused
        }
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.items.len();
        self.show();
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
        self.show();
    }

    /// Cancel autoplay. Pausing while paused does nothing.
    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.timer.cancel(handle);
        }
    }

    /// Restart autoplay with a fresh period. Resuming while running does
    /// nothing, so at most one handle is ever live.
    pub fn resume(&mut self) {
        if self.is_empty() || self.handle.is_some() {
            return;
        }
        self.handle = Some(self.timer.start(self.period_ms));
    }

    pub fn on_tick(&mut self) {
        self.next();
    }

    pub fn on_hover_enter(&mut self) {
        self.pause();
    }

    pub fn on_hover_leave(&mut self) {
        self.resume();
    }

    pub fn on_command(&mut self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
        }
    }

    fn show(&mut self) {
        mark_only(&mut self.items, Some(self.index));
    }
}

impl<M: Marker> Carousel<M, crate::timer::ManualClock> {
    /// Advance the manual clock and deliver every tick that fell due.
    /// Returns the number of ticks delivered.
    pub fn advance_clock(&mut self, ms: u64) -> usize {
        let ticks = self.timer.advance(ms);
        for _ in 0..ticks {
            self.on_tick();
        }
        ticks
    }
}

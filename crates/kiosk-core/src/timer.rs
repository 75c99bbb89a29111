//! Single-shot timer slots.
//!
//! A [`SingleShot`] holds at most one armed deadline. Re-arming is a single
//! operation that replaces the previous arming and hands out a fresh
//! [`TimerHandle`], so the stale handle can never fire afterwards. This is
//! what keeps at most one idle watchdog outstanding no matter how often
//! activity resets it.
//!
//! The slot does not sleep. Whoever executes [`ArmTimer`] actions keeps the
//! deadline and reports back through [`SingleShot::fire`] with the handle it
//! was given.
//!
//! [`ArmTimer`]: crate::KioskAction::ArmTimer

use std::time::{Duration, Instant};

use crate::input::ButtonId;

/// Identifies which deferred callback a timer belongs to.
///
/// A runtime keeps at most one pending deadline per slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Idle watchdog that returns to the welcome screen.
    Watchdog,
    /// Restores welcome screen opacity after the idle-return fade.
    FadeIn,
    /// Releases the pressed state of a touch button.
    FeedbackRelease(ButtonId),
}

/// Generation of one arming of a [`SingleShot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Raw generation number.
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    handle: TimerHandle,
    deadline: Instant,
}

/// A cancellable single-shot timer slot.
#[derive(Debug, Clone, Default)]
pub struct SingleShot {
    armed: Option<Armed>,
    generation: u64,
}

impl SingleShot {
    /// Create a disarmed slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending arming and arm again for `delay` from `now`.
    pub fn rearm(&mut self, now: Instant, delay: Duration) -> TimerHandle {
        self.generation = self.generation.wrapping_add(1);
        let handle = TimerHandle(self.generation);
        self.armed = Some(Armed { handle, deadline: now + delay });
        handle
    }

    /// Disarm the slot, returning the handle that was pending.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.armed.take().map(|armed| armed.handle)
    }

    /// Consume a firing.
    ///
    /// Returns `true` only if `handle` is the live arming and its deadline has
    /// passed; the slot is then disarmed. Stale or early firings return
    /// `false` and leave the slot untouched.
    pub fn fire(&mut self, handle: TimerHandle, now: Instant) -> bool {
        match self.armed {
            Some(armed) if armed.handle == handle && now >= armed.deadline => {
                self.armed = None;
                true
            },
            _ => false,
        }
    }

    /// Pending deadline, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|armed| armed.deadline)
    }

    /// Pending handle, if armed.
    pub fn handle(&self) -> Option<TimerHandle> {
        self.armed.map(|armed| armed.handle)
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

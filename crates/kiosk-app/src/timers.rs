//! Pending timer deadlines, one per slot.
//!
//! Arming a slot replaces whatever was pending for it, so the runtime can
//! never hold two watchdog deadlines at once.

use std::collections::HashMap;

use kiosk_core::{TimerHandle, TimerSlot};
use tokio::time::Instant;

/// Pending deadlines keyed by [`TimerSlot`].
#[derive(Debug, Default)]
pub struct TimerTable {
    pending: HashMap<TimerSlot, (TimerHandle, Instant)>,
}

impl TimerTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `slot`, returning the handle it replaced.
    pub fn arm(&mut self, slot: TimerSlot, handle: TimerHandle, deadline: Instant) -> Option<TimerHandle> {
        self.pending.insert(slot, (handle, deadline)).map(|(replaced, _)| replaced)
    }

    /// Disarm `slot`, returning the handle that was pending.
    pub fn cancel(&mut self, slot: &TimerSlot) -> Option<TimerHandle> {
        self.pending.remove(slot).map(|(handle, _)| handle)
    }

    /// Deadline pending for `slot`.
    pub fn deadline(&self, slot: &TimerSlot) -> Option<Instant> {
        self.pending.get(slot).map(|(_, deadline)| *deadline)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|(_, deadline)| *deadline).min()
    }

    /// Remove and return every slot due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TimerSlot, TimerHandle)> {
        let mut due: Vec<(Instant, TimerSlot, TimerHandle)> = self
            .pending
            .iter()
            .filter(|(_, (_, deadline))| *deadline <= now)
            .map(|(slot, (handle, deadline))| (*deadline, slot.clone(), *handle))
            .collect();
        due.sort_by_key(|(deadline, _, _)| *deadline);

        for (_, slot, _) in &due {
            self.pending.remove(slot);
        }
        due.into_iter().map(|(_, slot, handle)| (slot, handle)).collect()
    }

    /// Number of pending slots.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use mapchooser_traits::{Scheduler, TimerId, TimerTask};
use std::collections::HashMap;
use std::time::Duration;

/// One pending timer handle per task.
///
/// Arming a task replaces (and cancels) its previous timer, so a callback
/// is only honoured if its handle is the one currently held for its task.
#[derive(Clone, Debug, Default)]
pub struct TimerSlots {
    slots: HashMap<TimerTask, TimerId>,
}

impl TimerSlots {
    /// Create an empty set of slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` after `delay`, cancelling its previous timer.
    pub fn arm<S: Scheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        delay: Duration,
        task: TimerTask,
    ) -> TimerId {
        if let Some(previous) = self.slots.remove(&task) {
            scheduler.cancel(previous);
        }
        let id = scheduler.schedule(delay, task);
        log::debug!("Armed {} ({}) in {:?}", task, id, delay);
        self.slots.insert(task, id);
        id
    }

    /// Cancel the pending timer for `task`. Returns whether one was pending.
    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S, task: TimerTask) -> bool {
        match self.slots.remove(&task) {
            Some(id) => {
                scheduler.cancel(id);
                true
            }
            None => false,
        }
    }

    /// Take ownership of a fired timer.
    ///
    /// Returns `false` for stale callbacks, whose handle was replaced or
    /// cancelled after they were scheduled.
    pub fn claim(&mut self, task: TimerTask, id: TimerId) -> bool {
        if self.slots.get(&task) == Some(&id) {
            self.slots.remove(&task);
            true
        } else {
            false
        }
    }

    /// Whether `task` has a pending timer.
    pub fn is_armed(&self, task: TimerTask) -> bool {
        self.slots.contains_key(&task)
    }

    /// Cancel every pending timer.
    pub fn clear<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        for (_, id) in self.slots.drain() {
            scheduler.cancel(id);
        }
    }
}

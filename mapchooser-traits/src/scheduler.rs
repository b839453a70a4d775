// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! One-shot timer trait.
//!
//! The controller never sleeps. It asks the host to call it back after a delay
//! and keeps the returned [`TimerId`] so the callback can be cancelled when a
//! later transition supersedes it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Handle of a scheduled one-shot timer.
///
/// Handles are allocated by the host and must not be reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// What a timer does when it fires.
///
/// The host stores the task alongside the handle and hands both back to the
/// controller when the delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerTask {
    /// Unlock early-vote requests
    GateUnlock,

    /// Start the scheduled end-of-map vote
    Countdown,

    /// Close the ballot and resolve the vote
    VoteDeadline,

    /// Force the current round to end so the match can finish
    RoundEnd,

    /// Issue the level change for the committed next map
    SwitchMap,

    /// Prime the session after the controller attached to a running map
    HotAttach,
}

impl fmt::Display for TimerTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerTask::GateUnlock => write!(f, "gate_unlock"),
            TimerTask::Countdown => write!(f, "countdown"),
            TimerTask::VoteDeadline => write!(f, "vote_deadline"),
            TimerTask::RoundEnd => write!(f, "round_end"),
            TimerTask::SwitchMap => write!(f, "switch_map"),
            TimerTask::HotAttach => write!(f, "hot_attach"),
        }
    }
}

/// Host-side timer service.
///
/// # Requirements
///
/// - Timers fire on the host's main loop, never concurrently with another
///   controller callback.
/// - Cancelling an unknown or already fired handle is a no-op.
/// - Hosts should drop pending timers when the map changes; the controller
///   clears its own handles on session end regardless.
pub trait Scheduler {
    /// Schedule `task` to be delivered back to the controller after `delay`.
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId;

    /// Cancel a pending timer.
    fn cancel(&mut self, id: TimerId);
}

// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use mapchooser_traits::PlayerId;
use std::collections::HashSet;

/// Absorbs float rounding when computing the threshold, so that for example
/// 10 players at 0.7 need 7 requests and not 6.
const THRESHOLD_EPSILON: f64 = 1e-4;

/// Result of an early-vote request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateRequest {
    /// The unlock delay has not elapsed yet
    Locked,

    /// The threshold was already met for this gate
    Active,

    /// The player had already requested
    Duplicate,

    /// The request was counted but the threshold is not met
    Counted { count: usize, required: usize },

    /// This request met the threshold; the gate is now active
    ThresholdMet { count: usize, required: usize },
}

/// Per-player early-vote requests, guarded by a time-based lock.
///
/// The gate becomes active exactly once per arming: at the first counted
/// request for which `count >= required`. Re-arming locks it again and forgets
/// every request.
#[derive(Clone, Debug, Default)]
pub struct EarlyVoteGate {
    requesters: HashSet<PlayerId>,
    unlocked: bool,
    active: bool,
}

impl EarlyVoteGate {
    /// Create a locked gate with no requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests needed with `eligible` players at `percent`.
    pub fn required_for(eligible: usize, percent: f32) -> usize {
        let exact = eligible as f64 * f64::from(percent);
        (exact + THRESHOLD_EPSILON).floor().max(0.0) as usize
    }

    /// Lock the gate and forget all requests.
    pub fn lock(&mut self) {
        self.requesters.clear();
        self.unlocked = false;
        self.active = false;
    }

    /// Start accepting requests.
    pub fn unlock(&mut self) {
        self.unlocked = true;
    }

    /// Whether requests are accepted.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Whether the threshold was met since the last arming.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of counted requests.
    pub fn count(&self) -> usize {
        self.requesters.len()
    }

    /// Whether `player` has a counted request.
    pub fn has_requested(&self, player: PlayerId) -> bool {
        self.requesters.contains(&player)
    }

    /// Count a request from `player` against `required`.
    pub fn request(&mut self, player: PlayerId, required: usize) -> GateRequest {
        if !self.unlocked {
            return GateRequest::Locked;
        }
        if self.active {
            return GateRequest::Active;
        }
        if !self.requesters.insert(player) {
            return GateRequest::Duplicate;
        }

        let count = self.requesters.len();
        if count >= required {
            self.active = true;
            GateRequest::ThresholdMet { count, required }
        } else {
            GateRequest::Counted { count, required }
        }
    }

    /// Withdraw `player`'s request. Returns the new count if one was removed.
    pub fn retract(&mut self, player: PlayerId) -> Option<usize> {
        if self.active || !self.requesters.remove(&player) {
            return None;
        }
        Some(self.requesters.len())
    }

    /// Forget all requests without touching the lock.
    pub fn clear_requests(&mut self) {
        self.requesters.clear();
    }
}

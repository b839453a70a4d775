// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// How a vote ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// An early vote picked a map; the level changes after a short grace
    SwitchNow,

    /// The next map is set and waits for the natural match end
    SwitchLater,

    /// The time limit was raised and the map goes on
    Extended,

    /// Nothing changed and early votes will be accepted again
    Reopened,
}

/// Where the controller is in a map session.
///
/// ```text
/// Idle ──prime──▶ Gated ──threshold / countdown──▶ VoteActive ──deadline──▶ Resolved
///                   ▲                                                           │
///                   └────────────── Extended / Reopened ───────────────────────┘
/// ```
///
/// `Resolved(SwitchNow)` and `Resolved(SwitchLater)` are terminal for the
/// session. Extended and Reopened outcomes go straight back to `Gated`; the
/// controller remembers them as the last resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not primed yet, or the time limit could not be read
    Idle,

    /// Waiting for the early-vote threshold or the countdown
    Gated,

    /// A ballot is open
    VoteActive,

    /// The vote was resolved
    Resolved(Resolution),
}

impl Phase {
    /// Whether the next map is settled for this session.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Phase::Resolved(Resolution::SwitchNow) | Phase::Resolved(Resolution::SwitchLater)
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Gated => write!(f, "gated"),
            Phase::VoteActive => write!(f, "vote_active"),
            Phase::Resolved(resolution) => write!(f, "resolved({:?})", resolution),
        }
    }
}

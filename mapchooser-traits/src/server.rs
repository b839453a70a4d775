// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Game server trait.
//!
//! This module defines the outbound capabilities the controller uses to read
//! and steer the running match: the clock, the round time limit, the restart
//! delay, the roster, round termination and level changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::core::{HostError, PlayerInfo};

/// Prefix used by the level-change command for hosted (workshop) content.
pub const HOSTED_CHANGELEVEL: &str = "ds_workshop_changelevel";

/// Level-change command for maps shipped with the server.
pub const CHANGELEVEL: &str = "changelevel";

/// Why the controller asked the host to end the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// End the round as a draw so no side is credited
    RoundDraw,
}

impl fmt::Display for RoundEndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundEndReason::RoundDraw => write!(f, "round_draw"),
        }
    }
}

/// A level change request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelChange {
    /// Map name without any hosted-content tag
    pub map: String,

    /// Whether the map must be fetched as hosted content
    pub hosted: bool,
}

impl LevelChange {
    /// Create a new level change request.
    pub fn new(map: impl Into<String>, hosted: bool) -> Self {
        Self {
            map: map.into(),
            hosted,
        }
    }

    /// Render the console command a command-driven host would execute.
    pub fn command(&self) -> String {
        if self.hosted {
            format!("{} {}", HOSTED_CHANGELEVEL, self.map)
        } else {
            format!("{} {}", CHANGELEVEL, self.map)
        }
    }
}

/// The running game server as seen by the controller.
///
/// # Requirements
///
/// Implementations are called from the host's main loop only; no method may
/// block. Reads of host parameters may fail, in which case the controller
/// disables the dependent feature for the rest of the session.
///
/// # Example
///
/// ```text
/// use mapchooser_traits::{GameServer, HostError, LevelChange};
///
/// impl GameServer for MyServer {
///     fn time_limit(&self) -> Result<f32, HostError> {
///         self.convar("mp_timelimit").ok_or_else(|| HostError::missing("mp_timelimit"))
///     }
///
///     fn change_level(&mut self, change: &LevelChange) {
///         self.execute(&change.command());
///     }
///     // ...
/// }
/// ```
pub trait GameServer {
    /// Name of the map currently loaded.
    fn current_map(&self) -> String;

    /// Monotonic game clock.
    fn current_time(&self) -> Duration;

    /// Round time limit, in minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not expose a time limit.
    fn time_limit(&self) -> Result<f32, HostError>;

    /// Overwrite the round time limit, in minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is missing or the value is refused.
    fn set_time_limit(&mut self, minutes: f32) -> Result<(), HostError>;

    /// Delay between the match-end scoreboard and the automatic restart, if the
    /// host has one configured.
    fn restart_delay(&self) -> Option<Duration>;

    /// Current roster, including bots and players still connecting.
    fn players(&self) -> Vec<PlayerInfo>;

    /// End the current round after `delay`.
    fn terminate_round(&mut self, delay: Duration, reason: RoundEndReason);

    /// Switch to another map immediately.
    fn change_level(&mut self, change: &LevelChange);
}

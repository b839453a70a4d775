// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Core player types and the host error type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors a host can report when the controller asks it for something.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("Host parameter `{0}` is not available")]
    MissingParameter(String),

    #[error("Host parameter `{name}` rejected value {value}")]
    InvalidParameter { name: String, value: String },

    #[error("Host command failed: {0}")]
    CommandFailed(String),
}

impl HostError {
    /// Create a missing parameter error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }
}

/// Stable identifier of a connected player.
///
/// On Steam-based servers this is the 64-bit SteamID; the controller only
/// requires it to be unique per player and stable across a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Team a player is currently assigned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Connected but has not picked a side yet
    Unassigned,

    /// Watching the match
    Spectator,

    /// Playing on the first side
    Terrorist,

    /// Playing on the second side
    CounterTerrorist,
}

impl Team {
    /// Whether the player is on a playing side (not unassigned or spectating).
    pub fn is_playing(&self) -> bool {
        matches!(self, Team::Terrorist | Team::CounterTerrorist)
    }
}

/// Snapshot of one roster entry as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// The player's identifier
    pub id: PlayerId,

    /// Display name used in chat announcements
    pub name: String,

    /// Whether the player is fully connected (not still loading)
    pub connected: bool,

    /// Whether the slot is a bot
    pub bot: bool,

    /// Current team
    pub team: Team,
}

impl PlayerInfo {
    /// Create a connected human player on a playing team.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId(id),
            name: name.into(),
            connected: true,
            bot: false,
            team: Team::Terrorist,
        }
    }

    /// Set the team.
    pub fn with_team(mut self, team: Team) -> Self {
        self.team = team;
        self
    }

    /// Mark the player as a bot.
    pub fn as_bot(mut self) -> Self {
        self.bot = true;
        self
    }

    /// Whether chat output and menus should reach this player.
    pub fn is_human(&self) -> bool {
        self.connected && !self.bot
    }
}

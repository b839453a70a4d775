// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Common types used throughout the map chooser

use mapchooser_traits::{LevelChange, Message};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// Tag prefixed to map names that must be loaded as hosted (workshop) content
pub const HOSTED_TAG: &str = "ws:";

/// Upper bound on how long a ballot stays open
pub const MAX_VOTE_DURATION: Duration = Duration::from_secs(60);

/// Pause between announcing an early-vote winner and switching the level
pub const SWITCH_GRACE: Duration = Duration::from_secs(5);

/// Delay handed to the host when forcing the current round to end
pub const ROUND_END_DELAY: Duration = Duration::from_secs(5);

/// Head start taken off the host restart delay before switching the level
pub const RESTART_DELAY_MARGIN: Duration = Duration::from_millis(500);

/// Wait after attaching to a running map before the session is primed
pub const HOT_ATTACH_DELAY: Duration = Duration::from_secs(3);

/// Early-vote delays shorter than this (in minutes) unlock the gate immediately
pub const GATE_EPSILON_MINUTES: f32 = 1e-3;

/// Upper bound for any minutes setting (one week)
pub const MAX_SETTING_MINUTES: f32 = 7.0 * 24.0 * 60.0;

/// Longest duration a setting or host parameter converts to
pub const MAX_SETTING_DURATION: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Strip whitespace and the hosted-content tag from a raw map name.
pub fn normalize_map_name(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix(HOSTED_TAG) {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}

/// Convert a minutes setting into a duration, treating negative and
/// non-finite values as zero and clamping at [`MAX_SETTING_DURATION`].
pub fn minutes(value: f32) -> Duration {
    seconds_f64(f64::from(value) * 60.0)
}

/// Convert a seconds setting into a duration, treating negative and
/// non-finite values as zero and clamping at [`MAX_SETTING_DURATION`].
pub fn seconds(value: f32) -> Duration {
    seconds_f64(f64::from(value))
}

fn seconds_f64(value: f64) -> Duration {
    if !value.is_finite() || value <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(value)
        .map_or(MAX_SETTING_DURATION, |duration| duration.min(MAX_SETTING_DURATION))
}

/// A map in the rotation.
///
/// Two identifiers are equal when their normalized names are equal; the
/// hosted-content flag does not take part in comparisons.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapId {
    /// Normalized map name
    name: String,

    /// Whether switching to this map needs the hosted-content command
    hosted: bool,
}

impl MapId {
    /// Create a map identifier, normalizing the name.
    pub fn new(name: &str, hosted: bool) -> Self {
        Self {
            name: normalize_map_name(name).to_string(),
            hosted,
        }
    }

    /// Parse one line of a map list. A `ws:` prefix marks hosted content.
    ///
    /// Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        let hosted = trimmed.starts_with(HOSTED_TAG);
        let name = normalize_map_name(trimmed);
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            hosted,
        })
    }

    /// The normalized map name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether switching to this map needs the hosted-content command.
    pub fn is_hosted(&self) -> bool {
        self.hosted
    }

    /// Whether `raw` names this map once normalized.
    pub fn matches(&self, raw: &str) -> bool {
        self.name == normalize_map_name(raw)
    }

    /// Build the host level-change request for this map.
    pub fn level_change(&self) -> LevelChange {
        LevelChange::new(self.name.clone(), self.hosted)
    }
}

impl PartialEq for MapId {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MapId {}

impl Hash for MapId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One line of the ballot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteOption {
    /// Keep playing the current map (early votes only)
    DontChange,

    /// Switch to this map
    Map(MapId),

    /// Lengthen the current map (scheduled votes only)
    Extend,
}

impl VoteOption {
    /// Plain-text label used in ballot announcements.
    pub fn label(&self) -> String {
        match self {
            VoteOption::DontChange => "Don't Change".to_string(),
            VoteOption::Map(map) => map.name().to_string(),
            VoteOption::Extend => "Extend".to_string(),
        }
    }

    /// Localized label used in the vote menu.
    pub fn menu_label(&self) -> Message {
        match self {
            VoteOption::DontChange => Message::OptionDontChange,
            VoteOption::Map(map) => Message::Label(map.name().to_string()),
            VoteOption::Extend => Message::OptionExtend,
        }
    }

    /// The map behind this option, if it is one.
    pub fn as_map(&self) -> Option<&MapId> {
        match self {
            VoteOption::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for VoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::MapChooserError;
use crate::types::{
    minutes, seconds, GATE_EPSILON_MINUTES, MAX_SETTING_MINUTES, MAX_VOTE_DURATION,
};

/// Settings for one map session.
///
/// Serialized with PascalCase keys (`VoteStartTime`, `RTVPercent`, ...).
/// Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MapChooserConfig {
    /// Minutes before the time limit at which the scheduled vote starts
    #[serde(rename = "VoteStartTime")]
    pub vote_start_lead_minutes: f32,

    /// Offer "Extend" on scheduled votes
    pub allow_extend: bool,

    /// Minutes added to the time limit when "Extend" wins
    #[serde(rename = "ExtendTimeStep")]
    pub extend_step_minutes: f32,

    /// Maximum number of extensions per map
    pub extend_limit: u32,

    /// How many recently played maps are kept out of votes
    #[serde(rename = "ExcludeMaps")]
    pub exclude_count: usize,

    /// Number of maps on each ballot
    #[serde(rename = "IncludeMaps")]
    pub include_count: usize,

    /// Allow the current map on the ballot
    #[serde(rename = "IncludeCurrent")]
    pub include_current_map: bool,

    /// Offer "Don't Change" on early votes
    #[serde(rename = "DontChangeRTV")]
    pub dont_change_rtv: bool,

    /// Seconds a ballot stays open (capped at 60)
    #[serde(rename = "VoteDuration")]
    pub vote_duration_secs: f32,

    /// Leave spectators out of the early-vote threshold
    #[serde(rename = "IgnoreSpec")]
    pub ignore_spectators: bool,

    /// Accept early-vote requests at all
    pub allow_rtv: bool,

    /// Share of eligible players needed to start an early vote
    #[serde(rename = "RTVPercent")]
    pub rtv_percent: f32,

    /// Minutes after map start (or after a kept map) before early votes open
    #[serde(rename = "RTVDelay")]
    pub rtv_delay_minutes: f32,

    /// Force the round to end once the next map is known
    pub enforce_time_limit: bool,
}

impl Default for MapChooserConfig {
    fn default() -> Self {
        Self {
            vote_start_lead_minutes: 3.0,
            allow_extend: true,
            extend_step_minutes: 10.0,
            extend_limit: 3,
            exclude_count: 0,
            include_count: 5,
            include_current_map: false,
            dont_change_rtv: true,
            vote_duration_secs: 15.0,
            ignore_spectators: true,
            allow_rtv: true,
            rtv_percent: 0.6,
            rtv_delay_minutes: 3.0,
            enforce_time_limit: true,
        }
    }
}

impl MapChooserConfig {
    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`MapChooserError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), MapChooserError> {
        if !(self.rtv_percent > 0.0 && self.rtv_percent <= 1.0) {
            return Err(MapChooserError::invalid_config(format!(
                "RTVPercent must be in (0, 1], got {}",
                self.rtv_percent
            )));
        }

        let durations = [
            ("VoteStartTime", self.vote_start_lead_minutes, MAX_SETTING_MINUTES),
            ("ExtendTimeStep", self.extend_step_minutes, MAX_SETTING_MINUTES),
            ("VoteDuration", self.vote_duration_secs, MAX_SETTING_MINUTES * 60.0),
            ("RTVDelay", self.rtv_delay_minutes, MAX_SETTING_MINUTES),
        ];
        for (name, value, max) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(MapChooserError::invalid_config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
            if value > max {
                return Err(MapChooserError::invalid_config(format!(
                    "{} must be at most {}, got {}",
                    name, max, value
                )));
            }
        }

        Ok(())
    }

    /// How long before the time limit the scheduled vote opens.
    pub fn vote_start_lead(&self) -> Duration {
        minutes(self.vote_start_lead_minutes)
    }

    /// How long a ballot stays open.
    pub fn capped_vote_duration(&self) -> Duration {
        seconds(self.vote_duration_secs).min(MAX_VOTE_DURATION)
    }

    /// Delay before early votes are accepted.
    pub fn rtv_delay(&self) -> Duration {
        minutes(self.rtv_delay_minutes)
    }

    /// Whether the early-vote gate opens without waiting.
    pub fn gate_unlocks_immediately(&self) -> bool {
        self.rtv_delay_minutes < GATE_EPSILON_MINUTES
    }

    /// Time between a resolved scheduled vote and the forced round end.
    ///
    /// The vote opened `vote_start_lead` before the limit and ran for the
    /// capped duration, so this lands on the time limit.
    pub fn round_end_delay(&self) -> Duration {
        self.vote_start_lead()
            .saturating_sub(self.capped_vote_duration())
    }
}

// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Player commands
//!
//! Parses console commands (`css_rtv`) and chat triggers (`!rtv`, `/rtv`,
//! or the bare word) into [`PlayerCommand`]s, and formats the time-left reply.

use std::time::Duration;

/// Prefixes stripped before matching a command word.
const COMMAND_PREFIXES: [&str; 3] = ["css_", "!", "/"];

/// A command a player typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Request an early vote
    Rtv,

    /// Withdraw an early-vote request
    Unrtv,

    /// Nominate a map by (partial) name, or open the menu without one
    Nominate(Option<String>),

    /// Ask which map comes next
    NextMap,

    /// Ask how long the map has left
    TimeLeft,
}

impl PlayerCommand {
    /// Parse a console command or chat line. Returns `None` for anything
    /// that is not a map chooser command.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = COMMAND_PREFIXES
            .iter()
            .find_map(|prefix| strip_prefix_ignore_case(text, prefix))
            .unwrap_or(text);

        let (word, rest) = match text.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (text, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "rtv" | "rockthevote" => Some(PlayerCommand::Rtv),
            "unrtv" => Some(PlayerCommand::Unrtv),
            "nominate" => Some(PlayerCommand::Nominate(
                (!rest.is_empty()).then(|| rest.to_string()),
            )),
            "nextmap" => Some(PlayerCommand::NextMap),
            "timeleft" => Some(PlayerCommand::TimeLeft),
            _ => None,
        }
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

/// Render the time-left reply: `HH:MM:SS.` past the hour, `MM:SS.` below,
/// `N/A` when no time is left or the limit is unknown.
pub fn format_time_left(remaining: Option<Duration>) -> String {
    let total = match remaining {
        Some(remaining) if remaining.as_secs() > 0 => remaining.as_secs(),
        _ => return "N/A".to_string(),
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}.", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}.", minutes, seconds)
    }
}

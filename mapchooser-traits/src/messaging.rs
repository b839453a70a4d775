// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Chat output and menu traits.
//!
//! Every line the controller shows to players is a [`Message`]: a localization
//! key plus positional arguments. Rendering the key into text is the host's
//! business, which keeps translations out of the state machine.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A player-facing notice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Message {
    /// Verbatim text, used for map names in menus
    Label(String),

    /// Early vote is locked or disabled
    RtvNotAvailable,

    /// A player requested an early vote
    RtvProgress { player: String, count: usize, required: usize },

    /// A player withdrew their early-vote request
    RtvRetracted { player: String, count: usize, required: usize },

    /// The early-vote threshold was met and a ballot is opening
    RtvVoteStarting,

    /// The early-vote threshold was met and the known next map is loading
    RtvSwitching { map: String },

    /// Early votes are accepted again
    RtvReopened,

    /// Title of the nomination menu
    NominateHeader,

    /// Disabled menu entry for the map being played
    NominateCurrentMap { map: String },

    /// Disabled menu entry for a recently played map
    NominateRecent { map: String },

    /// Disabled menu entry for a map someone already nominated
    NominateNominated { map: String },

    /// A nomination was recorded
    NominationConfirmed { player: String, map: String },

    /// A partial name matched more than one map
    NominationAmbiguous { query: String },

    /// A partial name matched nothing in the pool
    NominationNoMatch { query: String },

    /// Nominations are closed while a ballot is open
    NominationsClosed,

    /// Title of the vote menu
    VoteHeader,

    /// Label of the "don't change" option
    OptionDontChange,

    /// Label of the "extend" option
    OptionExtend,

    /// A player cast or changed a ballot
    VoteCast { player: String, option: String },

    /// A ballot arrived while no vote is open
    NoVoteActive,

    /// The next map was decided
    NextMapChosen { map: String },

    /// The current map was extended
    MapExtended { minutes: f32 },

    /// "Don't change" won the early vote
    MapNotChanged,

    /// Reply to a next map query
    NextMap { map: String },

    /// Reply to a next map query before the vote
    NextMapUnknown,

    /// Reply to a time left query
    TimeLeft { time: String },
}

impl Message {
    /// Localization key of this message.
    pub fn key(&self) -> &'static str {
        match self {
            Message::Label(_) => "mapchooser.label",
            Message::RtvNotAvailable => "mapchooser.rtv_not_available",
            Message::RtvProgress { .. } => "mapchooser.rtv",
            Message::RtvRetracted { .. } => "mapchooser.unrtv",
            Message::RtvVoteStarting => "mapchooser.rtv_vote_starting",
            Message::RtvSwitching { .. } => "mapchooser.rtv_switching",
            Message::RtvReopened => "mapchooser.rtv_reopened",
            Message::NominateHeader => "mapchooser.nominate_header",
            Message::NominateCurrentMap { .. } => "mapchooser.nominate_current_map",
            Message::NominateRecent { .. } => "mapchooser.nominate_recent",
            Message::NominateNominated { .. } => "mapchooser.nominate_nominated",
            Message::NominationConfirmed { .. } => "mapchooser.nominate",
            Message::NominationAmbiguous { .. } => "mapchooser.nominate_ambiguous",
            Message::NominationNoMatch { .. } => "mapchooser.nominate_no_match",
            Message::NominationsClosed => "mapchooser.nominate_closed",
            Message::VoteHeader => "mapchooser.vote_header",
            Message::OptionDontChange => "mapchooser.option_dont_change",
            Message::OptionExtend => "mapchooser.option_extend",
            Message::VoteCast { .. } => "mapchooser.vote_cast",
            Message::NoVoteActive => "mapchooser.vote_inactive",
            Message::NextMapChosen { .. } => "mapchooser.next_map_chosen",
            Message::MapExtended { .. } => "mapchooser.extended",
            Message::MapNotChanged => "mapchooser.not_changed",
            Message::NextMap { .. } => "mapchooser.nextmap",
            Message::NextMapUnknown => "mapchooser.nextmap_unknown",
            Message::TimeLeft { .. } => "mapchooser.timeleft",
        }
    }

    /// Positional arguments, in template order.
    pub fn args(&self) -> Vec<String> {
        match self {
            Message::Label(text) => vec![text.clone()],
            Message::RtvProgress { player, count, required }
            | Message::RtvRetracted { player, count, required } => {
                vec![player.clone(), count.to_string(), required.to_string()]
            }
            Message::RtvSwitching { map }
            | Message::NominateCurrentMap { map }
            | Message::NominateRecent { map }
            | Message::NominateNominated { map }
            | Message::NextMapChosen { map }
            | Message::NextMap { map } => vec![map.clone()],
            Message::NominationConfirmed { player, map } => vec![player.clone(), map.clone()],
            Message::NominationAmbiguous { query } | Message::NominationNoMatch { query } => {
                vec![query.clone()]
            }
            Message::VoteCast { player, option } => vec![player.clone(), option.clone()],
            Message::MapExtended { minutes } => vec![minutes.to_string()],
            Message::TimeLeft { time } => vec![time.clone()],
            Message::RtvNotAvailable
            | Message::RtvVoteStarting
            | Message::RtvReopened
            | Message::NominateHeader
            | Message::NominationsClosed
            | Message::VoteHeader
            | Message::OptionDontChange
            | Message::OptionExtend
            | Message::NoVoteActive
            | Message::MapNotChanged
            | Message::NextMapUnknown => Vec::new(),
        }
    }
}

/// Which controller flow a menu belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuKind {
    /// Pick a map to nominate
    Nominate,

    /// Cast a ballot in the open vote
    MapVote,
}

/// One selectable line of a menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Text shown to the player
    pub label: Message,

    /// Disabled entries are shown but cannot be picked
    pub enabled: bool,
}

impl MenuEntry {
    /// Create a selectable entry.
    pub fn enabled(label: Message) -> Self {
        Self { label, enabled: true }
    }

    /// Create a greyed-out entry.
    pub fn disabled(label: Message) -> Self {
        Self { label, enabled: false }
    }
}

/// A numbered chat menu.
///
/// The host reports a pick back to the controller as the entry's index
/// together with the menu kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    /// Which flow handles the pick
    pub kind: MenuKind,

    /// Title line
    pub title: Message,

    /// Entries, in display order
    pub entries: Vec<MenuEntry>,
}

/// Host-side chat output.
pub trait Messenger {
    /// Send a message to every connected player.
    fn broadcast(&mut self, message: &Message);

    /// Send a message to a single player.
    fn reply(&mut self, player: PlayerId, message: &Message);

    /// Open a menu for a single player.
    fn show_menu(&mut self, player: PlayerId, menu: &Menu);
}

// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Error types for the map chooser.
//!
//! None of these ever reach the host: the controller turns them into a log
//! line or a chat reply and carries on.

use mapchooser_traits::{HostError, Message};

/// Why a nomination was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NominationError {
    /// Nominations are closed while a ballot is open
    #[error("A map vote is in progress")]
    VoteInProgress,

    /// The map is being played right now
    #[error("{0} is the current map")]
    CurrentMap(String),

    /// The map was played recently
    #[error("{0} was played recently")]
    RecentlyPlayed(String),

    /// Someone already nominated the map
    #[error("{0} is already nominated")]
    AlreadyNominated(String),

    /// A partial name matched several maps
    #[error("\"{0}\" matches more than one map")]
    Ambiguous(String),

    /// A partial name matched nothing
    #[error("\"{0}\" does not match any map")]
    NoMatch(String),
}

impl NominationError {
    /// The chat reply explaining the refusal.
    pub fn to_message(&self) -> Message {
        match self {
            NominationError::VoteInProgress => Message::NominationsClosed,
            NominationError::CurrentMap(map) => Message::NominateCurrentMap { map: map.clone() },
            NominationError::RecentlyPlayed(map) => Message::NominateRecent { map: map.clone() },
            NominationError::AlreadyNominated(map) => {
                Message::NominateNominated { map: map.clone() }
            }
            NominationError::Ambiguous(query) => Message::NominationAmbiguous {
                query: query.clone(),
            },
            NominationError::NoMatch(query) => Message::NominationNoMatch {
                query: query.clone(),
            },
        }
    }
}

/// Main error type for map chooser operations
#[derive(Debug, thiserror::Error)]
pub enum MapChooserError {
    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The host refused or could not answer a request
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// A nomination was refused
    #[error("Nomination rejected: {0}")]
    Nomination(#[from] NominationError),

    /// A ballot referred to an option that is not on the ballot
    #[error("Option {0} is not on the ballot")]
    UnknownOption(usize),
}

impl MapChooserError {
    /// Create a new invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! # Map Chooser Core Library
//!
//! This library provides the end-of-map vote and rotation state machine for
//! dedicated game servers, generic over the host that embeds it.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`config`] - Session settings and the loader seam
//! - [`pool`] - The session's map list and the play history
//! - [`nominations`] - Player nominations
//! - [`gate`] - Early-vote requests and the threshold check
//! - [`votes`] - Ballot construction, tallies and tie-breaking
//! - [`sequencer`] - The [`MapChooser`] controller and its timers
//! - [`commands`] - Player command parsing
//! - [`types`] - Map identifiers, vote options and timing constants
//!
//! ## Usage
//!
//! Implement the traits from `mapchooser-traits` for the game server, pick a
//! [`config::SessionLoader`] and forward host events to the controller:
//!
//! ```rust,no_run,ignore
//! use mapchooser_core::MapChooser;
//!
//! let mut chooser = MapChooser::new(my_server, my_loader);
//! chooser.on_session_start("de_dust2");
//! chooser.on_round_start();
//!
//! // From the host's timer callback
//! chooser.on_timer(id, task);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod gate;
pub mod nominations;
pub mod pool;
pub mod sequencer;
pub mod testing;
pub mod types;
pub mod votes;

// Re-export commonly used types
pub use config::{MapChooserConfig, SessionLoader};
pub use error::{MapChooserError, NominationError};
pub use pool::{HistoryRing, MapPool};
pub use sequencer::{MapChooser, Phase, Resolution};
pub use types::{MapId, VoteOption};

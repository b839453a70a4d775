// Copyright © Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! # Map Chooser Traits
//!
//! This library provides the trait seams between the map chooser controller and
//! the game server process that embeds it.
//!
//! ## Overview
//!
//! The controller never talks to a game engine directly. Everything it needs from
//! the host (the clock, the round time limit, the player roster, level changes,
//! one-shot timers and chat output) goes through the traits defined here, so that
//! the same controller can be driven by a real dedicated server, by a console
//! harness, or by the mock host used in tests.
//!
//! ## Core Traits
//!
//! - **Server**: [`GameServer`], [`LevelChange`], [`RoundEndReason`]
//! - **Timers**: [`Scheduler`], [`TimerId`], [`TimerTask`]
//! - **Chat**: [`Messenger`], [`Message`], [`Menu`]
//! - **Players**: [`PlayerId`], [`PlayerInfo`], [`Team`]
//!
//! A type implementing all three host traits automatically implements [`Host`].
//!
//! ## Example
//!
//! ```text
//! use mapchooser_traits::{GameServer, Messenger, Scheduler};
//!
//! struct MyServer { /* ... */ }
//!
//! impl GameServer for MyServer { /* clock, time limit, roster, level change */ }
//! impl Scheduler for MyServer { /* one-shot timers */ }
//! impl Messenger for MyServer { /* chat and menus */ }
//!
//! // MyServer is now a `Host` and can own a `MapChooser`.
//! ```

pub mod core;
pub mod messaging;
pub mod scheduler;
pub mod server;

// Re-export commonly used traits at the crate root
pub use crate::core::{HostError, PlayerId, PlayerInfo, Team};
pub use messaging::{Menu, MenuEntry, MenuKind, Message, Messenger};
pub use scheduler::{Scheduler, TimerId, TimerTask};
pub use server::{GameServer, LevelChange, RoundEndReason};

/// Everything the controller needs from the process that embeds it.
///
/// This is a marker trait with a blanket implementation; implement the three
/// component traits and `Host` comes for free.
pub trait Host: GameServer + Scheduler + Messenger {}

impl<T> Host for T where T: GameServer + Scheduler + Messenger {}

/// Result type alias for host operations.
pub type Result<T> = std::result::Result<T, HostError>;

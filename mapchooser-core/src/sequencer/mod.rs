// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Timer-driven phase sequencer.
//!
//! This module provides the [`MapChooser`] controller, which owns the whole
//! per-session state and moves it through the phases
//! gate → countdown → vote → resolution → switch.
//!
//! # Overview
//!
//! The controller is responsible for:
//! - Reloading settings and the map list at session start
//! - Arming and cancelling the one-shot timers that drive each phase
//! - Opening ballots from the early-vote gate or the countdown
//! - Resolving ballots into a switch, an extension or a reopened gate
//! - Issuing the level change once the match ends
//!
//! # Generic Design
//!
//! The controller is generic over:
//! - `H`: the embedding process implementing [`mapchooser_traits::Host`]
//! - `L`: the settings source implementing [`crate::config::SessionLoader`]

mod controller;
mod phase;
mod timer_slots;

pub use controller::MapChooser;
pub use phase::{Phase, Resolution};
pub use timer_slots::TimerSlots;

// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Testing utilities for mapchooser-core.
//!
//! This module provides a mock host with a virtual clock, an in-memory
//! session loader and helpers for driving a [`MapChooser`] through time
//! without a real game server.

mod mock_host;
mod mock_loader;

pub use mock_host::MockHost;
pub use mock_loader::StaticLoader;

use mapchooser_traits::{PlayerInfo, TimerTask};
use std::time::Duration;

use crate::config::SessionLoader;
use crate::sequencer::MapChooser;

/// Create `count` connected human players with ids `1..=count`.
///
/// # Example
///
/// ```ignore
/// use mapchooser_core::testing::make_players;
///
/// let players = make_players(3);
/// assert_eq!(players[2].name, "player3");
/// ```
pub fn make_players(count: u64) -> Vec<PlayerInfo> {
    (1..=count)
        .map(|id| PlayerInfo::new(id, format!("player{}", id)))
        .collect()
}

impl<L: SessionLoader> MapChooser<MockHost, L> {
    /// Move the virtual clock forward by `elapsed`, firing every timer that
    /// comes due on the way, in order.
    pub fn advance_time(&mut self, elapsed: Duration) {
        let until = self.host().now + elapsed;
        while let Some((id, due, task)) = self.host_mut().pop_due(until) {
            let host = self.host_mut();
            host.now = host.now.max(due);
            self.on_timer(id, task);
        }
        self.host_mut().now = until;
    }

    /// Fire the pending timer for `task` right away, moving the clock to its
    /// due time if that is later. Returns whether one was pending.
    pub fn fire(&mut self, task: TimerTask) -> bool {
        match self.host_mut().take_timer(task) {
            Some((id, due)) => {
                let host = self.host_mut();
                host.now = host.now.max(due);
                self.on_timer(id, task);
                true
            }
            None => false,
        }
    }
}

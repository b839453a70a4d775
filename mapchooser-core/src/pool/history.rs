// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;

use crate::types::MapId;

/// Recently played maps, oldest first.
///
/// A map is appended when its session ends and the ring is trimmed to the
/// configured capacity when the next session starts, so between sessions it
/// may hold one entry more than the capacity.
#[derive(Clone, Debug, Default)]
pub struct HistoryRing {
    entries: VecDeque<MapId>,
}

impl HistoryRing {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the map whose session just ended.
    pub fn record(&mut self, map: MapId) {
        self.entries.push_back(map);
    }

    /// Evict the oldest entries until at most `capacity` remain.
    ///
    /// Returns the evicted maps, oldest first.
    pub fn trim(&mut self, capacity: usize) -> Vec<MapId> {
        let excess = self.entries.len().saturating_sub(capacity);
        self.entries.drain(..excess).collect()
    }

    /// Whether `name` was played recently.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|map| map.matches(name))
    }

    /// Number of remembered maps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no map is remembered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remembered maps, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MapId> {
        self.entries.iter()
    }
}

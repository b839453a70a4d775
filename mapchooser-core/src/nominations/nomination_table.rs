// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use mapchooser_traits::PlayerId;

use crate::error::NominationError;
use crate::pool::HistoryRing;
use crate::types::MapId;

/// Whether a map can be nominated right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapStatus {
    /// Open for nomination
    Available,

    /// Being played right now
    CurrentMap,

    /// In the play history
    RecentlyPlayed,

    /// Somebody already nominated it
    AlreadyNominated,
}

/// What a successful nomination did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NominationOutcome {
    /// First nomination by this player
    Inserted,

    /// The player's earlier nomination was replaced
    Replaced { previous: MapId },
}

/// Player → nominated map, in nomination order.
///
/// Invariant: no map appears twice, and no entry names the current map or a
/// map in the play history at the time it was inserted.
#[derive(Clone, Debug, Default)]
pub struct NominationTable {
    entries: Vec<(PlayerId, MapId)>,
}

impl NominationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `map` against the current map, the history and this table.
    pub fn status(&self, map: &MapId, current_map: &str, history: &HistoryRing) -> MapStatus {
        if map.matches(current_map) {
            MapStatus::CurrentMap
        } else if history.contains(map.name()) {
            MapStatus::RecentlyPlayed
        } else if self.is_nominated(map) {
            MapStatus::AlreadyNominated
        } else {
            MapStatus::Available
        }
    }

    /// Record `player`'s nomination, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Rejects the current map, recently played maps and maps that already
    /// have a nomination (including the player's own).
    pub fn nominate(
        &mut self,
        player: PlayerId,
        map: MapId,
        current_map: &str,
        history: &HistoryRing,
    ) -> Result<NominationOutcome, NominationError> {
        match self.status(&map, current_map, history) {
            MapStatus::Available => {}
            MapStatus::CurrentMap => {
                return Err(NominationError::CurrentMap(map.name().to_string()))
            }
            MapStatus::RecentlyPlayed => {
                return Err(NominationError::RecentlyPlayed(map.name().to_string()))
            }
            MapStatus::AlreadyNominated => {
                return Err(NominationError::AlreadyNominated(map.name().to_string()))
            }
        }

        let outcome = match self.remove(player) {
            Some(previous) => NominationOutcome::Replaced { previous },
            None => NominationOutcome::Inserted,
        };
        self.entries.push((player, map));
        Ok(outcome)
    }

    /// Drop `player`'s nomination.
    pub fn remove(&mut self, player: PlayerId) -> Option<MapId> {
        let index = self.entries.iter().position(|(id, _)| *id == player)?;
        Some(self.entries.remove(index).1)
    }

    /// The map `player` nominated, if any.
    pub fn nomination_of(&self, player: PlayerId) -> Option<&MapId> {
        self.entries
            .iter()
            .find(|(id, _)| *id == player)
            .map(|(_, map)| map)
    }

    /// Whether someone nominated `map`.
    pub fn is_nominated(&self, map: &MapId) -> bool {
        self.entries.iter().any(|(_, nominated)| nominated == map)
    }

    /// Nominated maps, in nomination order.
    pub fn maps(&self) -> Vec<MapId> {
        self.entries.iter().map(|(_, map)| map.clone()).collect()
    }

    /// Number of nominations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nobody nominated anything.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every nomination.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use super::HistoryRing;
use crate::types::{normalize_map_name, MapId};

/// Filters applied when building the set of maps a vote may draw from.
#[derive(Clone, Copy, Debug)]
pub struct EligibilityRules<'a> {
    /// The map being played
    pub current_map: &'a str,

    /// Keep the current map in the set
    pub include_current: bool,

    /// Recently played maps to leave out, if history exclusion is on
    pub history: Option<&'a HistoryRing>,

    /// Maps already on the ballot through nominations
    pub nominated: &'a [MapId],
}

/// The session's map list, in file order.
#[derive(Clone, Debug, Default)]
pub struct MapPool {
    maps: Vec<MapId>,
}

impl MapPool {
    /// Create a pool from already parsed maps. Later duplicates are dropped.
    pub fn new(maps: impl IntoIterator<Item = MapId>) -> Self {
        let mut pool = Self::default();
        for map in maps {
            if !pool.maps.contains(&map) {
                pool.maps.push(map);
            }
        }
        pool
    }

    /// Parse a newline-delimited map list.
    ///
    /// Blank lines and lines starting with `//` or `#` are skipped; a `ws:`
    /// prefix marks hosted content.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with("//") && !line.starts_with('#'))
                .filter_map(MapId::parse),
        )
    }

    /// All maps, in file order.
    pub fn maps(&self) -> &[MapId] {
        &self.maps
    }

    /// Number of maps.
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Look a map up by name, ignoring the hosted tag.
    pub fn find(&self, name: &str) -> Option<&MapId> {
        self.maps.iter().find(|map| map.matches(name))
    }

    /// Resolve a player-typed, possibly partial, map name.
    ///
    /// An exact (case-insensitive) name match wins outright; otherwise every
    /// map whose name contains the query is returned.
    pub fn search(&self, query: &str) -> Vec<&MapId> {
        let needle = normalize_map_name(query).to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        if let Some(exact) = self
            .maps
            .iter()
            .find(|map| map.name().to_lowercase() == needle)
        {
            return vec![exact];
        }

        self.maps
            .iter()
            .filter(|map| map.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Maps a vote may draw random fillers from, in pool order.
    pub fn eligible(&self, rules: &EligibilityRules<'_>) -> Vec<MapId> {
        self.maps
            .iter()
            .filter(|map| rules.include_current || !map.matches(rules.current_map))
            .filter(|map| {
                rules
                    .history
                    .map_or(true, |history| !history.contains(map.name()))
            })
            .filter(|map| !rules.nominated.contains(map))
            .cloned()
            .collect()
    }
}

// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use anyhow::{anyhow, Result};

use crate::config::{MapChooserConfig, SessionLoader};
use crate::pool::MapPool;

/// An in-memory session loader for testing.
///
/// Either source can be switched to failing to exercise the degraded paths.
#[derive(Clone, Debug)]
pub struct StaticLoader {
    /// Settings to hand out; `None` makes loading fail
    pub config: Option<MapChooserConfig>,

    /// Map list text; `None` makes loading fail
    pub maps: Option<String>,
}

impl StaticLoader {
    /// Create a loader serving `config` and the newline-delimited `maps`.
    pub fn new(config: MapChooserConfig, maps: &str) -> Self {
        Self {
            config: Some(config),
            maps: Some(maps.to_string()),
        }
    }
}

impl SessionLoader for StaticLoader {
    fn load_config(&mut self) -> Result<MapChooserConfig> {
        self.config
            .clone()
            .ok_or_else(|| anyhow!("config source unavailable"))
    }

    fn load_map_pool(&mut self) -> Result<MapPool> {
        self.maps
            .as_deref()
            .map(MapPool::from_lines)
            .ok_or_else(|| anyhow!("map list unavailable"))
    }
}

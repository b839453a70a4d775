// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;

use super::MapChooserConfig;
use crate::pool::MapPool;

/// Source of the settings and the map list for a session.
///
/// The controller calls both methods at every session start. A failure is
/// logged and the controller keeps its previous config (or, for the map list,
/// runs the session with an empty pool).
///
/// # Example
///
/// ```ignore
/// use mapchooser_core::{config::SessionLoader, MapChooserConfig, MapPool};
///
/// struct Embedded;
///
/// impl SessionLoader for Embedded {
///     fn load_config(&mut self) -> anyhow::Result<MapChooserConfig> {
///         Ok(MapChooserConfig::default())
///     }
///
///     fn load_map_pool(&mut self) -> anyhow::Result<MapPool> {
///         Ok(MapPool::from_lines("de_dust2\nde_mirage\n"))
///     }
/// }
/// ```
pub trait SessionLoader {
    /// Read the session settings.
    fn load_config(&mut self) -> Result<MapChooserConfig>;

    /// Read the map list.
    fn load_map_pool(&mut self) -> Result<MapPool>;
}

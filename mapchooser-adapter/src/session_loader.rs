// Directory-backed session loader
//
// Re-reads `config.json` and `maps.txt` from one directory at every map
// start.

use anyhow::{Context, Result};
use mapchooser_core::{MapChooserConfig, MapPool, SessionLoader};
use std::path::{Path, PathBuf};

use crate::{config_file, map_list};

/// Settings file name inside the loader directory
pub const CONFIG_FILE: &str = "config.json";

/// Map list file name inside the loader directory
pub const MAPS_FILE: &str = "maps.txt";

/// Loads settings and the map list from a directory.
#[derive(Clone, Debug)]
pub struct FileSessionLoader {
    dir: PathBuf,
}

impl FileSessionLoader {
    /// Create a loader reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory files are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the settings file.
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Path of the map list.
    pub fn maps_path(&self) -> PathBuf {
        self.dir.join(MAPS_FILE)
    }
}

impl SessionLoader for FileSessionLoader {
    fn load_config(&mut self) -> Result<MapChooserConfig> {
        let path = self.config_path();
        if !path.exists() {
            log::info!("No {} in {}, using defaults", CONFIG_FILE, self.dir.display());
            return Ok(MapChooserConfig::default());
        }
        config_file::load_config(&path).with_context(|| format!("loading {}", path.display()))
    }

    fn load_map_pool(&mut self) -> Result<MapPool> {
        let path = self.maps_path();
        map_list::load_map_list(&path).with_context(|| format!("loading {}", path.display()))
    }
}

// Map list loading
//
// Reads `maps.txt`: one map per line, `ws:` marks hosted content.

use mapchooser_core::MapPool;
use std::fs;
use std::path::Path;

use crate::error::AdapterError;

/// Read the map list at `path`.
pub fn load_map_list<P: AsRef<Path>>(path: P) -> Result<MapPool, AdapterError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| AdapterError::io(path, e))?;
    let pool = MapPool::from_lines(&content);
    log::info!(
        "Loaded {} map(s) from {}: {}",
        pool.len(),
        path.display(),
        pool.maps()
            .iter()
            .map(|map| map.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(pool)
}

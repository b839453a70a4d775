// Config file loading
//
// Reads `config.json` into a validated MapChooserConfig.

use mapchooser_core::MapChooserConfig;
use std::fs;
use std::path::Path;

use crate::error::AdapterError;

/// Parse settings from a JSON document. Missing fields take their defaults.
pub fn parse_config(json: &str) -> Result<MapChooserConfig, AdapterError> {
    let config: MapChooserConfig =
        serde_json::from_str(json).map_err(|e| AdapterError::json("map chooser config", e))?;
    config.validate()?;
    Ok(config)
}

/// Read and validate the settings file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MapChooserConfig, AdapterError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| AdapterError::io(path, e))?;
    parse_config(&content)
}

/// Write `config` as pretty-printed JSON, e.g. to seed a fresh install.
pub fn write_config<P: AsRef<Path>>(
    path: P,
    config: &MapChooserConfig,
) -> Result<(), AdapterError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| AdapterError::json("map chooser config", e))?;
    fs::write(path, json).map_err(|e| AdapterError::io(path, e))
}

// Map Chooser Adapter
//
// This crate implements the file-backed collaborators the map chooser
// controller needs on a real server, including:
// - Loading and validating `config.json`
// - Parsing the `maps.txt` map list
// - A directory-backed SessionLoader that re-reads both every map
// - A JSON localization catalog for chat output

pub mod config_file;
pub mod error;
pub mod localization;
pub mod map_list;
pub mod session_loader;

pub use config_file::{load_config, parse_config, write_config};
pub use error::AdapterError;
pub use localization::Localizer;
pub use map_list::load_map_list;
pub use session_loader::{FileSessionLoader, CONFIG_FILE, MAPS_FILE};

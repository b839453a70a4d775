// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Session configuration
//!
//! This module holds the per-session settings and the loader seam that
//! re-reads them, together with the map list, every time a map starts.

mod loader;
mod settings;

pub use loader::SessionLoader;
pub use settings::MapChooserConfig;

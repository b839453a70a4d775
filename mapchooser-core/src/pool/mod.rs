// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Candidate maps and play history
//!
//! This module provides the session's map list and the bounded record of
//! recently played maps that keeps repeats off the ballot.

mod candidate_pool;
mod history;

pub use candidate_pool::{EligibilityRules, MapPool};
pub use history::HistoryRing;

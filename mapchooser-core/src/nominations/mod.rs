// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Player nominations
//!
//! Each player may put one map forward for the next ballot.

mod nomination_table;

pub use nomination_table::{MapStatus, NominationOutcome, NominationTable};

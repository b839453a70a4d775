// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Vote sessions
//!
//! This module provides:
//! - Ballot construction from nominations and the eligible pool
//! - The open ballot itself, with live vote changes and tie-breaking

mod ballot;
mod vote_session;

pub use ballot::{build_options, BallotRequest};
pub use vote_session::{BallotOutcome, VoteSession};

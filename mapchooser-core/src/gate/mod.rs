// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

//! Early-vote gate
//!
//! Collects player requests for an early vote and decides when enough of them
//! arrived. Timing (the unlock delay) is driven by the sequencer.

mod early_vote_gate;

pub use early_vote_gate::{EarlyVoteGate, GateRequest};

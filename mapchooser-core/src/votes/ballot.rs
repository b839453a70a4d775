// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{MapId, VoteOption};

/// Inputs for building the option list of a new vote.
#[derive(Clone, Debug)]
pub struct BallotRequest<'a> {
    /// The vote was started by the early-vote gate
    pub early: bool,

    /// Number of map options wanted
    pub include_count: usize,

    /// Offer "Don't Change" if this is an early vote
    pub offer_dont_change: bool,

    /// Offer "Extend" if this is a scheduled vote
    pub offer_extend: bool,

    /// Current nominations, in nomination order
    pub nominated: &'a [MapId],

    /// Filler candidates, already stripped of nominated maps
    pub eligible: &'a [MapId],
}

/// Build the ordered option list for a vote.
///
/// Layout: "Don't Change" (early votes only), then the maps in shuffled
/// order, then "Extend" (scheduled votes only). Maps come from the
/// nominations first (a random subset when there are too many) and are
/// topped up by sampling the eligible set without replacement.
pub fn build_options<R: Rng + ?Sized>(request: &BallotRequest<'_>, rng: &mut R) -> Vec<VoteOption> {
    let mut maps: Vec<MapId> = if request.nominated.len() > request.include_count {
        request
            .nominated
            .choose_multiple(rng, request.include_count)
            .cloned()
            .collect()
    } else {
        request.nominated.to_vec()
    };

    let wanted = request.include_count.saturating_sub(maps.len());
    let fillers: Vec<MapId> = request
        .eligible
        .iter()
        .filter(|map| !maps.contains(map))
        .cloned()
        .collect();
    maps.extend(fillers.choose_multiple(rng, wanted).cloned());
    maps.shuffle(rng);

    let mut options = Vec::with_capacity(maps.len() + 2);
    if request.early && request.offer_dont_change {
        options.push(VoteOption::DontChange);
    }
    options.extend(maps.into_iter().map(VoteOption::Map));
    if !request.early && request.offer_extend {
        options.push(VoteOption::Extend);
    }
    options
}

// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use mapchooser_traits::PlayerId;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::MapChooserError;
use crate::types::VoteOption;

/// What a ballot did to the tallies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallotOutcome {
    /// The player's first ballot in this vote
    Cast,

    /// The player moved their ballot to another option
    Changed { from: usize, to: usize },

    /// The player re-picked the option they already had
    Unchanged,
}

/// Live count of one option.
///
/// `milestones[k]` is the ballot sequence number at which the count reached
/// `k + 1`. A decrement drops the latest milestone, so `milestones.last()`
/// is always the moment the option reached its current count.
#[derive(Clone, Debug, Default)]
struct Tally {
    count: usize,
    milestones: Vec<u64>,
}

impl Tally {
    fn increment(&mut self, sequence: u64) {
        self.count += 1;
        self.milestones.push(sequence);
    }

    fn decrement(&mut self) {
        if self.count > 0 {
            self.count -= 1;
            self.milestones.pop();
        }
    }

    fn reached_at(&self) -> u64 {
        self.milestones.last().copied().unwrap_or(u64::MAX)
    }
}

/// An open ballot.
///
/// Invariant: the tallies always sum to the number of players holding a
/// ballot.
#[derive(Clone, Debug)]
pub struct VoteSession {
    /// Options, in menu order
    options: Vec<VoteOption>,

    /// One tally per option, same order
    tallies: Vec<Tally>,

    /// Player → index of their current choice
    ballots: HashMap<PlayerId, usize>,

    /// Started by the early-vote gate rather than the countdown
    was_early_vote: bool,

    /// Monotonic counter stamped on every tally increment
    sequence: u64,

    /// Game time at which the vote closes
    deadline: Duration,
}

impl VoteSession {
    /// Open a vote over `options` that closes at `deadline`.
    pub fn new(options: Vec<VoteOption>, was_early_vote: bool, deadline: Duration) -> Self {
        let tallies = vec![Tally::default(); options.len()];
        Self {
            options,
            tallies,
            ballots: HashMap::new(),
            was_early_vote,
            sequence: 0,
            deadline,
        }
    }

    /// Options, in menu order.
    pub fn options(&self) -> &[VoteOption] {
        &self.options
    }

    /// Whether the gate started this vote.
    pub fn was_early_vote(&self) -> bool {
        self.was_early_vote
    }

    /// Game time at which the vote closes.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Record `player`'s choice of option `index`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`MapChooserError::UnknownOption`] if `index` is out of range.
    pub fn cast(
        &mut self,
        player: PlayerId,
        index: usize,
    ) -> Result<BallotOutcome, MapChooserError> {
        if index >= self.options.len() {
            return Err(MapChooserError::UnknownOption(index));
        }

        let previous = self.ballots.insert(player, index);
        match previous {
            Some(from) if from == index => Ok(BallotOutcome::Unchanged),
            Some(from) => {
                self.tallies[from].decrement();
                self.bump(index);
                Ok(BallotOutcome::Changed { from, to: index })
            }
            None => {
                self.bump(index);
                Ok(BallotOutcome::Cast)
            }
        }
    }

    fn bump(&mut self, index: usize) {
        self.sequence += 1;
        self.tallies[index].increment(self.sequence);
    }

    /// The option `player` currently backs.
    pub fn ballot_of(&self, player: PlayerId) -> Option<&VoteOption> {
        self.ballots.get(&player).map(|index| &self.options[*index])
    }

    /// Number of players holding a ballot.
    pub fn total_ballots(&self) -> usize {
        self.ballots.len()
    }

    /// Current counts, in menu order.
    pub fn tally(&self) -> Vec<(&VoteOption, usize)> {
        self.options
            .iter()
            .zip(self.tallies.iter().map(|tally| tally.count))
            .collect()
    }

    /// The winning option, or `None` if nobody voted.
    ///
    /// Highest count wins; among equal counts, the option that reached the
    /// count first wins.
    pub fn winner(&self) -> Option<&VoteOption> {
        self.tallies
            .iter()
            .enumerate()
            .filter(|(_, tally)| tally.count > 0)
            .min_by(|(_, a), (_, b)| {
                b.count
                    .cmp(&a.count)
                    .then_with(|| a.reached_at().cmp(&b.reached_at()))
            })
            .map(|(index, _)| &self.options[index])
    }
}

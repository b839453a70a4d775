// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use mapchooser_traits::{
    Host, Menu, MenuEntry, MenuKind, Message, PlayerId, RoundEndReason, TimerId, TimerTask,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Duration;

use super::{Phase, Resolution, TimerSlots};
use crate::commands::{format_time_left, PlayerCommand};
use crate::config::{MapChooserConfig, SessionLoader};
use crate::error::NominationError;
use crate::gate::{EarlyVoteGate, GateRequest};
use crate::nominations::{MapStatus, NominationTable};
use crate::pool::{EligibilityRules, HistoryRing, MapPool};
use crate::types::{
    minutes, MapId, VoteOption, HOT_ATTACH_DELAY, RESTART_DELAY_MARGIN, ROUND_END_DELAY,
    SWITCH_GRACE,
};
use crate::votes::{build_options, BallotOutcome, BallotRequest, VoteSession};

/// State that lives for one map session and is rebuilt at session start.
#[derive(Clone, Debug, Default)]
struct SessionState {
    /// Map being played
    current_map: String,

    /// Committed winner, if any
    next_map: Option<MapId>,

    /// Extensions granted this session
    extends_used: u32,

    /// Game time at which the session was primed
    started_at: Duration,

    /// Set by the first round start (or hot attach) of the session
    round_primed: bool,

    /// Set once the level change was issued
    switch_issued: bool,

    /// Announce the gate reopening when it next unlocks
    announce_unlock: bool,

    /// Outcome of the last resolved vote
    last_resolution: Option<Resolution>,
}

impl SessionState {
    fn new(current_map: &str) -> Self {
        Self {
            current_map: current_map.to_string(),
            ..Self::default()
        }
    }
}

/// The map chooser controller.
///
/// Owns every piece of per-session state and reacts to host events. All
/// methods run to completion on the host's main loop; timers come back
/// through [`MapChooser::on_timer`].
///
/// # Type Parameters
///
/// * `H`: the embedding process, implementing [`Host`]
/// * `L`: where settings and the map list come from, implementing [`SessionLoader`]
pub struct MapChooser<H: Host, L: SessionLoader> {
    /// The embedding game server
    host: H,

    /// Settings and map list source
    loader: L,

    /// Settings for the current session
    config: MapChooserConfig,

    /// Maps of the current session
    pool: MapPool,

    /// Recently played maps, kept across sessions
    history: HistoryRing,

    /// Player nominations
    nominations: NominationTable,

    /// Early-vote requests
    gate: EarlyVoteGate,

    /// The open ballot, if any
    vote: Option<VoteSession>,

    /// Pending timer handles
    timers: TimerSlots,

    /// Sequencer state
    phase: Phase,

    /// Per-session counters and latches
    session: SessionState,

    /// Randomness for ballot building and no-quorum picks
    rng: StdRng,
}

impl<H: Host, L: SessionLoader> MapChooser<H, L> {
    /// Create a controller with an entropy-seeded random generator.
    pub fn new(host: H, loader: L) -> Self {
        Self::with_rng(host, loader, StdRng::from_entropy())
    }

    /// Create a controller with a caller-supplied random generator.
    pub fn with_rng(host: H, loader: L, rng: StdRng) -> Self {
        Self {
            host,
            loader,
            config: MapChooserConfig::default(),
            pool: MapPool::default(),
            history: HistoryRing::new(),
            nominations: NominationTable::new(),
            gate: EarlyVoteGate::new(),
            vote: None,
            timers: TimerSlots::new(),
            phase: Phase::Idle,
            session: SessionState::default(),
            rng,
        }
    }

    /// Get the host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Get a mutable reference to the host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Get a mutable reference to the session loader
    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    /// Get the settings in effect
    pub fn config(&self) -> &MapChooserConfig {
        &self.config
    }

    /// Get the sequencer phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome of the last resolved vote this session
    pub fn last_resolution(&self) -> Option<Resolution> {
        self.session.last_resolution
    }

    /// The committed next map
    pub fn next_map(&self) -> Option<&MapId> {
        self.session.next_map.as_ref()
    }

    /// Extensions granted this session
    pub fn extends_used(&self) -> u32 {
        self.session.extends_used
    }

    /// Get the early-vote gate
    pub fn gate(&self) -> &EarlyVoteGate {
        &self.gate
    }

    /// Get the open ballot
    pub fn vote_session(&self) -> Option<&VoteSession> {
        self.vote.as_ref()
    }

    /// Get the nominations
    pub fn nominations(&self) -> &NominationTable {
        &self.nominations
    }

    /// Get the play history
    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    /// Get the session's map pool
    pub fn pool(&self) -> &MapPool {
        &self.pool
    }

    /// Whether `task` has a pending timer
    pub fn is_timer_armed(&self, task: TimerTask) -> bool {
        self.timers.is_armed(task)
    }

    // ------------------------------------------------------------------
    // Host lifecycle events
    // ------------------------------------------------------------------

    /// Called once when the controller is loaded.
    ///
    /// With `hot` set the controller joined a map that is already running: the
    /// session starts right away and priming waits a short delay for the host
    /// to finish initializing.
    pub fn attach(&mut self, hot: bool) {
        if !hot {
            log::info!("Map chooser attached, waiting for the first map");
            return;
        }

        let map = self.host.current_map();
        log::info!("Map chooser attached to running map {}", map);
        self.on_session_start(&map);
        self.session.round_primed = true;
        self.timers
            .arm(&mut self.host, HOT_ATTACH_DELAY, TimerTask::HotAttach);
    }

    /// A new map was loaded.
    pub fn on_session_start(&mut self, map: &str) {
        self.timers.clear(&mut self.host);

        match self.loader.load_config() {
            Ok(config) => match config.validate() {
                Ok(()) => self.config = config,
                Err(e) => log::error!("Rejected map chooser config, keeping previous: {}", e),
            },
            Err(e) => log::error!("Failed to load map chooser config, keeping previous: {:#}", e),
        }

        self.pool = match self.loader.load_map_pool() {
            Ok(pool) => pool,
            Err(e) => {
                log::error!("Failed to load map list, session runs without one: {:#}", e);
                MapPool::default()
            }
        };
        if self.pool.is_empty() {
            log::warn!("Map pool is empty for {}", map);
        }

        let evicted = self.history.trim(self.config.exclude_count);
        if !evicted.is_empty() {
            log::debug!("Evicted {} map(s) from history", evicted.len());
        }

        self.nominations.clear();
        self.gate.lock();
        self.vote = None;
        self.phase = Phase::Idle;
        self.session = SessionState::new(map);

        log::info!("Session started on {} with {} map(s) in the pool", map, self.pool.len());
    }

    /// The current map is being unloaded.
    pub fn on_session_end(&mut self) {
        let current = std::mem::take(&mut self.session.current_map);
        if !current.is_empty() {
            let played = self
                .pool
                .find(&current)
                .cloned()
                .unwrap_or_else(|| MapId::new(&current, false));
            self.history.record(played);
        }

        self.timers.clear(&mut self.host);
        self.nominations.clear();
        self.gate.lock();
        self.vote = None;
        self.pool = MapPool::default();
        self.phase = Phase::Idle;
        self.session = SessionState::default();

        log::info!("Session ended on {}", current);
    }

    /// A round started. Only the first round of a session primes it.
    pub fn on_round_start(&mut self) {
        if self.session.round_primed {
            return;
        }
        self.session.round_primed = true;
        self.prime();
    }

    /// The match ended and the host shows the scoreboard.
    pub fn on_match_end(&mut self) {
        self.timers.cancel(&mut self.host, TimerTask::SwitchMap);

        match self.host.restart_delay() {
            Some(delay) if !delay.is_zero() => {
                let delay = delay.saturating_sub(RESTART_DELAY_MARGIN);
                self.timers
                    .arm(&mut self.host, delay, TimerTask::SwitchMap);
            }
            _ => self.execute_switch(),
        }
    }

    /// A timer scheduled by this controller fired.
    pub fn on_timer(&mut self, id: TimerId, task: TimerTask) {
        if !self.timers.claim(task, id) {
            log::debug!("Ignoring stale {} ({})", task, id);
            return;
        }

        match task {
            TimerTask::GateUnlock => self.unlock_gate(),
            TimerTask::Countdown => {
                if self.phase == Phase::Gated {
                    self.start_vote(false);
                } else {
                    log::debug!("Countdown fired in phase {}, ignoring", self.phase);
                }
            }
            TimerTask::VoteDeadline => self.resolve_vote(),
            TimerTask::RoundEnd => {
                log::info!("Forcing the round to end");
                self.host
                    .terminate_round(ROUND_END_DELAY, RoundEndReason::RoundDraw);
            }
            TimerTask::SwitchMap => self.execute_switch(),
            TimerTask::HotAttach => self.prime(),
        }
    }

    /// A player typed something. Returns whether it was a map chooser command.
    pub fn on_command(&mut self, player: PlayerId, text: &str) -> bool {
        let command = match PlayerCommand::parse(text) {
            Some(command) => command,
            None => return false,
        };

        match command {
            PlayerCommand::Rtv => self.request_early_vote(player),
            PlayerCommand::Unrtv => self.retract_early_vote(player),
            PlayerCommand::Nominate(query) => self.nominate(player, query.as_deref()),
            PlayerCommand::NextMap => {
                let reply = match &self.session.next_map {
                    Some(map) => Message::NextMap {
                        map: map.name().to_string(),
                    },
                    None => Message::NextMapUnknown,
                };
                self.host.reply(player, &reply);
            }
            PlayerCommand::TimeLeft => {
                let time = format_time_left(self.time_remaining());
                self.host.reply(player, &Message::TimeLeft { time });
            }
        }
        true
    }

    /// A player picked entry `index` of a menu.
    pub fn on_menu_choice(&mut self, player: PlayerId, kind: MenuKind, index: usize) {
        match kind {
            MenuKind::Nominate => match self.pool.maps().get(index).cloned() {
                Some(map) => self.nominate_map(player, map),
                None => log::warn!("Nomination menu pick {} out of range", index),
            },
            MenuKind::MapVote => self.vote(player, index),
        }
    }

    // ------------------------------------------------------------------
    // Early vote
    // ------------------------------------------------------------------

    /// Count `player`'s request for an early vote.
    pub fn request_early_vote(&mut self, player: PlayerId) {
        if !self.config.allow_rtv {
            self.host.reply(player, &Message::RtvNotAvailable);
            return;
        }
        if self.vote.is_some() || self.phase == Phase::Resolved(Resolution::SwitchNow) {
            log::debug!("Early-vote request from {} ignored in phase {}", player, self.phase);
            return;
        }

        let required =
            EarlyVoteGate::required_for(self.eligible_player_count(), self.config.rtv_percent);
        match self.gate.request(player, required) {
            GateRequest::Locked => self.host.reply(player, &Message::RtvNotAvailable),
            GateRequest::Active | GateRequest::Duplicate => {
                log::debug!("Early-vote request from {} not counted", player);
            }
            GateRequest::Counted { count, required } => {
                let name = self.player_name(player);
                self.host.broadcast(&Message::RtvProgress {
                    player: name,
                    count,
                    required,
                });
            }
            GateRequest::ThresholdMet { count, required } => {
                let name = self.player_name(player);
                self.host.broadcast(&Message::RtvProgress {
                    player: name,
                    count,
                    required,
                });
                self.trigger_early_vote();
            }
        }
    }

    /// Withdraw `player`'s early-vote request.
    pub fn retract_early_vote(&mut self, player: PlayerId) {
        if let Some(count) = self.gate.retract(player) {
            let required =
                EarlyVoteGate::required_for(self.eligible_player_count(), self.config.rtv_percent);
            let name = self.player_name(player);
            self.host.broadcast(&Message::RtvRetracted {
                player: name,
                count,
                required,
            });
        }
    }

    fn trigger_early_vote(&mut self) {
        self.timers.cancel(&mut self.host, TimerTask::Countdown);

        match self.session.next_map.clone() {
            Some(map) => {
                log::info!("Early vote passed with {} already chosen, switching", map);
                self.host.broadcast(&Message::RtvSwitching {
                    map: map.name().to_string(),
                });
                self.timers.cancel(&mut self.host, TimerTask::RoundEnd);
                self.phase = Phase::Resolved(Resolution::SwitchNow);
                self.session.last_resolution = Some(Resolution::SwitchNow);
                self.timers
                    .arm(&mut self.host, SWITCH_GRACE, TimerTask::SwitchMap);
            }
            None => {
                self.host.broadcast(&Message::RtvVoteStarting);
                self.start_vote(true);
            }
        }
    }

    fn arm_gate(&mut self, announce: bool) {
        self.gate.lock();
        self.session.announce_unlock = announce;

        if self.config.gate_unlocks_immediately() {
            self.timers.cancel(&mut self.host, TimerTask::GateUnlock);
            self.unlock_gate();
        } else {
            let delay = self.config.rtv_delay();
            self.timers
                .arm(&mut self.host, delay, TimerTask::GateUnlock);
        }
    }

    fn unlock_gate(&mut self) {
        self.gate.unlock();
        log::debug!("Early-vote gate unlocked");
        if std::mem::take(&mut self.session.announce_unlock) {
            self.host.broadcast(&Message::RtvReopened);
        }
    }

    // ------------------------------------------------------------------
    // Nominations
    // ------------------------------------------------------------------

    /// Nominate by (partial) name, or open the menu when no name is given.
    pub fn nominate(&mut self, player: PlayerId, query: Option<&str>) {
        let query = match query {
            Some(query) => query,
            None => {
                self.open_nomination_menu(player);
                return;
            }
        };

        match self.resolve_query(query) {
            Ok(map) => self.nominate_map(player, map),
            Err(e) => self.host.reply(player, &e.to_message()),
        }
    }

    fn resolve_query(&self, query: &str) -> Result<MapId, NominationError> {
        if self.vote.is_some() {
            return Err(NominationError::VoteInProgress);
        }
        let found = self.pool.search(query);
        match found.as_slice() {
            [] => Err(NominationError::NoMatch(query.to_string())),
            [map] => Ok((*map).clone()),
            _ => Err(NominationError::Ambiguous(query.to_string())),
        }
    }

    fn nominate_map(&mut self, player: PlayerId, map: MapId) {
        if self.vote.is_some() {
            self.host.reply(player, &NominationError::VoteInProgress.to_message());
            return;
        }

        match self.nominations.nominate(
            player,
            map.clone(),
            &self.session.current_map,
            &self.history,
        ) {
            Ok(outcome) => {
                log::debug!("{} nominated {} ({:?})", player, map, outcome);
                let name = self.player_name(player);
                self.host.broadcast(&Message::NominationConfirmed {
                    player: name,
                    map: map.name().to_string(),
                });
            }
            Err(e) => {
                log::debug!("Nomination from {} rejected: {}", player, e);
                self.host.reply(player, &e.to_message());
            }
        }
    }

    /// Show `player` every pool map, with unavailable ones disabled.
    pub fn open_nomination_menu(&mut self, player: PlayerId) {
        if self.vote.is_some() {
            self.host.reply(player, &Message::NominationsClosed);
            return;
        }

        let entries = self
            .pool
            .maps()
            .iter()
            .map(|map| {
                let name = map.name().to_string();
                match self
                    .nominations
                    .status(map, &self.session.current_map, &self.history)
                {
                    MapStatus::Available => MenuEntry::enabled(Message::Label(name)),
                    MapStatus::CurrentMap => {
                        MenuEntry::disabled(Message::NominateCurrentMap { map: name })
                    }
                    MapStatus::RecentlyPlayed => {
                        MenuEntry::disabled(Message::NominateRecent { map: name })
                    }
                    MapStatus::AlreadyNominated => {
                        MenuEntry::disabled(Message::NominateNominated { map: name })
                    }
                }
            })
            .collect();

        let menu = Menu {
            kind: MenuKind::Nominate,
            title: Message::NominateHeader,
            entries,
        };
        self.host.show_menu(player, &menu);
    }

    // ------------------------------------------------------------------
    // Voting
    // ------------------------------------------------------------------

    /// Open a ballot and show it to every human player.
    pub fn start_vote(&mut self, early: bool) {
        if self.vote.is_some() {
            log::warn!("A vote is already open, not starting another");
            return;
        }

        self.timers.cancel(&mut self.host, TimerTask::Countdown);
        self.gate.clear_requests();

        let nominated = self.nominations.maps();
        let eligible = self.eligible_maps(&nominated);
        let request = BallotRequest {
            early,
            include_count: self.config.include_count,
            offer_dont_change: self.config.dont_change_rtv,
            offer_extend: self.config.allow_extend
                && self.session.extends_used < self.config.extend_limit,
            nominated: &nominated,
            eligible: &eligible,
        };
        let options = build_options(&request, &mut self.rng);
        if options.is_empty() {
            log::warn!("Opening a vote with no options");
        }

        let duration = self.config.capped_vote_duration();
        let deadline = self.host.current_time() + duration;
        log::info!(
            "Starting {} vote with {} option(s) for {:?}",
            if early { "early" } else { "scheduled" },
            options.len(),
            duration
        );

        let menu = Menu {
            kind: MenuKind::MapVote,
            title: Message::VoteHeader,
            entries: options
                .iter()
                .map(|option| MenuEntry::enabled(option.menu_label()))
                .collect(),
        };
        self.vote = Some(VoteSession::new(options, early, deadline));
        self.phase = Phase::VoteActive;

        for player in self.host.players() {
            if player.is_human() {
                self.host.show_menu(player.id, &menu);
            }
        }
        self.timers
            .arm(&mut self.host, duration, TimerTask::VoteDeadline);
    }

    /// Record `player`'s ballot for option `index`.
    pub fn vote(&mut self, player: PlayerId, index: usize) {
        let vote = match self.vote.as_mut() {
            Some(vote) => vote,
            None => {
                self.host.reply(player, &Message::NoVoteActive);
                return;
            }
        };

        match vote.cast(player, index) {
            Ok(BallotOutcome::Unchanged) => {}
            Ok(_) => {
                let option = vote.options()[index].label();
                let name = self.player_name(player);
                self.host.broadcast(&Message::VoteCast {
                    player: name,
                    option,
                });
            }
            Err(e) => log::warn!("Ballot from {} rejected: {}", player, e),
        }
    }

    /// Close the ballot and act on the winner.
    pub fn resolve_vote(&mut self) {
        let vote = match self.vote.take() {
            Some(vote) => vote,
            None => {
                log::debug!("No vote to resolve");
                return;
            }
        };
        self.timers.cancel(&mut self.host, TimerTask::VoteDeadline);
        self.nominations.clear();

        let early = vote.was_early_vote();
        log::info!(
            "Vote closed with {} ballot(s): {:?}",
            vote.total_ballots(),
            vote.tally()
                .iter()
                .map(|(option, count)| format!("{}={}", option, count))
                .collect::<Vec<_>>()
        );

        match vote.winner().cloned() {
            None => self.resolve_no_quorum(early),
            Some(VoteOption::DontChange) => {
                self.host.broadcast(&Message::MapNotChanged);
                self.reopen();
            }
            Some(VoteOption::Extend) => self.extend(),
            Some(VoteOption::Map(map)) => {
                self.commit_next_map(map);
                if early {
                    self.finish(Resolution::SwitchNow);
                    self.timers
                        .arm(&mut self.host, SWITCH_GRACE, TimerTask::SwitchMap);
                } else {
                    self.finish(Resolution::SwitchLater);
                    self.enforce_round_end();
                }
            }
        }
    }

    fn resolve_no_quorum(&mut self, early: bool) {
        if early {
            log::info!("Nobody voted in the early vote, reopening");
            self.reopen();
            return;
        }

        let eligible = self.eligible_maps(&[]);
        match eligible.choose(&mut self.rng).cloned() {
            Some(map) => {
                log::info!("Nobody voted, picked {} at random", map);
                self.commit_next_map(map);
                self.enforce_round_end();
            }
            None => log::warn!("Nobody voted and no map is eligible, next map stays unset"),
        }
        self.finish(Resolution::SwitchLater);
    }

    fn commit_next_map(&mut self, map: MapId) {
        self.host.broadcast(&Message::NextMapChosen {
            map: map.name().to_string(),
        });
        self.session.next_map = Some(map);
    }

    fn finish(&mut self, resolution: Resolution) {
        self.phase = Phase::Resolved(resolution);
        self.session.last_resolution = Some(resolution);
    }

    fn enforce_round_end(&mut self) {
        if self.config.enforce_time_limit {
            let delay = self.config.round_end_delay();
            self.timers
                .arm(&mut self.host, delay, TimerTask::RoundEnd);
        }
    }

    fn reopen(&mut self) {
        self.session.last_resolution = Some(Resolution::Reopened);
        self.phase = Phase::Gated;
        self.arm_gate(true);
        self.rearm_countdown();
    }

    fn extend(&mut self) {
        let step = self.config.extend_step_minutes;
        let extended = self
            .host
            .time_limit()
            .and_then(|limit| self.host.set_time_limit(limit + step));

        self.session.last_resolution = Some(Resolution::Extended);
        self.phase = Phase::Gated;
        match extended {
            Ok(()) => {
                self.session.extends_used += 1;
                log::info!(
                    "Extended the map by {} minute(s) ({}/{})",
                    step,
                    self.session.extends_used,
                    self.config.extend_limit
                );
                self.host.broadcast(&Message::MapExtended { minutes: step });
                self.arm_gate(true);
                self.rearm_countdown();
            }
            Err(e) => {
                log::error!("Failed to extend the time limit: {}", e);
                self.arm_gate(true);
            }
        }
    }

    // ------------------------------------------------------------------
    // Timing
    // ------------------------------------------------------------------

    fn prime(&mut self) {
        let now = self.host.current_time();
        self.session.started_at = now;

        let limit = match self.host.time_limit() {
            Ok(limit) => limit,
            Err(e) => {
                log::error!("Cannot read the time limit, map votes disabled this session: {}", e);
                return;
            }
        };

        self.phase = Phase::Gated;
        self.arm_gate(false);
        if limit > 0.0 {
            let delay = minutes(limit).saturating_sub(self.config.vote_start_lead());
            log::info!("Map vote scheduled in {:?}", delay);
            self.timers
                .arm(&mut self.host, delay, TimerTask::Countdown);
        } else {
            log::info!("No time limit, only early votes are possible");
        }
    }

    fn rearm_countdown(&mut self) {
        match self.host.time_limit() {
            Ok(limit) if limit > 0.0 => {
                let ends_at = self.session.started_at.saturating_add(minutes(limit));
                let vote_at = ends_at.saturating_sub(self.config.vote_start_lead());
                let delay = vote_at.saturating_sub(self.host.current_time());
                self.timers
                    .arm(&mut self.host, delay, TimerTask::Countdown);
            }
            Ok(_) => {
                self.timers.cancel(&mut self.host, TimerTask::Countdown);
            }
            Err(e) => log::warn!("Cannot read the time limit, countdown not re-armed: {}", e),
        }
    }

    /// Time until the time limit, or `None` if the session is not primed or
    /// has no time limit.
    pub fn time_remaining(&self) -> Option<Duration> {
        if self.phase == Phase::Idle {
            return None;
        }
        let limit = self.host.time_limit().ok().filter(|limit| *limit > 0.0)?;
        let ends_at = self.session.started_at.saturating_add(minutes(limit));
        ends_at
            .checked_sub(self.host.current_time())
            .filter(|remaining| !remaining.is_zero())
    }

    fn execute_switch(&mut self) {
        if self.session.switch_issued {
            log::debug!("Level change already issued");
            return;
        }

        match &self.session.next_map {
            Some(map) => {
                let change = map.level_change();
                log::info!("Changing level: {}", change.command());
                self.host.change_level(&change);
                self.session.switch_issued = true;
            }
            None => log::info!("No next map chosen, leaving the level change to the host"),
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn eligible_maps(&self, nominated: &[MapId]) -> Vec<MapId> {
        let history = (self.config.exclude_count > 0).then_some(&self.history);
        self.pool.eligible(&EligibilityRules {
            current_map: &self.session.current_map,
            include_current: self.config.include_current_map,
            history,
            nominated,
        })
    }

    fn eligible_player_count(&self) -> usize {
        self.host
            .players()
            .iter()
            .filter(|player| player.is_human())
            .filter(|player| !self.config.ignore_spectators || player.team.is_playing())
            .count()
    }

    fn player_name(&self, player: PlayerId) -> String {
        self.host
            .players()
            .into_iter()
            .find(|info| info.id == player)
            .map(|info| info.name)
            .unwrap_or_else(|| player.to_string())
    }
}

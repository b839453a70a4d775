// Copyright (c) Aptos Foundation
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::time::Duration;

use mapchooser_traits::{
    GameServer, HostError, LevelChange, Menu, Message, Messenger, PlayerId, PlayerInfo,
    RoundEndReason, Scheduler, TimerId, TimerTask,
};

/// A mock game server for testing.
///
/// Time only moves when a test advances it. Every outbound call is recorded
/// so tests can assert on what the controller asked for.
#[derive(Clone, Debug)]
pub struct MockHost {
    /// Loaded map
    pub map: String,

    /// Virtual clock
    pub now: Duration,

    /// Time limit in minutes; `None` makes reads fail
    pub time_limit: Option<f32>,

    /// Refuse writes to the time limit
    pub reject_time_limit_writes: bool,

    /// Restart delay reported at match end
    pub restart_delay: Option<Duration>,

    /// Roster
    pub players: Vec<PlayerInfo>,

    /// Messages sent to everyone
    pub broadcasts: Vec<Message>,

    /// Messages sent to single players
    pub replies: Vec<(PlayerId, Message)>,

    /// Menus opened
    pub menus: Vec<(PlayerId, Menu)>,

    /// Level changes issued
    pub level_changes: Vec<LevelChange>,

    /// Round terminations requested
    pub round_ends: Vec<(Duration, RoundEndReason)>,

    /// Pending timers: handle → (due time, task)
    timers: BTreeMap<TimerId, (Duration, TimerTask)>,

    /// Next handle to hand out
    next_timer: u64,
}

impl MockHost {
    /// Create a host on `map` with a time limit of `time_limit` minutes.
    pub fn new(map: &str, time_limit: f32) -> Self {
        Self {
            map: map.to_string(),
            now: Duration::ZERO,
            time_limit: Some(time_limit),
            reject_time_limit_writes: false,
            restart_delay: None,
            players: Vec::new(),
            broadcasts: Vec::new(),
            replies: Vec::new(),
            menus: Vec::new(),
            level_changes: Vec::new(),
            round_ends: Vec::new(),
            timers: BTreeMap::new(),
            next_timer: 0,
        }
    }

    /// Set the roster.
    pub fn with_players(mut self, players: Vec<PlayerInfo>) -> Self {
        self.players = players;
        self
    }

    /// Set the restart delay.
    pub fn with_restart_delay(mut self, delay: Duration) -> Self {
        self.restart_delay = Some(delay);
        self
    }

    /// The pending timer for `task`, with the time left until it fires.
    pub fn pending(&self, task: TimerTask) -> Option<(TimerId, Duration)> {
        self.timers
            .iter()
            .find(|(_, (_, pending))| *pending == task)
            .map(|(id, (due, _))| (*id, due.saturating_sub(self.now)))
    }

    /// Number of pending timers.
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Remove and return the earliest timer due at or before `until`.
    ///
    /// Timers due at the same instant come out in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, Duration, TimerTask)> {
        let (id, due, task) = self
            .timers
            .iter()
            .filter(|(_, (due, _))| *due <= until)
            .min_by_key(|(id, (due, _))| (*due, **id))
            .map(|(id, (due, task))| (*id, *due, *task))?;
        self.timers.remove(&id);
        Some((id, due, task))
    }

    /// Remove and return the pending timer for `task`.
    pub fn take_timer(&mut self, task: TimerTask) -> Option<(TimerId, Duration)> {
        let (id, _) = self.pending(task)?;
        let (due, _) = self.timers.remove(&id)?;
        Some((id, due))
    }

    /// Replies sent to `player`.
    pub fn replies_to(&self, player: PlayerId) -> Vec<&Message> {
        self.replies
            .iter()
            .filter(|(to, _)| *to == player)
            .map(|(_, message)| message)
            .collect()
    }

    /// Forget every recorded message and menu.
    pub fn clear_messages(&mut self) {
        self.broadcasts.clear();
        self.replies.clear();
        self.menus.clear();
    }
}

impl GameServer for MockHost {
    fn current_map(&self) -> String {
        self.map.clone()
    }

    fn current_time(&self) -> Duration {
        self.now
    }

    fn time_limit(&self) -> Result<f32, HostError> {
        self.time_limit.ok_or_else(|| HostError::missing("mp_timelimit"))
    }

    fn set_time_limit(&mut self, minutes: f32) -> Result<(), HostError> {
        if self.reject_time_limit_writes || self.time_limit.is_none() {
            return Err(HostError::InvalidParameter {
                name: "mp_timelimit".to_string(),
                value: minutes.to_string(),
            });
        }
        self.time_limit = Some(minutes);
        Ok(())
    }

    fn restart_delay(&self) -> Option<Duration> {
        self.restart_delay
    }

    fn players(&self) -> Vec<PlayerInfo> {
        self.players.clone()
    }

    fn terminate_round(&mut self, delay: Duration, reason: RoundEndReason) {
        self.round_ends.push((delay, reason));
    }

    fn change_level(&mut self, change: &LevelChange) {
        self.map = change.map.clone();
        self.level_changes.push(change.clone());
    }
}

impl Scheduler for MockHost {
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        self.timers.insert(id, (self.now + delay, task));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.remove(&id);
    }
}

impl Messenger for MockHost {
    fn broadcast(&mut self, message: &Message) {
        self.broadcasts.push(message.clone());
    }

    fn reply(&mut self, player: PlayerId, message: &Message) {
        self.replies.push((player, message.clone()));
    }

    fn show_menu(&mut self, player: PlayerId, menu: &Menu) {
        self.menus.push((player, menu.clone()));
    }
}

// Console game host
//
// A stand-in for a dedicated server: keeps the roster and the round time
// limit in memory, delivers timers through a tokio-util DelayQueue and
// prints localized chat and menus to stdout.

use mapchooser_adapter::Localizer;
use mapchooser_traits::{
    GameServer, HostError, LevelChange, Menu, MenuKind, Message, Messenger, PlayerId,
    PlayerInfo, RoundEndReason, Scheduler, TimerId, TimerTask,
};
use std::collections::{BTreeMap, HashMap};
use std::future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::time::{delay_queue, DelayQueue};

/// Something the host's event loop has to act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// A controller timer expired
    Timer(TimerId, TimerTask),

    /// A round the controller asked to terminate is over
    RoundOver,
}

/// In-memory game server driven from the operator console.
pub struct ConsoleHost {
    /// Loaded map
    map: String,

    /// Clock origin
    clock: Instant,

    /// Game time at which the current map was loaded
    map_loaded_at: Duration,

    /// Round time limit in minutes
    time_limit: f32,

    /// Delay between match end and the automatic restart
    restart_delay: Option<Duration>,

    /// Connected players
    players: BTreeMap<PlayerId, PlayerInfo>,

    /// Menu currently open for each player
    menus: HashMap<PlayerId, Menu>,

    /// Pending timers and round terminations
    queue: DelayQueue<HostEvent>,

    /// Queue keys of pending controller timers
    keys: HashMap<TimerId, delay_queue::Key>,

    /// Next timer handle
    next_timer: u64,

    /// Level change requested by the controller, applied by the event loop
    pending_change: Option<LevelChange>,

    /// Renders chat output
    localizer: Localizer,
}

impl ConsoleHost {
    /// Create a host on `map`.
    pub fn new(
        map: &str,
        time_limit: f32,
        restart_delay: Option<Duration>,
        localizer: Localizer,
    ) -> Self {
        Self {
            map: map.to_string(),
            clock: Instant::now(),
            map_loaded_at: Duration::ZERO,
            time_limit,
            restart_delay,
            players: BTreeMap::new(),
            menus: HashMap::new(),
            queue: DelayQueue::new(),
            keys: HashMap::new(),
            next_timer: 0,
            pending_change: None,
            localizer,
        }
    }

    /// Add or replace a player.
    pub fn join(&mut self, player: PlayerInfo) {
        log::info!("{} joined as {}", player.name, player.id);
        self.players.insert(player.id, player);
    }

    /// Remove a player. Returns whether they were connected.
    pub fn leave(&mut self, id: PlayerId) -> bool {
        self.menus.remove(&id);
        match self.players.remove(&id) {
            Some(player) => {
                log::info!("{} left", player.name);
                true
            }
            None => false,
        }
    }

    /// Display name of a connected player.
    pub fn player_name(&self, id: PlayerId) -> Option<&str> {
        self.players.get(&id).map(|player| player.name.as_str())
    }

    /// Resolve a 1-based pick in the player's open menu into the menu kind and
    /// the entry index. The menu closes on any pick; disabled entries resolve
    /// to `None`.
    pub fn pick(&mut self, id: PlayerId, entry: usize) -> Option<(MenuKind, usize)> {
        let menu = self.menus.remove(&id)?;
        let index = entry.checked_sub(1)?;
        match menu.entries.get(index) {
            Some(item) if item.enabled => Some((menu.kind, index)),
            Some(_) => {
                log::debug!("{} picked a disabled entry", id);
                None
            }
            None => None,
        }
    }

    /// Whether anything is waiting in the timer queue.
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Number of pending controller timers.
    pub fn pending_timers(&self) -> usize {
        self.keys.len()
    }

    /// Wait for the next expired timer or round termination.
    ///
    /// Only poll while [`ConsoleHost::has_pending`] holds.
    pub async fn next_event(&mut self) -> Option<HostEvent> {
        let expired = future::poll_fn(|cx| self.queue.poll_expired(cx)).await?;
        let event = expired.into_inner();
        if let HostEvent::Timer(id, _) = event {
            self.keys.remove(&id);
        }
        Some(event)
    }

    /// Queue a level change for the event loop.
    pub fn request_level_change(&mut self, change: LevelChange) {
        self.pending_change = Some(change);
    }

    /// Take the level change waiting to be applied, if any.
    pub fn take_level_change(&mut self) -> Option<LevelChange> {
        self.pending_change.take()
    }

    /// Load `change`'s map: every pending timer and open menu is dropped.
    pub fn load_map(&mut self, change: &LevelChange) {
        println!("*** {}", change.command());
        self.map = change.map.clone();
        self.map_loaded_at = self.current_time();
        self.queue.clear();
        self.keys.clear();
        self.menus.clear();
    }

    /// Whether the round time limit of the current map ran out.
    pub fn time_limit_reached(&self) -> bool {
        let elapsed = self.current_time().saturating_sub(self.map_loaded_at);
        elapsed.as_secs_f32() >= self.time_limit * 60.0
    }

    fn display_name(&self, id: PlayerId) -> String {
        self.player_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }
}

impl GameServer for ConsoleHost {
    fn current_map(&self) -> String {
        self.map.clone()
    }

    fn current_time(&self) -> Duration {
        self.clock.elapsed()
    }

    fn time_limit(&self) -> Result<f32, HostError> {
        Ok(self.time_limit)
    }

    fn set_time_limit(&mut self, minutes: f32) -> Result<(), HostError> {
        if !minutes.is_finite() || minutes < 0.0 {
            return Err(HostError::InvalidParameter {
                name: "mp_timelimit".to_string(),
                value: minutes.to_string(),
            });
        }
        log::info!("mp_timelimit {} -> {}", self.time_limit, minutes);
        self.time_limit = minutes;
        Ok(())
    }

    fn restart_delay(&self) -> Option<Duration> {
        self.restart_delay
    }

    fn players(&self) -> Vec<PlayerInfo> {
        self.players.values().cloned().collect()
    }

    fn terminate_round(&mut self, delay: Duration, reason: RoundEndReason) {
        log::info!("Terminating the round in {:?} ({})", delay, reason);
        self.queue.insert(HostEvent::RoundOver, delay);
    }

    fn change_level(&mut self, change: &LevelChange) {
        log::info!("Level change requested: {}", change.command());
        self.request_level_change(change.clone());
    }
}

impl Scheduler for ConsoleHost {
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        let key = self.queue.insert(HostEvent::Timer(id, task), delay);
        self.keys.insert(id, key);
        log::debug!("Scheduled {} ({}) in {:?}", task, id, delay);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(key) = self.keys.remove(&id) {
            self.queue.remove(&key);
            log::debug!("Cancelled {}", id);
        }
    }
}

impl Messenger for ConsoleHost {
    fn broadcast(&mut self, message: &Message) {
        println!("{}", self.localizer.chat_line(message));
    }

    fn reply(&mut self, player: PlayerId, message: &Message) {
        println!(
            "(to {}) {}",
            self.display_name(player),
            self.localizer.chat_line(message)
        );
    }

    fn show_menu(&mut self, player: PlayerId, menu: &Menu) {
        println!(
            "(menu for {}) {}",
            self.display_name(player),
            self.localizer.render(&menu.title)
        );
        for (n, entry) in menu.entries.iter().enumerate() {
            let label = self.localizer.render(&entry.label);
            if entry.enabled {
                println!("  {}. {}", n + 1, label);
            } else {
                println!("  -. {}", label);
            }
        }
        self.menus.insert(player, menu.clone());
    }
}

// Map Chooser Console Node
//
// Runs the map chooser controller against an in-memory game host driven from
// stdin. Timers are real: the end-of-map vote opens when the configured time
// limit runs low, ballots close after the vote duration and level changes
// are printed as the console command a dedicated server would execute.
//
// Usage:
//   cargo run --bin mapchooser -- --dir ./server --map de_dust2 --time-limit 20
//
// Architecture:
//   1. Parse arguments and initialize logging
//   2. Load the chat catalog (built-in English or <dir>/lang/<language>.json)
//   3. Create the console host and the directory-backed session loader
//   4. Start the first session, cold or hot-attached
//   5. Multiplex operator input, expired timers and Ctrl+C on one task

mod console;
mod console_host;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use mapchooser_adapter::{FileSessionLoader, Localizer};
use mapchooser_core::{commands::format_time_left, MapChooser, MapId};
use mapchooser_traits::{GameServer, LevelChange, PlayerId, PlayerInfo, Team};

use crate::console::{ConsoleCommand, USAGE};
use crate::console_host::{ConsoleHost, HostEvent};

type Chooser = MapChooser<ConsoleHost, FileSessionLoader>;

/// Default map the console starts on
const DEFAULT_MAP: &str = "de_dust2";

/// Map chooser console node
#[derive(Debug, Parser)]
#[command(name = "mapchooser", version, about)]
struct Args {
    /// Directory holding config.json, maps.txt and lang/
    #[arg(long, env = "MAPCHOOSER_DIR", default_value = ".")]
    dir: PathBuf,

    /// Map loaded at startup
    #[arg(long, env = "MAPCHOOSER_MAP", default_value = DEFAULT_MAP)]
    map: String,

    /// Round time limit in minutes
    #[arg(long, env = "MAPCHOOSER_TIME_LIMIT", default_value_t = 20.0)]
    time_limit: f32,

    /// Seconds between match end and the automatic restart
    #[arg(long, env = "MAPCHOOSER_RESTART_DELAY")]
    restart_delay: Option<f32>,

    /// Attach to an already running map instead of waiting for a round start
    #[arg(long)]
    hot: bool,

    /// Chat language, read from <dir>/lang/<language>.json
    #[arg(long, env = "MAPCHOOSER_LANGUAGE")]
    language: Option<String>,

    /// Log level
    #[arg(
        long,
        env = "MAPCHOOSER_LOG_LEVEL",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,
}

/// Initialize logging.
fn init_logging(level: &str) -> Result<()> {
    let filter = match level {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .try_init()
        .context("initializing logger")
}

/// Load the chat catalog.
fn load_localizer(args: &Args) -> Result<Localizer> {
    match &args.language {
        Some(language) => Localizer::load(args.dir.join("lang"), language)
            .with_context(|| format!("loading language {}", language)),
        None => Ok(Localizer::english()?),
    }
}

/// Resolve an operator-typed map into a level change.
fn level_change_for(map: &str) -> Option<LevelChange> {
    MapId::parse(map).map(|id| id.level_change())
}

/// Apply the level change the controller (or the operator) asked for.
fn apply_level_change(chooser: &mut Chooser) {
    while let Some(change) = chooser.host_mut().take_level_change() {
        chooser.on_session_end();
        chooser.host_mut().load_map(&change);
        chooser.on_session_start(&change.map);
        chooser.on_round_start();
    }
}

/// React to an expired timer or a finished round.
fn handle_event(chooser: &mut Chooser, event: HostEvent) {
    match event {
        HostEvent::Timer(id, task) => chooser.on_timer(id, task),
        HostEvent::RoundOver => {
            if chooser.host().time_limit_reached() {
                println!("*** match over");
                chooser.on_match_end();
            } else {
                println!("*** round over");
                chooser.on_round_start();
            }
        }
    }
}

/// Print the controller state.
fn print_status(chooser: &Chooser) {
    let next = chooser
        .next_map()
        .map(|map| map.name().to_string())
        .unwrap_or_else(|| "-".to_string());

    println!("map:         {}", chooser.host().current_map());
    println!("phase:       {}", chooser.phase());
    println!("next map:    {}", next);
    println!("time left:   {}", format_time_left(chooser.time_remaining()));
    println!("rtv:         {}", chooser.gate().count());
    println!("nominations: {}", chooser.nominations().len());
    println!("extends:     {}", chooser.extends_used());
    println!("timers:      {}", chooser.host().pending_timers());
}

/// Handle one operator line. Returns false when the console should exit.
fn handle_line(chooser: &mut Chooser, line: &str) -> bool {
    let command = match ConsoleCommand::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return true,
        Err(e) => {
            println!("{} (type `help`)", e);
            return true;
        }
    };

    match command {
        ConsoleCommand::Join { id, name, bot } => {
            let player = PlayerInfo::new(id, name).with_team(Team::Terrorist);
            let player = if bot { player.as_bot() } else { player };
            chooser.host_mut().join(player);
        }
        ConsoleCommand::Leave { id } => {
            if !chooser.host_mut().leave(PlayerId(id)) {
                println!("no player {}", id);
            }
        }
        ConsoleCommand::Say { id, text } => {
            let player = PlayerId(id);
            let name = match chooser.host().player_name(player) {
                Some(name) => name.to_string(),
                None => {
                    println!("no player {}", id);
                    return true;
                }
            };
            println!("{}: {}", name, text);
            chooser.on_command(player, &text);
        }
        ConsoleCommand::Pick { id, entry } => {
            let player = PlayerId(id);
            match chooser.host_mut().pick(player, entry) {
                Some((kind, index)) => chooser.on_menu_choice(player, kind, index),
                None => println!("nothing to pick at {} for player {}", entry, id),
            }
        }
        ConsoleCommand::RoundStart => chooser.on_round_start(),
        ConsoleCommand::MatchEnd => chooser.on_match_end(),
        ConsoleCommand::ChangeMap { map } => match level_change_for(&map) {
            Some(change) => chooser.host_mut().request_level_change(change),
            None => println!("invalid map name: {}", map),
        },
        ConsoleCommand::TimeLimit { minutes } => {
            if let Err(e) = chooser.host_mut().set_time_limit(minutes) {
                println!("{}", e);
            }
        }
        ConsoleCommand::Status => print_status(chooser),
        ConsoleCommand::Help => println!("{}", USAGE),
        ConsoleCommand::Quit => return false,
    }
    true
}

/// Main entry point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    log::info!("Map chooser console v{} starting", env!("CARGO_PKG_VERSION"));
    log::info!("Configuration: {:?}", args);

    let start = level_change_for(&args.map)
        .with_context(|| format!("invalid start map: {}", args.map))?;
    let restart_delay = match args.restart_delay {
        Some(seconds) if seconds.is_finite() && seconds >= 0.0 => {
            Some(Duration::from_secs_f32(seconds))
        }
        Some(seconds) => anyhow::bail!("invalid restart delay: {}", seconds),
        None => None,
    };

    let localizer = load_localizer(&args)?;
    log::info!("Loaded {} chat templates", localizer.len());

    let host = ConsoleHost::new(&start.map, args.time_limit, restart_delay, localizer);
    let loader = FileSessionLoader::new(&args.dir);
    log::info!("Reading settings from {}", loader.dir().display());

    let mut chooser = MapChooser::new(host, loader);
    if args.hot {
        chooser.attach(true);
    } else {
        chooser.attach(false);
        chooser.on_session_start(&start.map);
        chooser.on_round_start();
    }

    log::info!("Map chooser console is running, type `help` for commands");
    log::info!("Press Ctrl+C to shut down");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                log::info!("Received Ctrl+C, shutting down");
                break;
            }
            event = chooser.host_mut().next_event(), if chooser.host().has_pending() => {
                if let Some(event) = event {
                    handle_event(&mut chooser, event);
                }
            }
            line = lines.next_line() => {
                match line.context("reading stdin")? {
                    Some(line) => {
                        if !handle_line(&mut chooser, &line) {
                            break;
                        }
                    }
                    None => {
                        log::info!("stdin closed, shutting down");
                        break;
                    }
                }
            }
        }
        apply_level_change(&mut chooser);
    }

    chooser.on_session_end();
    log::info!("Shutdown complete");
    Ok(())
}

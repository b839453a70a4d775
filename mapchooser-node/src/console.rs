// Operator console
//
// Parses the lines typed on stdin into host events. Each line stands in for
// something a real dedicated server would report: players joining, chat,
// menu picks, round and match boundaries.

use std::fmt;

/// One operator line.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsoleCommand {
    /// `join <id> <name> [bot]`
    Join { id: u64, name: String, bot: bool },

    /// `leave <id>`
    Leave { id: u64 },

    /// `say <id> <text>`
    Say { id: u64, text: String },

    /// `menu <id> <n>`, picking the n-th (1-based) entry of the player's open menu
    Pick { id: u64, entry: usize },

    /// `round`
    RoundStart,

    /// `matchend`
    MatchEnd,

    /// `map <name>`
    ChangeMap { map: String },

    /// `timelimit <minutes>`
    TimeLimit { minutes: f32 },

    /// `status`
    Status,

    /// `help`
    Help,

    /// `quit`
    Quit,
}

/// Why a console line was rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseError {}

/// Help text printed by `help`.
pub const USAGE: &str = "\
commands:
    join <id> <name> [bot]   add a player
    leave <id>               remove a player
    say <id> <text>          chat as a player (rtv, nominate, nextmap, ...)
    menu <id> <n>            pick entry n of the player's open menu
    round                    report a round start
    matchend                 report the end of the match
    map <name>               force a level change
    timelimit <minutes>      set the round time limit
    status                   show the controller state
    quit                     exit";

impl ConsoleCommand {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "join" => {
                let mut parts = rest.split_whitespace();
                let id = parse_id(parts.next())?;
                let name = parts
                    .next()
                    .ok_or_else(|| ParseError("join needs a name".into()))?
                    .to_string();
                let bot = matches!(parts.next(), Some(flag) if flag.eq_ignore_ascii_case("bot"));
                ConsoleCommand::Join { id, name, bot }
            }
            "leave" => ConsoleCommand::Leave {
                id: parse_id(rest.split_whitespace().next())?,
            },
            "say" => {
                let (id, text) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| ParseError("say needs a player id and text".into()))?;
                ConsoleCommand::Say {
                    id: parse_id(Some(id))?,
                    text: text.trim().to_string(),
                }
            }
            "menu" => {
                let mut parts = rest.split_whitespace();
                let id = parse_id(parts.next())?;
                let entry = parts
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
                    .filter(|n| *n > 0)
                    .ok_or_else(|| ParseError("menu needs an entry number from 1".into()))?;
                ConsoleCommand::Pick { id, entry }
            }
            "round" => ConsoleCommand::RoundStart,
            "matchend" => ConsoleCommand::MatchEnd,
            "map" => {
                if rest.is_empty() {
                    return Err(ParseError("map needs a name".into()));
                }
                ConsoleCommand::ChangeMap {
                    map: rest.to_string(),
                }
            }
            "timelimit" => {
                let minutes = rest
                    .parse::<f32>()
                    .ok()
                    .filter(|m| m.is_finite() && *m >= 0.0)
                    .ok_or_else(|| ParseError(format!("invalid time limit: {}", rest)))?;
                ConsoleCommand::TimeLimit { minutes }
            }
            "status" => ConsoleCommand::Status,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            other => return Err(ParseError(format!("unknown command: {}", other))),
        };
        Ok(Some(command))
    }
}

fn parse_id(word: Option<&str>) -> Result<u64, ParseError> {
    let word = word.ok_or_else(|| ParseError("missing player id".into()))?;
    word.parse()
        .map_err(|_| ParseError(format!("invalid player id: {}", word)))
}

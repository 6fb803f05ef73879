//! Command parsing for player input.
//!
//! The parser owns all input validation: malformed or missing arguments
//! become [`Command::Malformed`] with a usage hint, so the core is never
//! invoked with a bad argument.

use dh_core::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the command list.
    Help,
    /// Show the player's stats line.
    Stats,
    /// List the inventory.
    Inventory,
    /// Re-describe the current room.
    Look,
    /// Move through an exit.
    Go {
        /// The direction to move.
        direction: Direction,
    },
    /// Pick up a ground item by index.
    Take {
        /// Roster index as displayed.
        index: usize,
    },
    /// Use an inventory item by index.
    Use {
        /// Inventory index as displayed.
        index: usize,
    },
    /// Fight an enemy by index.
    Fight {
        /// Roster index as displayed.
        index: usize,
    },
    /// Leave the game.
    Quit,
    /// A recognized verb with a missing or non-numeric argument.
    Malformed {
        /// Usage hint to show the player.
        usage: &'static str,
    },
    /// Input that matched no verb.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const GO_VERBS: &[&str] = &["go", "move", "walk", "head"];
const TAKE_VERBS: &[&str] = &["take", "get", "pick", "grab"];
const USE_VERBS: &[&str] = &["use", "apply"];
const FIGHT_VERBS: &[&str] = &["fight", "attack", "kill"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const STATS_VERBS: &[&str] = &["stats", "st"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i", "items"];
const HELP_VERBS: &[&str] = &["help", "h", "?", "commands"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

/// Parse a line of player input into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Look;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]);

    // A bare direction word works like "go <direction>".
    if let Some(direction) = Direction::parse(&verb) {
        return Command::Go { direction };
    }

    if GO_VERBS.contains(&verb.as_str()) {
        return parse_go(rest);
    }
    if TAKE_VERBS.contains(&verb.as_str()) {
        return parse_index(rest, "take <item number>", |index| Command::Take { index });
    }
    if USE_VERBS.contains(&verb.as_str()) {
        return parse_index(rest, "use <item number>", |index| Command::Use { index });
    }
    if FIGHT_VERBS.contains(&verb.as_str()) {
        return parse_index(rest, "fight <enemy number>", |index| Command::Fight {
            index,
        });
    }
    if LOOK_VERBS.contains(&verb.as_str()) {
        return Command::Look;
    }
    if STATS_VERBS.contains(&verb.as_str()) {
        return Command::Stats;
    }
    if INVENTORY_VERBS.contains(&verb.as_str()) {
        return Command::Inventory;
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb.as_str()) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn parse_go(rest: &[&str]) -> Command {
    match rest.first().and_then(|word| Direction::parse(word)) {
        Some(direction) => Command::Go { direction },
        None => Command::Malformed {
            usage: "go <north|south|east|west>",
        },
    }
}

fn parse_index(rest: &[&str], usage: &'static str, build: impl Fn(usize) -> Command) -> Command {
    match rest.first().and_then(|word| word.parse::<usize>().ok()) {
        Some(index) => build(index),
        None => Command::Malformed { usage },
    }
}

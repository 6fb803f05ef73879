//! Dunhollow — a turn-based dungeon crawl in the terminal.
//!
//! The shell owns everything the core does not: reading the player's
//! name, the command loop, rendering, and cosmetic pacing delays. Game
//! rules all live in `dh-core`, `dh-worldgen`, and `dh-combat`.

mod parser;
mod render;

use std::io::{self, BufRead, Write};
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser as ClapParser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dh_combat::{FightOutcome, RngVariance, fight};
use dh_core::{Player, RoomId, World};
use dh_worldgen::generate_world;

use crate::parser::{Command, parse_command};

/// Pause between loop iterations, milliseconds.
const PACE_MS: u64 = 1200;

#[derive(ClapParser)]
#[command(
    name = "dunhollow",
    about = "Dunhollow — a turn-based dungeon crawl",
    version
)]
struct Cli {
    /// Player name (prompted for when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// RNG seed for a reproducible world
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable the pacing delay between messages
    #[arg(long)]
    no_delay: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e.red());
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let name = match cli.name.clone() {
        Some(name) => name,
        None => prompt_name(&mut reader)?,
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let world = generate_world(&mut rng);
    let start = world
        .start()
        .ok_or_else(|| "generated world has no start room".to_string())?;

    println!("Welcome to Dunhollow, {}.", name.bold());
    println!("Seed: {seed}");
    println!("{}\n", render::help_text());

    let mut player = Player::new(name);
    game_loop(&cli, world, start, &mut player, &mut rng, &mut reader)?;

    if !player.is_alive() {
        println!("{}", "Game over.".red().bold());
    } else {
        println!("Farewell, {}.", player.name);
    }
    Ok(())
}

/// Read the player's name from stdin, defaulting on empty input or EOF.
fn prompt_name(reader: &mut impl BufRead) -> Result<String, String> {
    print!("Insert player name: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| e.to_string())?;
    let name = line.trim();
    if name.is_empty() {
        Ok("Wanderer".to_string())
    } else {
        Ok(name.to_string())
    }
}

/// The read-eval loop. Runs until quit, EOF, or player defeat.
fn game_loop(
    cli: &Cli,
    mut world: World,
    start: RoomId,
    player: &mut Player,
    rng: &mut StdRng,
    reader: &mut impl BufRead,
) -> Result<(), String> {
    let mut here = start;
    let mut line = String::new();

    while player.is_alive() {
        pause(cli, PACE_MS);

        if let Some(view) = world.describe(here) {
            println!("\n{}", render::room_view(&view));
        }
        println!("{}", render::stats_line(player));

        print!("\n> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match parse_command(&line) {
            Command::Help => println!("{}", render::help_text()),
            Command::Stats => println!("{}", render::stats_line(player)),
            Command::Inventory => println!("{}", render::inventory_listing(player)),
            Command::Look => {} // next iteration re-describes the room
            Command::Go { direction } => {
                let outcome = world.step(here, direction);
                if outcome.moved {
                    here = outcome.room;
                    println!("You move {direction}.");
                } else {
                    println!("You can't go that way.");
                }
            }
            Command::Take { index } => {
                let Some(room) = world.room_mut(here) else {
                    continue;
                };
                match room.take_item(index) {
                    Ok(item) => {
                        println!("You picked up: {}", item.name.bold());
                        player.inventory.add(item);
                    }
                    Err(e) => println!("{}", e.to_string().yellow()),
                }
            }
            Command::Use { index } => match player.use_item(index) {
                Ok(used) => {
                    println!("{}", used.effect);
                    if used.consumed {
                        println!("The item was consumed.");
                    }
                }
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            Command::Fight { index } => {
                let Some(room) = world.room_mut(here) else {
                    continue;
                };
                let mut variance = RngVariance::new(&mut *rng);
                let report = fight(player, room, index, &mut variance);
                println!("{}", render::fight_report(player, &report));
                if matches!(report.outcome, FightOutcome::Victory { .. }) {
                    pause(cli, PACE_MS);
                }
            }
            Command::Quit => break,
            Command::Malformed { usage } => println!("Please type: {usage}"),
            Command::Unknown { input } => {
                println!("Unknown command: {input}. Type 'help' for commands.");
            }
        }
    }

    Ok(())
}

/// Sleep unless `--no-delay` was given. Cosmetic only; never affects
/// game state.
fn pause(cli: &Cli, ms: u64) {
    if !cli.no_delay {
        thread::sleep(Duration::from_millis(ms));
    }
}

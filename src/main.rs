use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mana_duel::{ConsoleInput, ConsoleNarrator, GameConfig, Gameplay, InputSource, Player};

#[derive(Debug, Parser)]
#[command(name = "mana-duel", about = "Two-player card duel in the terminal")]
struct Args {
    /// Seed for card draws and the starting player
    #[arg(long)]
    seed: Option<u64>,

    /// Player who takes the first turn (1 or 2)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    first: Option<u8>,

    /// Player names, skipping the prompts
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    names: Option<Vec<String>>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let args = Args::parse();

    let names = match args.names {
        Some(names) => names,
        None => (1..=2).map(read_name).collect::<anyhow::Result<Vec<String>>>()?,
    };

    let mut players = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| Player::new(index + 1, name).with_input(ConsoleInput));
    let (Some(first), Some(second)) = (players.next(), players.next()) else {
        bail!("two player names are required");
    };

    let config = GameConfig {
        seed: args.seed,
        active_player: args.first.map(|first| usize::from(first) - 1),
        ..GameConfig::default()
    };
    let mut game = Gameplay::with_config(first, second, config, ConsoleNarrator)?;

    let winner = game.run_game()?;
    log::info!("Player {winner} won");
    Ok(())
}

fn read_name(number: usize) -> anyhow::Result<String> {
    println!("Please enter Player {number} name");
    let name = ConsoleInput
        .next_line()
        .with_context(|| format!("no name given for player {number}"))?;

    let name = name.trim();
    if name.is_empty() {
        return Ok(format!("Player {number}"));
    }
    Ok(name.to_string())
}

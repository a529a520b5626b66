//! Seating and scoring for a home poker league.
//!
//! Reads rosters, tables and results as JSON files and prints seating plans,
//! rebalance outcomes, point deltas or season standings as JSON.

use anyhow::{Context, Result};
use pico_args::Arguments;
use pl_cli::{commands, logging};
use poker_league::LeagueConfig;

const HELP: &str = "\
Seat, rebalance and score poker league tournaments

USAGE:
  pl_cli allocate  --roster FILE [--seats N] [--seed N]
  pl_cli rebalance --roster FILE --tables FILE [--seed N]
  pl_cli score     --results FILE [--participation N] [--rebuy-penalty N]
  pl_cli standings --results FILE [--results FILE ...] [--season NAME]
                   [--participation N] [--rebuy-penalty N]

OPTIONS:
  --roster FILE            Active players: [{\"player_id\": 1, \"is_dealer\": true}, ...]
  --tables FILE            Tables in play: [{\"id\": 10, \"tournament_id\": 1, \"table_number\": 1, \"max_seats\": 9}, ...]
  --results FILE           Results: [{\"player_id\": 1, \"rebuy_count\": 0, \"position\": 2}, ...]
  --seats N                Seats per table  [default: env LEAGUE_MAX_SEATS_PER_TABLE or 9]
  --seed N                 Fixed shuffle seed  [default: env LEAGUE_RNG_SEED or random]
  --participation N        Points for taking part  [default: env LEAGUE_PARTICIPATION_POINTS or 5]
  --rebuy-penalty N        Points per rebuy  [default: env LEAGUE_REBUY_PENALTY or -1]
  --season NAME            Season name  [default: env LEAGUE_SEASON_NAME or current year]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  RUST_LOG                 Log filter, logs go to stderr  [default: info]
  (See .env file for all configuration options)
";

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    logging::init();

    let command = commands::parse_command(pargs)?;

    let mut config = LeagueConfig::from_env().context("Failed to load configuration")?;
    command.apply_to(&mut config);
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        command = command.name(),
        season = %config.season_name,
        max_seats = config.seating.max_seats_per_table,
        "Running command"
    );

    let output = commands::run(&command, &config)?;
    println!("{output}");

    Ok(())
}

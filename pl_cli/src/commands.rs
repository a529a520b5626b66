use crate::logging::log_performance;
use anyhow::{Context, Result};
use pico_args::Arguments;
use poker_league::{
    LeagueConfig, ScoringEntry, ScoringRules, SeasonLeaderboard, SeatAllocator, SeatingCandidate,
    Table,
};
use serde::de::DeserializeOwned;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Instant,
};

/// Errors that can occur during argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No subcommand given.
    MissingSubcommand,
    /// Subcommand is not one of allocate, rebalance, score, standings.
    UnknownSubcommand(String),
    /// Option missing or its value unparsable.
    InvalidOption(String),
    /// Arguments left over after parsing.
    UnexpectedArguments(Vec<String>),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSubcommand => write!(
                f,
                "Missing subcommand. Use one of: allocate, rebalance, score, standings"
            ),
            Self::UnknownSubcommand(name) => write!(
                f,
                "Unknown subcommand '{}'. Use one of: allocate, rebalance, score, standings",
                name
            ),
            Self::InvalidOption(reason) => write!(f, "{}", reason),
            Self::UnexpectedArguments(args) => {
                write!(f, "Unexpected arguments: {}", args.join(" "))
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<pico_args::Error> for ParseError {
    fn from(err: pico_args::Error) -> Self {
        Self::InvalidOption(err.to_string())
    }
}

/// A parsed CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Seat a fresh roster.
    Allocate {
        roster: PathBuf,
        max_seats: Option<usize>,
        seed: Option<u64>,
    },
    /// Reseat the remaining players over the current tables.
    Rebalance {
        roster: PathBuf,
        tables: PathBuf,
        seed: Option<u64>,
    },
    /// Score one tournament.
    Score {
        results: PathBuf,
        participation: Option<i64>,
        rebuy_penalty: Option<i64>,
    },
    /// Score several tournaments into season standings.
    Standings {
        results: Vec<PathBuf>,
        season: Option<String>,
        participation: Option<i64>,
        rebuy_penalty: Option<i64>,
    },
}

impl Command {
    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Allocate { .. } => "allocate",
            Command::Rebalance { .. } => "rebalance",
            Command::Score { .. } => "score",
            Command::Standings { .. } => "standings",
        }
    }

    /// Override configuration values with the flags given on the command line
    pub fn apply_to(&self, config: &mut LeagueConfig) {
        match self {
            Command::Allocate {
                max_seats, seed, ..
            } => {
                if let Some(max_seats) = max_seats {
                    config.seating.max_seats_per_table = *max_seats;
                }
                config.rng_seed = seed.or(config.rng_seed);
            }
            Command::Rebalance { seed, .. } => {
                config.rng_seed = seed.or(config.rng_seed);
            }
            Command::Score {
                participation,
                rebuy_penalty,
                ..
            } => apply_scoring(&mut config.scoring, *participation, *rebuy_penalty),
            Command::Standings {
                season,
                participation,
                rebuy_penalty,
                ..
            } => {
                if let Some(season) = season {
                    config.season_name = season.clone();
                }
                apply_scoring(&mut config.scoring, *participation, *rebuy_penalty);
            }
        }
    }
}

fn apply_scoring(rules: &mut ScoringRules, participation: Option<i64>, rebuy_penalty: Option<i64>) {
    if let Some(points) = participation {
        rules.participation_points = points;
    }
    if let Some(points) = rebuy_penalty {
        rules.rebuy_penalty_per_rebuy = points;
    }
}

/// Parse command-line arguments into a [`Command`].
///
/// # Arguments
///
/// * `pargs` - Arguments with the program name already stripped
///
/// # Returns
///
/// * `Ok(Command)` - Successfully parsed command
/// * `Err(ParseError)` - Parse error with descriptive message
///
/// # Examples
///
/// ```
/// use pl_cli::commands::{Command, parse_command};
/// use pico_args::Arguments;
///
/// let args = Arguments::from_vec(vec!["allocate".into(), "--roster".into(), "r.json".into()]);
/// assert!(matches!(parse_command(args), Ok(Command::Allocate { max_seats: None, .. })));
/// ```
pub fn parse_command(mut pargs: Arguments) -> Result<Command, ParseError> {
    let name = pargs.subcommand()?.ok_or(ParseError::MissingSubcommand)?;

    let command = match name.as_str() {
        "allocate" => Command::Allocate {
            roster: pargs.value_from_str("--roster")?,
            max_seats: pargs.opt_value_from_str("--seats")?,
            seed: pargs.opt_value_from_str("--seed")?,
        },
        "rebalance" => Command::Rebalance {
            roster: pargs.value_from_str("--roster")?,
            tables: pargs.value_from_str("--tables")?,
            seed: pargs.opt_value_from_str("--seed")?,
        },
        "score" => Command::Score {
            results: pargs.value_from_str("--results")?,
            participation: pargs.opt_value_from_str("--participation")?,
            rebuy_penalty: pargs.opt_value_from_str("--rebuy-penalty")?,
        },
        "standings" => {
            let results: Vec<PathBuf> = pargs.values_from_str("--results")?;
            if results.is_empty() {
                return Err(ParseError::InvalidOption(
                    "standings needs at least one --results file".to_string(),
                ));
            }
            Command::Standings {
                results,
                season: pargs.opt_value_from_str("--season")?,
                participation: pargs.opt_value_from_str("--participation")?,
                rebuy_penalty: pargs.opt_value_from_str("--rebuy-penalty")?,
            }
        }
        _ => return Err(ParseError::UnknownSubcommand(name)),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(ParseError::UnexpectedArguments(
            remaining
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        ));
    }

    Ok(command)
}

/// Run a command and render its result as pretty JSON.
///
/// `config` must already carry the command's overrides, see [`Command::apply_to`].
pub fn run(command: &Command, config: &LeagueConfig) -> Result<String> {
    let started = Instant::now();

    let output = match command {
        Command::Allocate { roster, .. } => {
            let players: Vec<SeatingCandidate> = read_json(roster, "roster")?;
            allocate(&players, config)?
        }
        Command::Rebalance { roster, tables, .. } => {
            let players: Vec<SeatingCandidate> = read_json(roster, "roster")?;
            let tables: Vec<Table> = read_json(tables, "tables")?;
            rebalance(&tables, &players, config)?
        }
        Command::Score { results, .. } => {
            let entries: Vec<ScoringEntry> = read_json(results, "results")?;
            score(&entries, config)?
        }
        Command::Standings { results, .. } => {
            let tournaments = results
                .iter()
                .map(|path| read_json(path, "results"))
                .collect::<Result<Vec<Vec<ScoringEntry>>>>()?;
            standings(&tournaments, config)?
        }
    };

    log_performance(
        command.name(),
        started.elapsed().as_millis() as u64,
        None,
    );
    Ok(output)
}

/// Seat `players` and render the plan
pub fn allocate(players: &[SeatingCandidate], config: &LeagueConfig) -> Result<String> {
    let plan = SeatAllocator::from_seed(config.rng_seed)
        .allocate(players, config.seating.max_seats_per_table)
        .context("Failed to seat roster")?;

    tracing::info!(
        players = plan.len(),
        tables = plan.table_count(),
        "Seated roster"
    );
    Ok(serde_json::to_string_pretty(&plan)?)
}

/// Rebalance `players` over `tables` and render the outcome
pub fn rebalance(
    tables: &[Table],
    players: &[SeatingCandidate],
    config: &LeagueConfig,
) -> Result<String> {
    let outcome = SeatAllocator::from_seed(config.rng_seed)
        .rebalance(tables, players)
        .context("Failed to rebalance tables")?;

    if outcome.is_unchanged() {
        tracing::info!("Single table still fits everyone, seating unchanged");
    }
    Ok(serde_json::to_string_pretty(&outcome)?)
}

/// Score one tournament and render the deltas
pub fn score(entries: &[ScoringEntry], config: &LeagueConfig) -> Result<String> {
    let deltas = config
        .scoring
        .score(entries)
        .context("Failed to score results")?;
    Ok(serde_json::to_string_pretty(&deltas)?)
}

/// Score tournaments in order into a season and render the standings
pub fn standings(tournaments: &[Vec<ScoringEntry>], config: &LeagueConfig) -> Result<String> {
    let mut season = SeasonLeaderboard::new(config.season_name.clone());

    for (idx, entries) in tournaments.iter().enumerate() {
        let tournament_id = idx as i64 + 1;
        let deltas = config
            .scoring
            .score(entries)
            .with_context(|| format!("Failed to score results file {}", tournament_id))?;
        season.apply(tournament_id, &deltas)?;
    }

    let report = serde_json::json!({
        "season": season.season_name(),
        "tournaments": season.tournaments_applied(),
        "standings": season.standings(),
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file {}", what, path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {} file {}", what, path.display()))
}

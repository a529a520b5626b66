//! League configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use crate::scoring::{DEFAULT_PARTICIPATION_POINTS, DEFAULT_REBUY_PENALTY, ScoringRules};
use chrono::{Datelike, Utc};

/// Largest table the league will seat
pub const MAX_SEATS_PER_TABLE: usize = 23;

/// Complete league configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueConfig {
    /// Seating defaults
    pub seating: SeatingDefaults,
    /// Point values
    pub scoring: ScoringRules,
    /// Season the scored tournaments count towards
    pub season_name: String,
    /// Fixed RNG seed for reproducible seatings
    pub rng_seed: Option<u64>,
}

/// Default seating configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatingDefaults {
    /// Maximum players per table
    pub max_seats_per_table: usize,
}

impl Default for SeatingDefaults {
    fn default() -> Self {
        Self {
            max_seats_per_table: 9,
        }
    }
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            seating: SeatingDefaults::default(),
            scoring: ScoringRules::default(),
            season_name: default_season_name(),
            rng_seed: None,
        }
    }
}

impl LeagueConfig {
    /// Load configuration from environment variables
    ///
    /// # Returns
    ///
    /// * `Result<LeagueConfig, ConfigError>` - Loaded configuration or error
    ///
    /// # Errors
    ///
    /// Returns error if `LEAGUE_RNG_SEED` is set but not a number
    pub fn from_env() -> Result<Self, ConfigError> {
        let seating = SeatingDefaults {
            max_seats_per_table: parse_env_or(
                "LEAGUE_MAX_SEATS_PER_TABLE",
                SeatingDefaults::default().max_seats_per_table,
            ),
        };

        let scoring = ScoringRules {
            participation_points: parse_env_or(
                "LEAGUE_PARTICIPATION_POINTS",
                DEFAULT_PARTICIPATION_POINTS,
            ),
            rebuy_penalty_per_rebuy: parse_env_or("LEAGUE_REBUY_PENALTY", DEFAULT_REBUY_PENALTY),
        };

        let season_name =
            std::env::var("LEAGUE_SEASON_NAME").unwrap_or_else(|_| default_season_name());

        // Unlike the other settings, a bad seed is rejected rather than defaulted
        let rng_seed: Option<u64> = match std::env::var("LEAGUE_RNG_SEED") {
            Ok(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "LEAGUE_RNG_SEED".to_string(),
                reason: format!("Expected an unsigned integer, got {:?}", raw),
            })?),
            Err(_) => None,
        };

        Ok(LeagueConfig {
            seating,
            scoring,
            season_name,
            rng_seed,
        })
    }

    /// Validate configuration after loading
    ///
    /// # Returns
    ///
    /// * `Result<(), ConfigError>` - Success or validation error
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seating.max_seats_per_table < 2 {
            return Err(ConfigError::Invalid {
                var: "LEAGUE_MAX_SEATS_PER_TABLE".to_string(),
                reason: "Must be at least 2".to_string(),
            });
        }

        if self.seating.max_seats_per_table > MAX_SEATS_PER_TABLE {
            return Err(ConfigError::Invalid {
                var: "LEAGUE_MAX_SEATS_PER_TABLE".to_string(),
                reason: format!("Must be at most {}", MAX_SEATS_PER_TABLE),
            });
        }

        if self.scoring.rebuy_penalty_per_rebuy > 0 {
            return Err(ConfigError::Invalid {
                var: "LEAGUE_REBUY_PENALTY".to_string(),
                reason: "Must be zero or negative".to_string(),
            });
        }

        if self.season_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "LEAGUE_SEASON_NAME".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn default_season_name() -> String {
    format!("{} Season", Utc::now().year())
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

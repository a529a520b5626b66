//! Tournament roster error types.

use super::models::PlayerId;
use thiserror::Error;

/// Roster errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    /// Player is not entered in the tournament
    #[error("Player not found in tournament: {0}")]
    PlayerNotFound(PlayerId),

    /// Player entered twice
    #[error("Player already registered: {0}")]
    AlreadyRegistered(PlayerId),

    /// Operation requires an active participant
    #[error("Player {0} is no longer active")]
    NotActive(PlayerId),

    /// Finishing positions are positive
    #[error("Invalid finishing position: {0}")]
    InvalidPosition(i64),

    /// Another participant already finished in this position
    #[error("Finishing position {0} is already taken")]
    PositionTaken(i64),

    /// Finishing requires exactly one player left
    #[error("Cannot crown a champion with {remaining} active players")]
    NoChampion { remaining: usize },
}

impl TournamentError {
    /// Get a message safe to show outside the admin screens
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::PlayerNotFound(_) => "Player not found".to_string(),
            TournamentError::AlreadyRegistered(_) => "Player already registered".to_string(),
            TournamentError::NotActive(_) => "Player is no longer active".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for roster operations
pub type TournamentResult<T> = Result<T, TournamentError>;

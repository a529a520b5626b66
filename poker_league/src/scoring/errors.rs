//! Error types for season scoring

use crate::tournament::{PlayerId, TournamentId};
use thiserror::Error;

/// Result type for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Scoring errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Finishing position is zero or negative
    #[error("Invalid position {position} for player {player_id}")]
    InvalidPosition { player_id: PlayerId, position: i64 },

    /// Same player listed twice in one tournament's results
    #[error("Player {0} appears more than once in the results")]
    DuplicatePlayer(PlayerId),

    /// Points do not fit in an i64
    #[error("Points for player {0} overflow")]
    PointsOverflow(PlayerId),

    /// Tournament results were already merged into the season
    #[error("Tournament {0} was already applied to the season")]
    AlreadyApplied(TournamentId),
}

impl ScoringError {
    /// Get a message safe to show outside the admin screens
    pub fn client_message(&self) -> String {
        match self {
            ScoringError::InvalidPosition { position, .. } => {
                format!("Invalid finishing position {}", position)
            }
            ScoringError::DuplicatePlayer(_) => "Player listed more than once".to_string(),
            ScoringError::PointsOverflow(_) => "Point values are too large".to_string(),
            ScoringError::AlreadyApplied(_) => "Results already recorded".to_string(),
        }
    }
}

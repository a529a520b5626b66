//! Error types for the seating engine

use crate::tournament::{PlayerId, TournamentError, TournamentId};
use thiserror::Error;

/// Result type for seating operations
pub type SeatingResult<T> = Result<T, SeatingError>;

/// Seating errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// Roster or table set cannot be seated as given
    #[error("Invalid seating input: {0}")]
    InvalidInput(String),

    /// Player has no current seat
    #[error("Player {0} has no current seat")]
    PlayerNotSeated(PlayerId),

    /// Seat is held by another player
    #[error("Seat {seat_number} at table {table_number} is already taken")]
    SeatTaken {
        table_number: usize,
        seat_number: usize,
    },

    /// Seat number outside the table's capacity
    #[error("Seat {seat_number} does not exist at table {table_number} ({max_seats} seats)")]
    SeatOutOfRange {
        table_number: usize,
        seat_number: usize,
        max_seats: usize,
    },

    /// Tournament has no seating state yet
    #[error("No seating registered for tournament {0}")]
    TournamentNotFound(TournamentId),

    /// Roster update failed
    #[error("Roster error: {0}")]
    Roster(#[from] TournamentError),
}

impl SeatingError {
    /// Get a message safe to show outside the admin screens
    pub fn client_message(&self) -> String {
        match self {
            SeatingError::PlayerNotSeated(_) => "Player has no current seat".to_string(),
            SeatingError::TournamentNotFound(_) => "Tournament not found".to_string(),
            SeatingError::Roster(e) => e.client_message(),
            _ => self.to_string(),
        }
    }
}

//! Season scoring: tournament results to points, points to standings.
//!
//! ## Example
//!
//! ```
//! use poker_league::scoring::{ScoringEntry, ScoringRules, SeasonLeaderboard};
//!
//! let entries = [
//!     ScoringEntry { player_id: 1, rebuy_count: 0, position: Some(1) },
//!     ScoringEntry { player_id: 2, rebuy_count: 2, position: Some(2) },
//! ];
//! let deltas = ScoringRules::default().score(&entries).unwrap();
//! assert_eq!(deltas[1].total_points, 5 + 15 - 2);
//!
//! let mut season = SeasonLeaderboard::new("2025 Fall");
//! season.apply(1, &deltas).unwrap();
//! assert_eq!(season.standings()[0].player_id, 1);
//! ```

pub mod errors;
pub mod leaderboard;
pub mod points;

pub use errors::{ScoringError, ScoringResult};
pub use leaderboard::SeasonLeaderboard;
pub use points::{
    DEFAULT_PARTICIPATION_POINTS, DEFAULT_REBUY_PENALTY, PointsDelta, ScoringEntry, ScoringRules,
    position_points, score_positions,
};

//! # Poker League
//!
//! Seating and season scoring for a home poker league.
//!
//! The library covers the parts of running a tournament night that need care
//! to get right:
//!
//! - **Seating**: split a roster over the fewest tables that fit it, with a
//!   dealer in seat 1 wherever one is available
//! - **Rebalancing**: after eliminations, break surplus tables or even out
//!   populations so no two tables differ by more than one player
//! - **Scoring**: turn finishing positions and rebuys into season points
//!
//! ## Core Modules
//!
//! - [`tournament`]: Players, participants, tables and seat records
//! - [`seating`]: Allocator, rebalancer, seating ledger and coordinator
//! - [`scoring`]: Points table and season leaderboard
//! - [`config`]: Environment-driven league configuration
//!
//! ## Example
//!
//! ```
//! use poker_league::{Player, SeatAllocator, TournamentRoster};
//!
//! let mut roster = TournamentRoster::new(1);
//! for id in 1..=12 {
//!     let player = Player::new(id, format!("Player {id}"), id <= 2);
//!     roster.add_player(&player, None).unwrap();
//! }
//!
//! let plan = SeatAllocator::with_seed(1)
//!     .allocate(&roster.seating_candidates(), 9)
//!     .unwrap();
//! assert_eq!(plan.table_populations(), vec![6, 6]);
//! ```

/// Environment-driven configuration.
pub mod config;
pub use config::{ConfigError, LeagueConfig, SeatingDefaults};

/// Season scoring.
pub mod scoring;
pub use scoring::{
    PointsDelta, ScoringEntry, ScoringError, ScoringRules, SeasonLeaderboard, score_positions,
};

/// Table seating and rebalancing.
pub mod seating;
pub use seating::{
    RebalanceOutcome, SeatAllocator, SeatingCandidate, SeatingCoordinator, SeatingError,
    SeatingLedger, SeatingPlan,
};

/// Tournament domain model.
pub mod tournament;
pub use tournament::{
    ParticipantStatus, Player, PlayerId, SeatAssignment, Table, TournamentError, TournamentId,
    TournamentRoster,
};

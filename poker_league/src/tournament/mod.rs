//! Tournament domain model: players, participants, tables and seats.
//!
//! This module provides the in-memory records the seating and scoring
//! engines work over:
//! - Players with a global dealer flag and typed patch updates
//! - Participants with per-tournament dealer override, eliminations,
//!   rebuys and add-ons
//! - Tables and seat assignments
//! - Season point records
//!
//! ## Example
//!
//! ```
//! use poker_league::tournament::{Player, TournamentRoster};
//!
//! let mut roster = TournamentRoster::new(1);
//! roster.add_player(&Player::new(1, "Jenny", true), None).unwrap();
//! roster.add_player(&Player::new(2, "Mark", false), None).unwrap();
//!
//! roster.eliminate(2, 2).unwrap();
//! assert_eq!(roster.finish().unwrap(), 1);
//! ```

pub mod errors;
pub mod models;
pub mod roster;

pub use errors::{TournamentError, TournamentResult};
pub use models::{
    ParticipantStatus, Player, PlayerId, PlayerPatch, SeasonPointsRecord, SeatAssignment, Table,
    TableId, TournamentId, TournamentParticipant,
};
pub use roster::TournamentRoster;

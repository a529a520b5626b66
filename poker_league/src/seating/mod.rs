//! Seating engine: initial allocation, rebalancing and seat history.
//!
//! The allocator splits a roster over `ceil(players / max_seats)` tables and
//! puts one dealer in seat 1 of as many tables as it can. After eliminations
//! the rebalancer either evens out the existing tables or reseats everyone
//! over the new optimal table count.
//!
//! ## Example
//!
//! ```
//! use poker_league::seating::{SeatAllocator, SeatingCandidate};
//!
//! let players: Vec<SeatingCandidate> = (1..=18)
//!     .map(|id| SeatingCandidate::new(id, id <= 2))
//!     .collect();
//!
//! let plan = SeatAllocator::with_seed(7).allocate(&players, 9).unwrap();
//! assert_eq!(plan.table_count(), 2);
//! assert_eq!(plan.dealers_per_table(), vec![1, 1]);
//! ```

pub mod allocator;
pub mod coordinator;
pub mod errors;
pub mod ledger;
pub mod plan;
pub mod rebalancer;

pub use allocator::{MIN_SEATS_PER_TABLE, SeatAllocator, allocate, allocate_onto};
pub use coordinator::SeatingCoordinator;
pub use errors::{SeatingError, SeatingResult};
pub use ledger::SeatingLedger;
pub use plan::{RebalanceOutcome, Seat, SeatingCandidate, SeatingPlan, is_balanced};
pub use rebalancer::{rebalance, table_targets};

//! Initial seating with one dealer per table.

use super::{
    errors::{SeatingError, SeatingResult},
    plan::{PlanBuilder, RebalanceOutcome, SeatingCandidate, SeatingPlan},
    rebalancer,
};
use crate::tournament::Table;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::HashSet;

/// Smallest table the allocator will build
pub const MIN_SEATS_PER_TABLE: usize = 2;

/// Seat allocator owning its random source.
///
/// Each allocator has its own RNG so concurrent callers never share state.
/// Use [`SeatAllocator::with_seed`] for reproducible seatings.
pub struct SeatAllocator {
    rng: StdRng,
}

impl SeatAllocator {
    /// Create an allocator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an allocator with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fixed seed when one is configured, OS entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Seat a fresh roster
    ///
    /// # Arguments
    ///
    /// * `players` - Active players with their dealer flags
    /// * `max_seats_per_table` - Table capacity
    ///
    /// # Returns
    ///
    /// * `SeatingResult<SeatingPlan>` - Seating over `ceil(players / capacity)` tables
    pub fn allocate(
        &mut self,
        players: &[SeatingCandidate],
        max_seats_per_table: usize,
    ) -> SeatingResult<SeatingPlan> {
        allocate(players, max_seats_per_table, &mut self.rng)
    }

    /// Reseat after the roster changed, see [`rebalancer::rebalance`]
    pub fn rebalance(
        &mut self,
        current_tables: &[Table],
        active_players: &[SeatingCandidate],
    ) -> SeatingResult<RebalanceOutcome> {
        rebalancer::rebalance(current_tables, active_players, &mut self.rng)
    }
}

impl Default for SeatAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Seat a fresh roster over `ceil(players / max_seats_per_table)` tables.
///
/// Dealers are shuffled and placed in seat 1 of tables 1, 2, ... until either
/// runs out. Surplus dealers, then everyone else, go round-robin from table 1,
/// each into the next free seat at that table.
pub fn allocate<R: Rng + ?Sized>(
    players: &[SeatingCandidate],
    max_seats_per_table: usize,
    rng: &mut R,
) -> SeatingResult<SeatingPlan> {
    validate_capacity(max_seats_per_table)?;
    validate_roster(players)?;

    let table_count = players.len().div_ceil(max_seats_per_table);
    allocate_onto(players, table_count, max_seats_per_table, rng)
}

/// Seat a roster onto exactly `table_count` tables using the allocation rules
pub fn allocate_onto<R: Rng + ?Sized>(
    players: &[SeatingCandidate],
    table_count: usize,
    max_seats_per_table: usize,
    rng: &mut R,
) -> SeatingResult<SeatingPlan> {
    validate_capacity(max_seats_per_table)?;
    validate_roster(players)?;
    validate_fits(players.len(), table_count, max_seats_per_table)?;

    let (mut dealers, mut others) = split_shuffled(players, rng);
    let mut builder = PlanBuilder::new(table_count, max_seats_per_table);

    let seated_dealers = seat_dealers(&mut builder, &dealers)?;
    let surplus: Vec<SeatingCandidate> = dealers.drain(seated_dealers..).collect();

    let mut cursor = 0;
    for dealer in surplus {
        cursor = builder.seat_round_robin(cursor, dealer)?;
    }

    let mut cursor = 0;
    for player in others.drain(..) {
        cursor = builder.seat_round_robin(cursor, player)?;
    }

    let plan = builder.finish();
    log::debug!(
        "Allocated {} players ({} dealers) over {} tables: {:?}",
        plan.len(),
        seated_dealers,
        plan.table_count(),
        plan.table_populations()
    );
    Ok(plan)
}

/// Partition into dealers and everyone else, each uniformly shuffled
pub(crate) fn split_shuffled<R: Rng + ?Sized>(
    players: &[SeatingCandidate],
    rng: &mut R,
) -> (Vec<SeatingCandidate>, Vec<SeatingCandidate>) {
    let (mut dealers, mut others): (Vec<_>, Vec<_>) =
        players.iter().copied().partition(|p| p.is_dealer);
    dealers.shuffle(rng);
    others.shuffle(rng);
    (dealers, others)
}

/// Put one dealer in seat 1 of each table, in table order
///
/// # Returns
///
/// * `usize` - How many dealers were placed
pub(crate) fn seat_dealers(
    builder: &mut PlanBuilder,
    dealers: &[SeatingCandidate],
) -> SeatingResult<usize> {
    let seated = dealers.len().min(builder.table_count());
    for (table_idx, dealer) in dealers.iter().take(seated).enumerate() {
        builder.seat(table_idx, *dealer)?;
    }
    Ok(seated)
}

pub(crate) fn validate_capacity(max_seats_per_table: usize) -> SeatingResult<()> {
    if max_seats_per_table < MIN_SEATS_PER_TABLE {
        log::warn!("Rejected table capacity {}", max_seats_per_table);
        return Err(SeatingError::InvalidInput(format!(
            "tables need at least {} seats, got {}",
            MIN_SEATS_PER_TABLE, max_seats_per_table
        )));
    }
    Ok(())
}

pub(crate) fn validate_roster(players: &[SeatingCandidate]) -> SeatingResult<()> {
    if players.is_empty() {
        log::warn!("Rejected empty roster");
        return Err(SeatingError::InvalidInput("no players to seat".to_string()));
    }

    let mut seen = HashSet::with_capacity(players.len());
    if let Some(dup) = players.iter().find(|p| !seen.insert(p.player_id)) {
        return Err(SeatingError::InvalidInput(format!(
            "player {} listed twice",
            dup.player_id
        )));
    }
    Ok(())
}

fn validate_fits(players: usize, table_count: usize, max_seats_per_table: usize) -> SeatingResult<()> {
    if table_count == 0 || players > table_count * max_seats_per_table {
        return Err(SeatingError::InvalidInput(format!(
            "{} players do not fit at {} tables of {}",
            players, table_count, max_seats_per_table
        )));
    }
    Ok(())
}

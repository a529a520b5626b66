//! Seating plans produced by the allocator and rebalancer.

use super::errors::{SeatingError, SeatingResult};
use crate::tournament::{PlayerId, Table};
use serde::{Deserialize, Serialize};

/// Active player as seen by the seating engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatingCandidate {
    pub player_id: PlayerId,
    pub is_dealer: bool,
}

impl SeatingCandidate {
    pub fn new(player_id: PlayerId, is_dealer: bool) -> Self {
        Self {
            player_id,
            is_dealer,
        }
    }
}

/// One player's place in a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub player_id: PlayerId,
    /// Table number, starting at 1
    pub table_number: usize,
    /// Seat number within the table, starting at 1
    pub seat_number: usize,
    pub is_dealer: bool,
}

/// Complete seating for a tournament.
///
/// Seats are ordered by table then seat number. Table numbers run densely
/// from 1 to [`SeatingPlan::table_count`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    table_count: usize,
    max_seats_per_table: usize,
    seats: Vec<Seat>,
}

impl SeatingPlan {
    pub fn table_count(&self) -> usize {
        self.table_count
    }

    pub fn max_seats_per_table(&self) -> usize {
        self.max_seats_per_table
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn into_seats(self) -> Vec<Seat> {
        self.seats
    }

    /// Number of seated players
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Seat of `player_id`, if seated
    pub fn seat_of(&self, player_id: PlayerId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.player_id == player_id)
    }

    /// Seats at one table in seat order
    pub fn players_at(&self, table_number: usize) -> Vec<&Seat> {
        self.seats
            .iter()
            .filter(|s| s.table_number == table_number)
            .collect()
    }

    /// Player count per table, index 0 is table 1
    pub fn table_populations(&self) -> Vec<usize> {
        let mut populations = vec![0; self.table_count];
        for seat in &self.seats {
            populations[seat.table_number - 1] += 1;
        }
        populations
    }

    /// Dealer count per table, index 0 is table 1
    pub fn dealers_per_table(&self) -> Vec<usize> {
        let mut dealers = vec![0; self.table_count];
        for seat in self.seats.iter().filter(|s| s.is_dealer) {
            dealers[seat.table_number - 1] += 1;
        }
        dealers
    }

    /// Whether table populations differ by at most one player
    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.table_populations(), 1)
    }
}

/// Result of a rebalance request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RebalanceOutcome {
    /// Everyone was reseated according to `plan`
    Reseated {
        plan: SeatingPlan,
        /// Tables the caller should delete
        retired_tables: Vec<Table>,
        /// Table numbers the caller should create
        added_tables: Vec<usize>,
    },
    /// Single table with the right player count; current seating stands
    NothingToRebalance,
}

impl RebalanceOutcome {
    pub fn plan(&self) -> Option<&SeatingPlan> {
        match self {
            RebalanceOutcome::Reseated { plan, .. } => Some(plan),
            RebalanceOutcome::NothingToRebalance => None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, RebalanceOutcome::NothingToRebalance)
    }
}

/// Check whether table populations are within `max_diff` of each other
///
/// # Arguments
///
/// * `populations` - Player count per table
/// * `max_diff` - Largest allowed gap between the fullest and emptiest table
pub fn is_balanced(populations: &[usize], max_diff: usize) -> bool {
    match (populations.iter().min(), populations.iter().max()) {
        (Some(min), Some(max)) => max - min <= max_diff,
        _ => true,
    }
}

/// Seat-by-seat builder shared by the allocator and rebalancer.
///
/// Each table fills seat numbers densely from 1 up to its limit.
pub(crate) struct PlanBuilder {
    max_seats_per_table: usize,
    limits: Vec<usize>,
    tables: Vec<Vec<Seat>>,
}

impl PlanBuilder {
    /// Builder where every table may fill to capacity
    pub(crate) fn new(table_count: usize, max_seats_per_table: usize) -> Self {
        Self::with_limits(vec![max_seats_per_table; table_count], max_seats_per_table)
    }

    /// Builder with a per-table fill limit (never above capacity)
    pub(crate) fn with_limits(limits: Vec<usize>, max_seats_per_table: usize) -> Self {
        let limits: Vec<usize> = limits
            .into_iter()
            .map(|l| l.min(max_seats_per_table))
            .collect();
        Self {
            max_seats_per_table,
            tables: limits.iter().map(|&l| Vec::with_capacity(l)).collect(),
            limits,
        }
    }

    pub(crate) fn table_count(&self) -> usize {
        self.tables.len()
    }

    fn has_room(&self, table_idx: usize) -> bool {
        self.tables[table_idx].len() < self.limits[table_idx]
    }

    /// Seat `candidate` in the next free seat of `table_idx`
    pub(crate) fn seat(&mut self, table_idx: usize, candidate: SeatingCandidate) -> SeatingResult<()> {
        if !self.has_room(table_idx) {
            return Err(SeatingError::InvalidInput(format!(
                "table {} is full",
                table_idx + 1
            )));
        }

        let table = &mut self.tables[table_idx];
        table.push(Seat {
            player_id: candidate.player_id,
            table_number: table_idx + 1,
            seat_number: table.len() + 1,
            is_dealer: candidate.is_dealer,
        });
        Ok(())
    }

    /// Seat `candidate` at the first table from `cursor` onward with room
    ///
    /// # Returns
    ///
    /// * `usize` - Cursor for the next round-robin placement
    pub(crate) fn seat_round_robin(
        &mut self,
        cursor: usize,
        candidate: SeatingCandidate,
    ) -> SeatingResult<usize> {
        let count = self.table_count();
        let table_idx = (0..count)
            .map(|offset| (cursor + offset) % count)
            .find(|&idx| self.has_room(idx))
            .ok_or_else(|| {
                SeatingError::InvalidInput(format!(
                    "no free seat left for player {}",
                    candidate.player_id
                ))
            })?;

        self.seat(table_idx, candidate)?;
        Ok((table_idx + 1) % count)
    }

    pub(crate) fn finish(self) -> SeatingPlan {
        SeatingPlan {
            table_count: self.tables.len(),
            max_seats_per_table: self.max_seats_per_table,
            seats: self.tables.into_iter().flatten().collect(),
        }
    }
}

//! Seat assignment history for one tournament.
//!
//! Moving a player never edits an assignment in place: the old row is marked
//! not current and a new row is appended.

use super::{
    errors::{SeatingError, SeatingResult},
    plan::SeatingPlan,
};
use crate::tournament::{PlayerId, SeatAssignment, Table, TournamentId};
use chrono::Utc;
use std::collections::BTreeMap;

/// Append-only seat assignment log
#[derive(Debug, Clone)]
pub struct SeatingLedger {
    tournament_id: TournamentId,
    assignments: Vec<SeatAssignment>,
    next_id: i64,
}

impl SeatingLedger {
    pub fn new(tournament_id: TournamentId) -> Self {
        Self {
            tournament_id,
            assignments: Vec::new(),
            next_id: 1,
        }
    }

    pub fn tournament_id(&self) -> TournamentId {
        self.tournament_id
    }

    /// Supersede every current assignment and record `plan`
    ///
    /// # Returns
    ///
    /// * `usize` - Number of assignments inserted
    pub fn apply_plan(&mut self, plan: &SeatingPlan) -> usize {
        let superseded = self.supersede_where(|_| true);

        for seat in plan.seats() {
            self.insert(seat.player_id, seat.table_number, seat.seat_number);
        }

        log::info!(
            "Tournament {}: applied seating for {} players over {} tables ({} superseded)",
            self.tournament_id,
            plan.len(),
            plan.table_count(),
            superseded
        );
        plan.len()
    }

    /// Move a single player to a specific seat
    pub fn assign(
        &mut self,
        table: &Table,
        player_id: PlayerId,
        seat_number: usize,
    ) -> SeatingResult<&SeatAssignment> {
        if seat_number == 0 || seat_number > table.max_seats {
            return Err(SeatingError::SeatOutOfRange {
                table_number: table.table_number,
                seat_number,
                max_seats: table.max_seats,
            });
        }

        let occupied = self.current_iter().any(|a| {
            a.table_number == table.table_number
                && a.seat_number == seat_number
                && a.player_id != player_id
        });
        if occupied {
            return Err(SeatingError::SeatTaken {
                table_number: table.table_number,
                seat_number,
            });
        }

        self.supersede_where(|a| a.player_id == player_id);
        Ok(self.insert(player_id, table.table_number, seat_number))
    }

    /// Take a player off their table
    pub fn unseat(&mut self, player_id: PlayerId) -> SeatingResult<()> {
        match self.supersede_where(|a| a.player_id == player_id) {
            0 => Err(SeatingError::PlayerNotSeated(player_id)),
            _ => Ok(()),
        }
    }

    /// Clear every seat at the given tables
    ///
    /// # Returns
    ///
    /// * `usize` - Number of players unseated
    pub fn clear_tables(&mut self, table_numbers: &[usize]) -> usize {
        self.supersede_where(|a| table_numbers.contains(&a.table_number))
    }

    /// Current assignments ordered by table and seat
    pub fn current(&self) -> Vec<&SeatAssignment> {
        let mut current: Vec<&SeatAssignment> = self.current_iter().collect();
        current.sort_by_key(|a| (a.table_number, a.seat_number));
        current
    }

    pub fn current_for(&self, player_id: PlayerId) -> Option<&SeatAssignment> {
        self.current_iter().find(|a| a.player_id == player_id)
    }

    /// Current assignments at one table in seat order
    pub fn at_table(&self, table_number: usize) -> Vec<&SeatAssignment> {
        self.current()
            .into_iter()
            .filter(|a| a.table_number == table_number)
            .collect()
    }

    /// Seated player count per table number
    pub fn table_populations(&self) -> BTreeMap<usize, usize> {
        let mut populations = BTreeMap::new();
        for assignment in self.current_iter() {
            *populations.entry(assignment.table_number).or_insert(0) += 1;
        }
        populations
    }

    /// Every assignment ever made, oldest first
    pub fn history(&self) -> &[SeatAssignment] {
        &self.assignments
    }

    fn current_iter(&self) -> impl Iterator<Item = &SeatAssignment> {
        self.assignments.iter().filter(|a| a.is_current)
    }

    fn supersede_where(&mut self, pred: impl Fn(&SeatAssignment) -> bool) -> usize {
        let mut count = 0;
        for assignment in self.assignments.iter_mut().filter(|a| a.is_current) {
            if pred(assignment) {
                assignment.is_current = false;
                count += 1;
            }
        }
        count
    }

    fn insert(&mut self, player_id: PlayerId, table_number: usize, seat_number: usize) -> &SeatAssignment {
        let id = self.next_id;
        self.next_id += 1;
        self.assignments.push(SeatAssignment {
            id,
            tournament_id: self.tournament_id,
            table_number,
            player_id,
            seat_number,
            is_current: true,
            assigned_at: Utc::now(),
        });
        &self.assignments[self.assignments.len() - 1]
    }
}

//! Per-tournament serialization of seating changes.
//!
//! Each tournament's tables, ledger and allocator sit behind their own mutex
//! so "read seating, compute plan, write seating" cannot interleave between
//! two operators. Different tournaments never wait on each other.

use super::{
    allocator::SeatAllocator,
    errors::{SeatingError, SeatingResult},
    ledger::SeatingLedger,
    plan::{RebalanceOutcome, SeatingCandidate, SeatingPlan},
};
use crate::tournament::{PlayerId, SeatAssignment, Table, TableId, TournamentId, TournamentRoster};
use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicI64, Ordering},
    },
};
use tokio::sync::{Mutex, RwLock};

/// Seating state of one tournament
struct TournamentSeating {
    tables: Vec<Table>,
    ledger: SeatingLedger,
    allocator: SeatAllocator,
}

/// Coordinator for seating changes across tournaments
#[derive(Clone)]
pub struct SeatingCoordinator {
    /// Seating state per tournament
    tournaments: Arc<RwLock<HashMap<TournamentId, Arc<Mutex<TournamentSeating>>>>>,

    /// Next table ID handed out when tables are opened
    next_table_id: Arc<AtomicI64>,

    /// Fixed RNG seed for reproducible seatings
    rng_seed: Option<u64>,
}

impl SeatingCoordinator {
    /// Create a coordinator
    ///
    /// # Arguments
    ///
    /// * `rng_seed` - Fixed seed, mixed with the tournament ID, or `None` for OS entropy
    pub fn new(rng_seed: Option<u64>) -> Self {
        Self {
            tournaments: Arc::new(RwLock::new(HashMap::new())),
            next_table_id: Arc::new(AtomicI64::new(1)),
            rng_seed,
        }
    }

    /// Load tables that already exist for a tournament
    pub async fn register_tables(&self, tournament_id: TournamentId, tables: Vec<Table>) {
        if let Some(max_id) = tables.iter().map(|t| t.id).max() {
            self.next_table_id.fetch_max(max_id + 1, Ordering::SeqCst);
        }

        let entry = self.entry(tournament_id).await;
        let mut seating = entry.lock().await;
        seating.tables = tables;
    }

    /// Seat a tournament from scratch, replacing its tables
    pub async fn seat_tournament(
        &self,
        tournament_id: TournamentId,
        players: &[SeatingCandidate],
        max_seats_per_table: usize,
    ) -> SeatingResult<SeatingPlan> {
        let entry = self.entry(tournament_id).await;
        let mut seating = entry.lock().await;

        let plan = seating.allocator.allocate(players, max_seats_per_table)?;

        seating.tables = (1..=plan.table_count())
            .map(|table_number| Table {
                id: self.allocate_table_id(),
                tournament_id,
                table_number,
                max_seats: max_seats_per_table,
            })
            .collect();
        seating.ledger.apply_plan(&plan);

        Ok(plan)
    }

    /// Rebalance a tournament for its current active players
    pub async fn rebalance_tournament(
        &self,
        tournament_id: TournamentId,
        active_players: &[SeatingCandidate],
    ) -> SeatingResult<RebalanceOutcome> {
        let entry = self.existing(tournament_id).await?;
        let mut seating = entry.lock().await;
        self.rebalance_locked(&mut seating, tournament_id, active_players)
    }

    /// Record an elimination and rebalance the remaining field in one step
    ///
    /// Either both the elimination and the new seating are recorded or
    /// neither is: on error the roster and ledger are untouched.
    pub async fn eliminate_and_rebalance(
        &self,
        roster: &mut TournamentRoster,
        player_id: PlayerId,
        position: i64,
    ) -> SeatingResult<RebalanceOutcome> {
        let tournament_id = roster.tournament_id();
        let entry = self.existing(tournament_id).await?;
        let mut guard = entry.lock().await;
        let seating = &mut *guard;

        let mut updated = roster.clone();
        updated.eliminate(player_id, position)?;

        let remaining = updated.seating_candidates();
        let outcome = if remaining.is_empty() {
            RebalanceOutcome::NothingToRebalance
        } else {
            seating.allocator.rebalance(&seating.tables, &remaining)?
        };

        if seating.ledger.current_for(player_id).is_some() {
            seating.ledger.unseat(player_id)?;
        }
        self.commit(seating, tournament_id, &outcome);
        *roster = updated;

        Ok(outcome)
    }

    /// Current seating ordered by table and seat
    pub async fn current_seating(
        &self,
        tournament_id: TournamentId,
    ) -> SeatingResult<Vec<SeatAssignment>> {
        let entry = self.existing(tournament_id).await?;
        let seating = entry.lock().await;
        Ok(seating.ledger.current().into_iter().cloned().collect())
    }

    /// Full assignment history
    pub async fn history(&self, tournament_id: TournamentId) -> SeatingResult<Vec<SeatAssignment>> {
        let entry = self.existing(tournament_id).await?;
        let seating = entry.lock().await;
        Ok(seating.ledger.history().to_vec())
    }

    /// Tables in play
    pub async fn tables(&self, tournament_id: TournamentId) -> SeatingResult<Vec<Table>> {
        let entry = self.existing(tournament_id).await?;
        let seating = entry.lock().await;
        Ok(seating.tables.clone())
    }

    fn rebalance_locked(
        &self,
        seating: &mut TournamentSeating,
        tournament_id: TournamentId,
        active_players: &[SeatingCandidate],
    ) -> SeatingResult<RebalanceOutcome> {
        let outcome = seating.allocator.rebalance(&seating.tables, active_players)?;
        self.commit(seating, tournament_id, &outcome);
        Ok(outcome)
    }

    /// Apply a computed outcome to the tables and ledger
    fn commit(
        &self,
        seating: &mut TournamentSeating,
        tournament_id: TournamentId,
        outcome: &RebalanceOutcome,
    ) {
        if let RebalanceOutcome::Reseated {
            plan,
            retired_tables,
            added_tables,
        } = outcome
        {
            let retired: Vec<usize> = retired_tables.iter().map(|t| t.table_number).collect();
            seating.tables.retain(|t| !retired.contains(&t.table_number));

            let max_seats = plan.max_seats_per_table();
            for &table_number in added_tables {
                let id = self.allocate_table_id();
                seating.tables.push(Table {
                    id,
                    tournament_id,
                    table_number,
                    max_seats,
                });
            }

            seating.ledger.apply_plan(plan);
        }
    }

    async fn entry(&self, tournament_id: TournamentId) -> Arc<Mutex<TournamentSeating>> {
        if let Some(entry) = self.tournaments.read().await.get(&tournament_id) {
            return entry.clone();
        }

        let mut tournaments = self.tournaments.write().await;
        tournaments
            .entry(tournament_id)
            .or_insert_with(|| {
                let seed = self.rng_seed.map(|s| s ^ tournament_id as u64);
                Arc::new(Mutex::new(TournamentSeating {
                    tables: Vec::new(),
                    ledger: SeatingLedger::new(tournament_id),
                    allocator: SeatAllocator::from_seed(seed),
                }))
            })
            .clone()
    }

    async fn existing(&self, tournament_id: TournamentId) -> SeatingResult<Arc<Mutex<TournamentSeating>>> {
        self.tournaments
            .read()
            .await
            .get(&tournament_id)
            .cloned()
            .ok_or(SeatingError::TournamentNotFound(tournament_id))
    }

    fn allocate_table_id(&self) -> TableId {
        self.next_table_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for SeatingCoordinator {
    fn default() -> Self {
        Self::new(None)
    }
}

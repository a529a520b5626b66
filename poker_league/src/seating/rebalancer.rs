//! Reseating after eliminations.
//!
//! When the table count has to change, everyone is reseated from scratch over
//! the new table set. Either way each table is filled to a per-table target so
//! the fullest and emptiest tables differ by at most one player.

use super::{
    allocator::{seat_dealers, split_shuffled, validate_capacity, validate_roster},
    errors::{SeatingError, SeatingResult},
    plan::{PlanBuilder, RebalanceOutcome, SeatingCandidate, SeatingPlan},
};
use crate::tournament::Table;
use rand::Rng;

/// Recompute seating for the remaining players
///
/// # Arguments
///
/// * `current_tables` - Tables in play, all with the same capacity and numbered 1..N
/// * `active_players` - Players still in the tournament
/// * `rng` - Random source for the dealer and player shuffles
///
/// # Returns
///
/// * `SeatingResult<RebalanceOutcome>` - New plan with the tables to retire or
///   add, or [`RebalanceOutcome::NothingToRebalance`] when a single table
///   still fits everyone
pub fn rebalance<R: Rng + ?Sized>(
    current_tables: &[Table],
    active_players: &[SeatingCandidate],
    rng: &mut R,
) -> SeatingResult<RebalanceOutcome> {
    let mut tables = ordered_tables(current_tables)?;
    validate_roster(active_players)?;

    let cap = tables[0].max_seats;
    let current = tables.len();
    let optimal = active_players.len().div_ceil(cap);

    if current <= 1 && optimal == current {
        log::debug!("Single table still fits {} players", active_players.len());
        return Ok(RebalanceOutcome::NothingToRebalance);
    }

    if optimal < current {
        let retired_tables = tables.split_off(optimal);
        log::info!(
            "Breaking {} table(s), reseating {} players at {}",
            retired_tables.len(),
            active_players.len(),
            optimal
        );
        let plan = balance_onto(active_players, optimal, cap, rng)?;
        return Ok(RebalanceOutcome::Reseated {
            plan,
            retired_tables,
            added_tables: Vec::new(),
        });
    }

    if optimal > current {
        log::info!(
            "Opening {} table(s) for {} players",
            optimal - current,
            active_players.len()
        );
        let plan = balance_onto(active_players, optimal, cap, rng)?;
        return Ok(RebalanceOutcome::Reseated {
            plan,
            retired_tables: Vec::new(),
            added_tables: (current + 1..=optimal).collect(),
        });
    }

    let plan = balance_onto(active_players, current, cap, rng)?;
    log::info!(
        "Rebalanced {} players over {} tables: {:?}",
        plan.len(),
        current,
        plan.table_populations()
    );
    Ok(RebalanceOutcome::Reseated {
        plan,
        retired_tables: Vec::new(),
        added_tables: Vec::new(),
    })
}

/// Per-table targets: the first `players % tables` tables take one extra
pub fn table_targets(players: usize, table_count: usize) -> Vec<usize> {
    if table_count == 0 {
        return Vec::new();
    }

    let ideal = players / table_count;
    let extra = players % table_count;
    (0..table_count)
        .map(|idx| if idx < extra { ideal + 1 } else { ideal })
        .collect()
}

/// Seat everyone over a fixed table count, filling each table to its target
fn balance_onto<R: Rng + ?Sized>(
    players: &[SeatingCandidate],
    table_count: usize,
    cap: usize,
    rng: &mut R,
) -> SeatingResult<SeatingPlan> {
    let (mut dealers, others) = split_shuffled(players, rng);
    let mut builder = PlanBuilder::with_limits(table_targets(players.len(), table_count), cap);

    let seated_dealers = seat_dealers(&mut builder, &dealers)?;

    let mut cursor = 0;
    for player in dealers.drain(seated_dealers..).chain(others) {
        cursor = builder.seat_round_robin(cursor, player)?;
    }

    Ok(builder.finish())
}

/// Sort by table number and check the table set is usable
fn ordered_tables(current_tables: &[Table]) -> SeatingResult<Vec<Table>> {
    if current_tables.is_empty() {
        return Err(SeatingError::InvalidInput(
            "rebalancing needs at least one table".to_string(),
        ));
    }

    let mut tables = current_tables.to_vec();
    tables.sort_by_key(|t| t.table_number);

    let cap = tables[0].max_seats;
    validate_capacity(cap)?;
    if let Some(odd) = tables.iter().find(|t| t.max_seats != cap) {
        return Err(SeatingError::InvalidInput(format!(
            "table {} has {} seats, expected {}",
            odd.table_number, odd.max_seats, cap
        )));
    }

    for (idx, table) in tables.iter().enumerate() {
        if table.table_number != idx + 1 {
            return Err(SeatingError::InvalidInput(format!(
                "table numbers must run from 1 without gaps, found {} at position {}",
                table.table_number,
                idx + 1
            )));
        }
    }

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn tables(count: usize, max_seats: usize) -> Vec<Table> {
        (1..=count)
            .map(|n| Table {
                id: 100 + n as i64,
                tournament_id: 1,
                table_number: n,
                max_seats,
            })
            .collect()
    }

    fn roster(total: i64, dealers: i64) -> Vec<SeatingCandidate> {
        (1..=total)
            .map(|id| SeatingCandidate::new(id, id <= dealers))
            .collect()
    }

    #[test]
    fn test_table_targets() {
        assert_eq!(table_targets(7, 3), vec![3, 2, 2]);
        assert_eq!(table_targets(9, 3), vec![3, 3, 3]);
        assert_eq!(table_targets(5, 0), Vec::<usize>::new());
    }

    #[test]
    fn test_same_count_evens_out_tables() {
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = rebalance(&tables(3, 9), &roster(20, 2), &mut rng).unwrap();

        let plan = outcome.plan().unwrap();
        assert_eq!(plan.table_populations(), vec![7, 7, 6]);
        assert_eq!(plan.dealers_per_table(), vec![1, 1, 0]);
        assert!(plan.is_balanced());
    }

    #[test]
    fn test_shrinks_to_optimal_table_count() {
        let mut rng = StdRng::seed_from_u64(2);
        let outcome = rebalance(&tables(3, 9), &roster(7, 3), &mut rng).unwrap();

        match outcome {
            RebalanceOutcome::Reseated {
                plan,
                retired_tables,
                added_tables,
            } => {
                assert_eq!(plan.table_count(), 1);
                assert_eq!(plan.len(), 7);
                let retired: Vec<usize> = retired_tables.iter().map(|t| t.table_number).collect();
                assert_eq!(retired, vec![2, 3]);
                assert!(added_tables.is_empty());
            }
            RebalanceOutcome::NothingToRebalance => panic!("expected reseat"),
        }
    }

    #[test]
    fn test_grows_when_table_overflows() {
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = rebalance(&tables(1, 4), &roster(6, 1), &mut rng).unwrap();

        match outcome {
            RebalanceOutcome::Reseated {
                plan, added_tables, ..
            } => {
                assert_eq!(plan.table_count(), 2);
                assert_eq!(added_tables, vec![2]);
                assert!(plan.table_populations().iter().all(|&n| n <= 4));
            }
            RebalanceOutcome::NothingToRebalance => panic!("expected reseat"),
        }
    }

    #[test]
    fn test_shrinking_keeps_tables_even_with_surplus_dealers() {
        let mut rng = StdRng::seed_from_u64(6);
        let outcome = rebalance(&tables(3, 9), &roster(10, 3), &mut rng).unwrap();

        let plan = outcome.plan().unwrap();
        assert_eq!(plan.table_populations(), vec![5, 5]);
        assert!(plan.players_at(1)[0].is_dealer);
        assert!(plan.players_at(2)[0].is_dealer);
    }

    #[test]
    fn test_single_table_is_noop() {
        let mut rng = StdRng::seed_from_u64(4);
        let outcome = rebalance(&tables(1, 9), &roster(5, 1), &mut rng).unwrap();
        assert!(outcome.is_unchanged());
    }

    #[test]
    fn test_table_order_does_not_matter() {
        let mut shuffled = tables(2, 6);
        shuffled.reverse();

        let a = rebalance(&shuffled, &roster(9, 2), &mut StdRng::seed_from_u64(8)).unwrap();
        let b = rebalance(&tables(2, 6), &roster(9, 2), &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_table_sets() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(rebalance(&[], &roster(3, 0), &mut rng).is_err());

        let mut mixed = tables(2, 9);
        mixed[1].max_seats = 6;
        assert!(rebalance(&mixed, &roster(10, 0), &mut rng).is_err());

        let mut gap = tables(2, 9);
        gap[1].table_number = 3;
        assert!(rebalance(&gap, &roster(10, 0), &mut rng).is_err());

        assert!(rebalance(&tables(2, 9), &[], &mut rng).is_err());
    }
}

/// Property-based tests for seating using proptest
///
/// These tests verify the capacity, completeness, balance and dealer-first
/// guarantees across randomly generated rosters and table sizes.
use poker_league::{
    RebalanceOutcome, SeatingCandidate, SeatingPlan, Table,
    seating::{allocate, rebalance},
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;

// Strategy for a roster of unique players with some dealers among them
fn roster_strategy(max_players: usize) -> impl Strategy<Value = Vec<SeatingCandidate>> {
    prop::collection::vec(any::<bool>(), 1..=max_players).prop_map(|flags| {
        flags
            .into_iter()
            .enumerate()
            .map(|(idx, is_dealer)| SeatingCandidate::new(idx as i64 + 1, is_dealer))
            .collect()
    })
}

fn tables(count: usize, max_seats: usize) -> Vec<Table> {
    (1..=count)
        .map(|table_number| Table {
            id: table_number as i64,
            tournament_id: 1,
            table_number,
            max_seats,
        })
        .collect()
}

// Every player seated once, no table over capacity, seats dense from 1
fn assert_plan_valid(plan: &SeatingPlan, players: &[SeatingCandidate]) -> Result<(), TestCaseError> {
    prop_assert_eq!(plan.len(), players.len());

    let seated: HashSet<i64> = plan.seats().iter().map(|s| s.player_id).collect();
    prop_assert_eq!(seated.len(), players.len());
    for player in players {
        prop_assert!(seated.contains(&player.player_id));
    }

    for table in 1..=plan.table_count() {
        let seats = plan.players_at(table);
        prop_assert!(seats.len() <= plan.max_seats_per_table());
        let numbers: Vec<usize> = seats.iter().map(|s| s.seat_number).collect();
        prop_assert_eq!(numbers, (1..=seats.len()).collect::<Vec<_>>());
    }
    Ok(())
}

// Seat 1 of every table is a dealer whenever there are enough to go round
fn assert_dealers_first(plan: &SeatingPlan, players: &[SeatingCandidate]) -> Result<(), TestCaseError> {
    let dealers = players.iter().filter(|p| p.is_dealer).count();
    for table in 1..=plan.table_count().min(dealers) {
        let seats = plan.players_at(table);
        prop_assert!(seats[0].is_dealer, "table {} seat 1 is not a dealer", table);
    }
    if dealers <= plan.table_count() {
        prop_assert!(plan.dealers_per_table().iter().all(|&d| d <= 1));
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_allocate_seats_everyone_within_capacity(
        players in roster_strategy(40),
        max_seats in 2usize..=12,
        seed in any::<u64>(),
    ) {
        let plan = allocate(&players, max_seats, &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(plan.table_count(), players.len().div_ceil(max_seats));
        assert_plan_valid(&plan, &players)?;
        assert_dealers_first(&plan, &players)?;
    }

    #[test]
    fn test_allocate_is_reproducible(
        players in roster_strategy(27),
        max_seats in 2usize..=10,
        seed in any::<u64>(),
    ) {
        let a = allocate(&players, max_seats, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = allocate(&players, max_seats, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_rebalance_keeps_tables_balanced(
        players in roster_strategy(40),
        max_seats in 2usize..=12,
        table_count in 1usize..=6,
        seed in any::<u64>(),
    ) {
        let current = tables(table_count, max_seats);
        let outcome = rebalance(&current, &players, &mut StdRng::seed_from_u64(seed)).unwrap();

        match outcome {
            RebalanceOutcome::Reseated { plan, retired_tables, added_tables } => {
                prop_assert_eq!(plan.table_count(), players.len().div_ceil(max_seats));
                prop_assert!(plan.is_balanced(), "populations {:?}", plan.table_populations());
                prop_assert_eq!(
                    table_count - retired_tables.len() + added_tables.len(),
                    plan.table_count()
                );
                assert_plan_valid(&plan, &players)?;
                assert_dealers_first(&plan, &players)?;
            }
            RebalanceOutcome::NothingToRebalance => {
                prop_assert_eq!(table_count, 1);
                prop_assert!(players.len() <= max_seats);
            }
        }
    }
}

//! Integration tests for tournament seating.
//!
//! Covers opening seatings, rebalancing after eliminations and replaying a
//! whole tournament night through the roster and ledger.

use poker_league::{
    seating::{SeatingLedger, rebalance},
    Player, RebalanceOutcome, SeatAllocator, SeatingCandidate, Table, TournamentRoster,
};
use rand::{SeedableRng, rngs::StdRng};

/// Roster where players 1..=dealers are dealers
fn candidates(total: i64, dealers: i64) -> Vec<SeatingCandidate> {
    (1..=total)
        .map(|id| SeatingCandidate::new(id, id <= dealers))
        .collect()
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

#[test]
fn test_nine_players_fit_one_table() {
    let plan = SeatAllocator::with_seed(1)
        .allocate(&candidates(9, 3), 9)
        .unwrap();

    assert_eq!(plan.table_count(), 1);
    assert_eq!(plan.len(), 9);

    let seat_one = plan.players_at(1)[0];
    assert_eq!(seat_one.seat_number, 1);
    assert!(seat_one.is_dealer);

    let seat_numbers: Vec<usize> = plan.players_at(1).iter().map(|s| s.seat_number).collect();
    assert_eq!(seat_numbers, (1..=9).collect::<Vec<_>>());
}

#[test]
fn test_nine_players_over_three_tables_of_four() {
    for seed in 0..20 {
        let plan = SeatAllocator::with_seed(seed)
            .allocate(&candidates(9, 3), 4)
            .unwrap();

        assert_eq!(plan.table_count(), 3);
        assert_eq!(plan.table_populations(), vec![3, 3, 3]);
        for table in 1..=3 {
            let seats = plan.players_at(table);
            assert!(seats[0].is_dealer, "seed {seed}: table {table} seat 1");
            assert_eq!(seats.iter().filter(|s| s.is_dealer).count(), 1);
        }
    }
}

#[test]
fn test_shrinking_three_tables_to_one() {
    let mut rng = StdRng::seed_from_u64(3);
    let active = candidates(7, 2);

    let outcome = rebalance(&tables(3, 9), &active, &mut rng).unwrap();

    let RebalanceOutcome::Reseated {
        plan,
        retired_tables,
        added_tables,
    } = outcome
    else {
        panic!("seven players over three tables must be reseated");
    };

    assert_eq!(plan.table_count(), 1);
    assert_eq!(plan.len(), 7);
    assert_eq!(retired_tables, tables(3, 9)[1..].to_vec());
    assert!(added_tables.is_empty());
    for candidate in &active {
        assert_eq!(plan.seat_of(candidate.player_id).unwrap().table_number, 1);
    }
}

#[test]
fn test_rebalance_evens_out_uneven_tables() {
    let mut rng = StdRng::seed_from_u64(11);
    let outcome = rebalance(&tables(2, 9), &candidates(11, 0), &mut rng).unwrap();

    let plan = outcome.plan().unwrap();
    assert_eq!(plan.table_populations(), vec![6, 5]);
}

#[test]
fn test_tournament_night_through_the_ledger() {
    let mut roster = TournamentRoster::new(1);
    for id in 1..=20 {
        roster
            .add_player(&Player::new(id, format!("Player {id}"), id <= 3), None)
            .unwrap();
    }

    let mut allocator = SeatAllocator::with_seed(2024);
    let mut ledger = SeatingLedger::new(1);

    let opening = allocator.allocate(&roster.seating_candidates(), 8).unwrap();
    assert_eq!(opening.table_populations(), vec![7, 7, 6]);
    ledger.apply_plan(&opening);

    let mut table_set = tables(3, 8);
    let mut position = 20;
    while roster.active_count() > 1 {
        let out = roster.seating_candidates()[0].player_id;
        roster.eliminate(out, position).unwrap();
        ledger.unseat(out).unwrap();
        position -= 1;

        let outcome = allocator
            .rebalance(&table_set, &roster.seating_candidates())
            .unwrap();
        if let RebalanceOutcome::Reseated {
            plan,
            retired_tables,
            ..
        } = outcome
        {
            table_set.retain(|t| !retired_tables.contains(t));
            ledger.apply_plan(&plan);
        }

        let populations: Vec<usize> = ledger.table_populations().into_values().collect();
        assert_eq!(populations.len(), table_set.len());
        assert!(poker_league::seating::is_balanced(&populations, 1));
        assert_eq!(ledger.current().len(), roster.active_count());
    }

    let champion = roster.finish().unwrap();
    assert_eq!(roster.get(champion).unwrap().position, Some(1));
    assert_eq!(table_set.len(), 1);
}

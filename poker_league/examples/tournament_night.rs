//! Tournament Night Example
//!
//! Seats a 20 player field, knocks players out one by one with rebalancing
//! after each elimination, and scores the result into a season.

use poker_league::{
    Player, RebalanceOutcome, ScoringRules, SeasonLeaderboard, SeatAllocator, Table,
    TournamentRoster, seating::SeatingLedger,
};

fn main() {
    println!("=== Tournament Night Example ===\n");

    let mut roster = TournamentRoster::new(1);
    for id in 1..=20 {
        let player = Player::new(id, format!("Player {id}"), id <= 3);
        roster.add_player(&player, None).unwrap();
    }

    let mut allocator = SeatAllocator::with_seed(2025);
    let mut ledger = SeatingLedger::new(1);

    let plan = allocator.allocate(&roster.seating_candidates(), 9).unwrap();
    println!("Opening seating: {:?}", plan.table_populations());
    ledger.apply_plan(&plan);

    let mut tables: Vec<Table> = (1..=plan.table_count())
        .map(|table_number| Table {
            id: table_number as i64,
            tournament_id: 1,
            table_number,
            max_seats: 9,
        })
        .collect();

    for position in (2..=20).rev() {
        let out = roster.seating_candidates()[0].player_id;
        roster.eliminate(out, position).unwrap();
        ledger.unseat(out).unwrap();

        match allocator.rebalance(&tables, &roster.seating_candidates()).unwrap() {
            RebalanceOutcome::Reseated {
                plan,
                retired_tables,
                ..
            } => {
                if !retired_tables.is_empty() {
                    println!("Breaking {} table(s) at {} players", retired_tables.len(), plan.len());
                }
                tables.retain(|t| !retired_tables.contains(t));
                ledger.apply_plan(&plan);
            }
            RebalanceOutcome::NothingToRebalance => {}
        }
    }

    let champion = roster.finish().unwrap();
    println!("Champion: Player {}\n", champion);

    let deltas = ScoringRules::default()
        .score(&roster.scoring_entries())
        .unwrap();
    let mut season = SeasonLeaderboard::new("Example Season");
    season.apply(1, &deltas).unwrap();

    println!("Top five:");
    for record in season.standings().iter().take(5) {
        println!("  Player {:>2}: {} points", record.player_id, record.total_points);
    }
    println!("\nSeat assignments recorded: {}", ledger.history().len());
}

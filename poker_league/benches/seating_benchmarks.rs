use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use poker_league::{
    ScoringEntry, ScoringRules, SeatingCandidate, Table,
    seating::{allocate, rebalance},
};
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

/// Roster of `n_players` with one dealer per nine players
fn roster(n_players: i64) -> Vec<SeatingCandidate> {
    (1..=n_players)
        .map(|id| SeatingCandidate::new(id, id % 9 == 1))
        .collect()
}

fn tables(count: usize) -> Vec<Table> {
    (1..=count)
        .map(|table_number| Table {
            id: table_number as i64,
            tournament_id: 1,
            table_number,
            max_seats: 9,
        })
        .collect()
}

/// Benchmark opening seatings across roster sizes
fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    let mut rng = StdRng::seed_from_u64(1);

    for n_players in [9, 18, 27] {
        let players = roster(n_players);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_players", n_players)),
            &players,
            |b, players| {
                b.iter(|| allocate(black_box(players), 9, &mut rng));
            },
        );
    }

    group.finish();
}

/// Benchmark rebalancing three tables as the field shrinks
fn bench_rebalance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebalance");
    let mut rng = StdRng::seed_from_u64(2);
    let current = tables(3);

    for n_players in [26, 20, 12] {
        let players = roster(n_players);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_players", n_players)),
            &players,
            |b, players| {
                b.iter(|| rebalance(black_box(&current), black_box(players), &mut rng));
            },
        );
    }

    group.finish();
}

/// Benchmark scoring a full 27 player field
fn bench_score(c: &mut Criterion) {
    let entries: Vec<ScoringEntry> = (1..=27)
        .map(|id| ScoringEntry {
            player_id: id,
            rebuy_count: (id % 3) as u32,
            position: Some(id),
        })
        .collect();
    let rules = ScoringRules::default();

    c.bench_function("score_27_players", |b| {
        b.iter(|| rules.score(black_box(&entries)));
    });
}

criterion_group!(seating, bench_allocate, bench_rebalance);

criterion_group!(scoring, bench_score);

criterion_main!(seating, scoring);

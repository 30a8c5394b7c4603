//! Benchmarks for club aggregation over roster sizes

use batting_stats::{AggregateStatistic, Club, Player};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a roster with random lines; about one in ten players has none
fn generate_club(size: usize) -> Club {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    Club::new("bench").with_players((0..size).map(|i| {
        let player = Player::new(format!("player-{i}"));
        if rng.gen_ratio(1, 10) {
            player
        } else {
            let at_bats = rng.gen_range(1..700);
            player.with_batting(rng.gen_range(0..=at_bats), at_bats)
        }
    }))
}

fn bench_club_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("club_batting_average");

    for &size in &[26, 1_000, 100_000] {
        let club = generate_club(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &club, |b, club| {
            b.iter(|| black_box(club).batting_average())
        });
    }

    group.finish();
}

fn bench_player_average(c: &mut Criterion) {
    let player = Player::new("bench").with_batting(180, 600);
    c.bench_function("player_batting_average", |b| {
        b.iter(|| black_box(&player).batting_average())
    });
}

criterion_group!(benches, bench_club_average, bench_player_average);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use landfall::board::{DeckKind, DeckPolicy, Deck};
use landfall::config::DriverConfig;
use landfall::dice::{Dice, RngDice};
use landfall::driver::run_games;
use landfall::Simulation;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_dice_roll(c: &mut Criterion) {
    let mut dice = RngDice::seeded(1);
    c.bench_function("dice_roll", |b| b.iter(|| black_box(dice.roll())));
}

fn bench_deck_shuffle(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(2);
    c.bench_function("deck_shuffle", |b| {
        b.iter(|| Deck::shuffled(black_box(DeckKind::Chance), DeckPolicy::Exhaust, &mut rng))
    });
}

fn bench_advance_turn(c: &mut Criterion) {
    let mut sim = Simulation::with_policy(3, DeckPolicy::Recycle);
    c.bench_function("advance_turn", |b| b.iter(|| black_box(sim.advance_turn())));
}

fn bench_game_100_turns(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("game_100_turns", |b| {
        b.iter(|| {
            seed += 1;
            let mut sim = Simulation::seeded(seed);
            sim.advance_turns(100);
            black_box(sim.distribution()[10])
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);
    for threads in [1usize, 4] {
        let config = DriverConfig {
            num_games: 1_000,
            min_turns: 100,
            max_turns: 100,
            threads,
            seed: 42,
            quiet: true,
            ..Default::default()
        };
        group.bench_function(format!("1000_games_{}_threads", threads), |b| {
            b.iter(|| run_games(black_box(&config)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_dice_roll,
    bench_deck_shuffle,
    bench_advance_turn,
    bench_game_100_turns,
    bench_batch,
);

criterion_main!(benches);

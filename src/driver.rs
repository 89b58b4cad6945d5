//! Batch simulation of many independent games.
//!
//! Plays `num_games` games, each for a random number of turns, and sums their
//! landing counts into a [`Distribution`]. Games share nothing, so they run
//! either one after another or across a rayon thread pool; each game's
//! generator is derived from the master seed and the game index, so the
//! aggregate is the same for any thread count.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{space_kind, space_name, BOARD_SIZE};
use crate::config::DriverConfig;
use crate::engine::Simulation;
use crate::error::LandfallError;

/// The outcome of one simulated game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Turns played.
    pub turns: usize,
    /// Dice rolls made.
    pub rolls: u64,
    /// Times the player was sent to jail.
    pub jailings: u64,
    /// Cards drawn from either deck.
    pub cards_drawn: u64,
    /// Landing counts per space.
    pub counts: [u64; BOARD_SIZE],
}

/// Landing counts summed over many games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub counts: [u64; BOARD_SIZE],
    pub games: usize,
    pub turns: u64,
    pub rolls: u64,
    pub jailings: u64,
    pub cards_drawn: u64,
}

impl Default for Distribution {
    fn default() -> Self {
        Distribution {
            counts: [0; BOARD_SIZE],
            games: 0,
            turns: 0,
            rolls: 0,
            jailings: 0,
            cards_drawn: 0,
        }
    }
}

impl Distribution {
    /// Adds one game's results.
    pub fn add(&mut self, game: &GameRecord) {
        for (total, &c) in self.counts.iter_mut().zip(game.counts.iter()) {
            *total += c;
        }
        self.games += 1;
        self.turns += game.turns as u64;
        self.rolls += game.rolls;
        self.jailings += game.jailings;
        self.cards_drawn += game.cards_drawn;
    }

    /// Folds another aggregate into this one.
    pub fn merge(&mut self, other: &Distribution) {
        for (total, &c) in self.counts.iter_mut().zip(other.counts.iter()) {
            *total += c;
        }
        self.games += other.games;
        self.turns += other.turns;
        self.rolls += other.rolls;
        self.jailings += other.jailings;
        self.cards_drawn += other.cards_drawn;
    }

    /// Total landings across all spaces.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Share of all landings on each space. All zeros if nothing landed.
    pub fn frequencies(&self) -> [f64; BOARD_SIZE] {
        let total = self.total();
        let mut out = [0.0; BOARD_SIZE];
        if total == 0 {
            return out;
        }
        for (f, &c) in out.iter_mut().zip(self.counts.iter()) {
            *f = c as f64 / total as f64;
        }
        out
    }

    /// Spaces ordered by landing count, most landed first. Ties keep board order.
    pub fn ranked(&self) -> Vec<(u8, u64)> {
        let mut ranked: Vec<(u8, u64)> = (0..BOARD_SIZE as u8)
            .map(|s| (s, self.counts[s as usize]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    /// Builds the serializable report.
    pub fn report(&self) -> Report {
        let frequencies = self.frequencies();
        Report {
            games: self.games,
            turns: self.turns,
            rolls: self.rolls,
            landings: self.total(),
            jailings: self.jailings,
            cards_drawn: self.cards_drawn,
            spaces: (0..BOARD_SIZE as u8)
                .map(|s| SpaceReport {
                    id: s,
                    name: space_name(s),
                    kind: space_kind(s).label(),
                    count: self.counts[s as usize],
                    frequency: frequencies[s as usize],
                })
                .collect(),
        }
    }
}

/// JSON report of a finished batch.
#[derive(Debug, Serialize)]
pub struct Report {
    pub games: usize,
    pub turns: u64,
    pub rolls: u64,
    pub landings: u64,
    pub jailings: u64,
    pub cards_drawn: u64,
    pub spaces: Vec<SpaceReport>,
}

/// One space's row in a [`Report`].
#[derive(Debug, Serialize)]
pub struct SpaceReport {
    pub id: u8,
    pub name: &'static str,
    pub kind: &'static str,
    pub count: u64,
    pub frequency: f64,
}

/// Returns the generator for game `game_id`.
fn game_rng(config: &DriverConfig, game_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays a single game for a random number of turns in the configured range.
///
/// `config` must already be validated; an inverted turn range panics.
pub(crate) fn play_game(config: &DriverConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let turns = rng.gen_range(config.min_turns..=config.max_turns);
    let mut sim = Simulation::with_policy(rng.gen_range(1..=u64::MAX), config.deck_policy);

    let mut rolls = 0u64;
    let mut jailings = 0u64;
    let mut cards_drawn = 0u64;
    for _ in 0..turns {
        let report = sim.advance_turn();
        rolls += report.rolls as u64;
        cards_drawn += report.cards_drawn as u64;
        if report.jailed {
            jailings += 1;
        }
    }

    GameRecord {
        game_id,
        turns,
        rolls,
        jailings,
        cards_drawn,
        counts: *sim.distribution(),
    }
}

/// Runs the batch and returns the aggregate distribution.
pub fn run_games(config: &DriverConfig) -> Result<Distribution, LandfallError> {
    let mut dist = Distribution::default();
    run_games_with_callback(config, |game| dist.add(&game))?;
    Ok(dist)
}

/// Runs the batch, calling `on_game` with each completed game.
///
/// Games arrive in completion order, which is only the game order when
/// running on one thread.
pub fn run_games_with_callback<F>(config: &DriverConfig, on_game: F) -> Result<(), LandfallError>
where
    F: FnMut(GameRecord) + Send,
{
    config.validate()?;
    info!(
        "simulating {} games of {}..={} turns on {} thread(s), {:?} decks",
        config.num_games, config.min_turns, config.max_turns, config.threads, config.deck_policy
    );
    let start = Instant::now();
    if config.threads > 1 {
        run_parallel(config, on_game)?;
    } else {
        run_sequential(config, on_game);
    }
    info!(
        "finished {} games in {:.2}s",
        config.num_games,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Plays games one at a time on the calling thread.
fn run_sequential<F>(config: &DriverConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let mut rng = game_rng(config, i);
        let game = play_game(config, i, &mut rng);
        if !config.quiet {
            debug!("game {}/{}: {} turns, {} rolls", i + 1, config.num_games, game.turns, game.rolls);
        }
        on_game(game);
    }
}

/// Plays games concurrently on a rayon pool, streaming results back over a
/// channel to the calling thread.
fn run_parallel<F>(config: &DriverConfig, mut on_game: F) -> Result<(), LandfallError>
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();
    let worker_config = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..worker_config.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let mut rng = game_rng(&worker_config, i);
                    let game = play_game(&worker_config, i, &mut rng);
                    if !worker_config.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        debug!(
                            "game {}/{}: {} turns, {} rolls",
                            n, worker_config.num_games, game.turns, game.rolls
                        );
                    }
                    let _ = tx.send(game);
                });
        });
    });

    for game in rx {
        on_game(game);
    }

    if let Err(panic) = handle.join() {
        std::panic::resume_unwind(panic);
    }
    Ok(())
}

/// Writes the report as pretty-printed JSON.
pub fn write_json<W: Write>(dist: &Distribution, out: &mut W) -> Result<(), LandfallError> {
    serde_json::to_writer_pretty(&mut *out, &dist.report())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Renders a text table of every space with a proportional bar.
pub fn render_table(dist: &Distribution) -> String {
    const BAR_WIDTH: u64 = 40;

    let frequencies = dist.frequencies();
    let max = dist.counts.iter().copied().max().unwrap_or(0).max(1);
    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:<22} {:<16} {:>10} {:>7}\n",
        "id", "space", "kind", "landings", "share"
    ));
    for s in 0..BOARD_SIZE as u8 {
        let count = dist.counts[s as usize];
        let bar = "#".repeat((count * BAR_WIDTH / max) as usize);
        out.push_str(&format!(
            "{:>3}  {:<22} {:<16} {:>10} {:>6.2}% {}\n",
            s,
            space_name(s),
            space_kind(s).label(),
            count,
            frequencies[s as usize] * 100.0,
            bar
        ));
    }
    out
}

/// Prints a summary of the batch to stderr.
pub fn print_summary(dist: &Distribution) {
    let games = dist.games.max(1) as f64;
    eprintln!("=== Landing Summary ===");
    eprintln!("Games: {}", dist.games);
    eprintln!("Avg turns/game: {:.1}", dist.turns as f64 / games);
    eprintln!("Avg landings/game: {:.1}", dist.total() as f64 / games);
    eprintln!("Avg jailings/game: {:.2}", dist.jailings as f64 / games);
    eprintln!("Avg cards drawn/game: {:.2}", dist.cards_drawn as f64 / games);
    eprintln!("Most landed:");
    for (space, count) in dist.ranked().into_iter().take(5) {
        eprintln!("  {:>2} {:<22} {}", space, space_name(space), count);
    }
}

//! Landfall -- Monopoly board-occupancy simulator.
//!
//! Plays many independent single-player games, sums how often each space is
//! landed on, and prints the resulting frequency table.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Set `RUST_LOG=debug` for per-game progress.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use env_logger::Env;
use log::info;

use landfall::config::{parse_args, usage, CliOptions};
use landfall::driver::{self, Distribution};
use landfall::error::LandfallError;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", usage());
            process::exit(1);
        }
    };

    if opts.help {
        println!("{}", usage());
        return;
    }

    if let Err(e) = run(&opts) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Runs the batch and writes the table and report.
fn run(opts: &CliOptions) -> Result<(), LandfallError> {
    let dist = driver::run_games(&opts.config)?;

    if !opts.config.quiet {
        driver::print_summary(&dist);
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        out.write_all(driver::render_table(&dist).as_bytes())?;
        out.flush()?;
    }

    if let Some(path) = &opts.output {
        write_report(&dist, path)?;
        info!("wrote report to {}", path.display());
    }
    Ok(())
}

fn write_report(dist: &Distribution, path: &std::path::Path) -> Result<(), LandfallError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    driver::write_json(dist, &mut writer)
}

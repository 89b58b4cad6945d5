//! Landfall -- a Monopoly board-occupancy simulator.
//!
//! Exposes the board layout, card decks, dice, the per-game turn engine, and
//! the batch driver for use by integration tests and the binary entry point.

pub mod board;
pub mod config;
pub mod dice;
pub mod driver;
pub mod engine;
pub mod error;

pub use engine::{Simulation, TurnReport};
pub use error::LandfallError;

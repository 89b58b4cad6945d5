//! Dice sources.
//!
//! The engine rolls through the [`Dice`] trait so games can run on a seeded
//! PRNG or replay a fixed sequence of rolls.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A roll of two six-sided dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll(pub u8, pub u8);

impl Roll {
    pub const fn sum(self) -> u8 {
        self.0 + self.1
    }

    pub const fn is_double(self) -> bool {
        self.0 == self.1
    }
}

/// Something that produces dice rolls.
pub trait Dice {
    /// Rolls two dice, each in `1..=6`.
    fn roll(&mut self) -> Roll;
}

/// Fair dice backed by a PRNG.
#[derive(Debug, Clone)]
pub struct RngDice<R: Rng = SmallRng> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        RngDice { rng }
    }

    /// Mutable access to the generator, used for deck shuffles.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl RngDice<SmallRng> {
    /// Dice seeded from `seed`. Every seed, 0 included, is deterministic.
    pub fn seeded(seed: u64) -> Self {
        RngDice {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        RngDice {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self) -> Roll {
        Roll(self.rng.gen_range(1..=6), self.rng.gen_range(1..=6))
    }
}

/// Replays a fixed list of rolls, then falls back to `fallback`.
///
/// With no fallback, running out of scripted rolls panics.
pub struct ScriptedDice<D: Dice = RngDice> {
    script: VecDeque<Roll>,
    fallback: Option<D>,
}

impl ScriptedDice<RngDice> {
    /// Dice that only ever return `rolls`.
    pub fn new(rolls: &[(u8, u8)]) -> Self {
        ScriptedDice {
            script: rolls.iter().map(|&(a, b)| Roll(a, b)).collect(),
            fallback: None,
        }
    }
}

impl<D: Dice> ScriptedDice<D> {
    /// Dice that return `rolls` first and then defer to `fallback`.
    pub fn then(rolls: &[(u8, u8)], fallback: D) -> Self {
        ScriptedDice {
            script: rolls.iter().map(|&(a, b)| Roll(a, b)).collect(),
            fallback: Some(fallback),
        }
    }

    /// Scripted rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<D: Dice> Dice for ScriptedDice<D> {
    fn roll(&mut self) -> Roll {
        if let Some(roll) = self.script.pop_front() {
            debug_assert!((1..=6).contains(&roll.0) && (1..=6).contains(&roll.1), "bad scripted roll {:?}", roll);
            return roll;
        }
        match self.fallback.as_mut() {
            Some(dice) => dice.roll(),
            None => panic!("scripted dice ran out of rolls"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_dice_stay_in_range() {
        let mut dice = RngDice::seeded(42);
        let mut seen_double = false;
        for _ in 0..1000 {
            let r = dice.roll();
            assert!((1..=6).contains(&r.0));
            assert!((1..=6).contains(&r.1));
            assert!((2..=12).contains(&r.sum()));
            seen_double |= r.is_double();
        }
        assert!(seen_double);
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = RngDice::seeded(9);
        let mut b = RngDice::seeded(9);
        for _ in 0..50 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn seed_zero_is_deterministic() {
        let mut a = RngDice::seeded(0);
        let mut b = RngDice::seeded(0);
        for _ in 0..50 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn scripted_then_fallback() {
        let mut dice = ScriptedDice::then(&[(6, 6), (1, 2)], RngDice::seeded(1));
        assert_eq!(dice.roll(), Roll(6, 6));
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.roll(), Roll(1, 2));
        let r = dice.roll();
        assert!((2..=12).contains(&r.sum()));
    }

    #[test]
    #[should_panic(expected = "ran out")]
    fn scripted_without_fallback_panics_when_empty() {
        let mut dice = ScriptedDice::new(&[(3, 4)]);
        dice.roll();
        dice.roll();
    }
}

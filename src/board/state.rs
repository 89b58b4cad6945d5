//! Per-game player state.
//!
//! Holds the single player's position, jail status, and the running
//! landing counts for every space.

use super::space::{advance, BOARD_SIZE, GO, JAIL};

/// Complete player state for one simulated game.
///
/// `landing_counts` is indexed by space id and only ever incremented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub position: u8,
    pub in_jail: bool,
    /// Consecutive turns spent trying to leave jail. Reset on release.
    pub jail_turns: u8,
    /// Doubles rolled so far in the current free turn.
    pub consecutive_doubles: u8,
    pub landing_counts: [u64; BOARD_SIZE],
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// Creates a state at Go, out of jail, with no landings.
    pub fn new() -> Self {
        GameState {
            position: GO,
            in_jail: false,
            jail_turns: 0,
            consecutive_doubles: 0,
            landing_counts: [0; BOARD_SIZE],
        }
    }

    /// Moves forward by `steps`, wrapping past Go. Does not credit a landing.
    pub fn step(&mut self, steps: u8) {
        self.position = advance(self.position, steps);
    }

    /// Credits one landing on the current space.
    pub fn land(&mut self) {
        debug_assert!((self.position as usize) < BOARD_SIZE, "position {} off the board", self.position);
        self.landing_counts[self.position as usize] += 1;
    }

    /// Sends the player to jail. The jail space is not credited.
    pub fn send_to_jail(&mut self) {
        self.position = JAIL;
        self.in_jail = true;
        self.jail_turns = 0;
    }

    /// Releases the player from jail, leaving the position unchanged.
    pub fn release(&mut self) {
        self.in_jail = false;
        self.jail_turns = 0;
    }

    /// Total landings credited so far.
    pub fn total_landings(&self) -> u64 {
        self.landing_counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_at_go() {
        let state = GameState::new();
        assert_eq!(state.position, GO);
        assert!(!state.in_jail);
        assert_eq!(state.total_landings(), 0);
    }

    #[test]
    fn step_wraps_and_land_credits() {
        let mut state = GameState::new();
        state.step(39);
        state.land();
        state.step(3);
        state.land();
        assert_eq!(state.position, 2);
        assert_eq!(state.landing_counts[39], 1);
        assert_eq!(state.landing_counts[2], 1);
        assert_eq!(state.total_landings(), 2);
    }

    #[test]
    fn jail_round_trip() {
        let mut state = GameState::new();
        state.step(30);
        state.jail_turns = 2;
        state.send_to_jail();
        assert_eq!(state.position, JAIL);
        assert!(state.in_jail);
        assert_eq!(state.jail_turns, 0);
        assert_eq!(state.total_landings(), 0);

        state.jail_turns = 3;
        state.release();
        assert!(!state.in_jail);
        assert_eq!(state.jail_turns, 0);
        assert_eq!(state.position, JAIL);
    }
}

//! The board simulation engine.
//!
//! A [`Simulation`] owns one game's player state, dice, and both card decks,
//! and advances the game one turn at a time. Landing counts accumulate in
//! the [`GameState`] and are read back through [`Simulation::distribution`].

use log::trace;

use crate::board::{
    nearest, retreat, space_name, CardEffect, Deck, DeckKind, DeckPolicy, GameState, BOARD_SIZE,
    GO_TO_JAIL, RAILROADS, UTILITIES,
};
use crate::dice::{Dice, RngDice};

/// Doubles in a single turn that send the player to jail.
pub const MAX_DOUBLES: u8 = 3;

/// Jailed turns after which the player leaves regardless of the roll.
pub const MAX_JAIL_TURNS: u8 = 3;

/// What happened during one call to [`Simulation::advance_turn`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Dice rolls made.
    pub rolls: u32,
    /// Spaces credited in the landing counts.
    pub landings: u32,
    /// Cards drawn from either deck.
    pub cards_drawn: u32,
    /// The player left jail this turn.
    pub released: bool,
    /// The turn ended with the player sent to jail.
    pub jailed: bool,
}

/// Whether a landing left the player free or in jail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Landing {
    Stay,
    Jailed,
}

/// One single-player game on the board.
pub struct Simulation<D: Dice = RngDice> {
    state: GameState,
    dice: D,
    chance: Deck,
    community_chest: Deck,
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::new()
    }
}

impl Simulation {
    /// Creates a game seeded from entropy with exhaustible decks.
    pub fn new() -> Self {
        Simulation::with_dice(RngDice::from_entropy(), DeckPolicy::Exhaust)
    }

    /// Creates a game from `seed` with exhaustible decks.
    ///
    /// Every seed is deterministic; use [`Simulation::new`] for entropy.
    pub fn seeded(seed: u64) -> Self {
        Simulation::with_policy(seed, DeckPolicy::Exhaust)
    }

    /// Creates a game from `seed` with the given deck policy.
    pub fn with_policy(seed: u64, policy: DeckPolicy) -> Self {
        Simulation::with_dice(RngDice::seeded(seed), policy)
    }

    /// Both decks are shuffled from the same generator that drives the dice.
    fn with_dice(mut dice: RngDice, policy: DeckPolicy) -> Self {
        let chance = Deck::shuffled(DeckKind::Chance, policy, dice.rng_mut());
        let community_chest = Deck::shuffled(DeckKind::CommunityChest, policy, dice.rng_mut());
        Simulation::with_parts(dice, chance, community_chest)
    }
}

impl<D: Dice> Simulation<D> {
    /// Creates a game from explicit dice and decks.
    pub fn with_parts(dice: D, chance: Deck, community_chest: Deck) -> Self {
        debug_assert_eq!(chance.kind(), DeckKind::Chance);
        debug_assert_eq!(community_chest.kind(), DeckKind::CommunityChest);
        Simulation {
            state: GameState::new(),
            dice,
            chance,
            community_chest,
        }
    }

    /// Landing counts per space so far.
    pub fn distribution(&self) -> &[u64; BOARD_SIZE] {
        &self.state.landing_counts
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn deck(&self, kind: DeckKind) -> &Deck {
        match kind {
            DeckKind::Chance => &self.chance,
            DeckKind::CommunityChest => &self.community_chest,
        }
    }

    fn deck_mut(&mut self, kind: DeckKind) -> &mut Deck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::CommunityChest => &mut self.community_chest,
        }
    }

    /// Plays one turn.
    pub fn advance_turn(&mut self) -> TurnReport {
        let mut report = TurnReport::default();
        if self.state.in_jail {
            self.jailed_turn(&mut report);
        } else {
            self.free_turn(&mut report);
        }
        debug_assert!((self.state.position as usize) < BOARD_SIZE);
        debug_assert!(self.chance.is_consistent() && self.community_chest.is_consistent());
        report
    }

    /// Plays `turns` turns and returns the combined report.
    pub fn advance_turns(&mut self, turns: usize) -> TurnReport {
        let mut total = TurnReport::default();
        for _ in 0..turns {
            let r = self.advance_turn();
            total.rolls += r.rolls;
            total.landings += r.landings;
            total.cards_drawn += r.cards_drawn;
            total.released |= r.released;
            total.jailed |= r.jailed;
        }
        total
    }

    /// A turn that starts in jail.
    ///
    /// A held card frees the player without a roll and the turn continues as
    /// a normal free turn. Otherwise doubles, or the last allowed attempt,
    /// move the player out by the roll; the release roll never rolls again.
    fn jailed_turn(&mut self, report: &mut TurnReport) {
        self.state.jail_turns += 1;

        if self.use_jail_card() {
            self.state.release();
            report.released = true;
            self.free_turn(report);
            return;
        }

        let roll = self.dice.roll();
        report.rolls += 1;
        if !roll.is_double() && self.state.jail_turns < MAX_JAIL_TURNS {
            return;
        }

        trace!("released from jail after {} turns with {:?}", self.state.jail_turns, roll);
        self.state.release();
        report.released = true;
        self.state.step(roll.sum());
        if self.land(report) == Landing::Jailed {
            report.jailed = true;
        }
    }

    /// A turn that starts out of jail: roll until no doubles, three doubles,
    /// or jail.
    fn free_turn(&mut self, report: &mut TurnReport) {
        self.state.consecutive_doubles = 0;
        loop {
            let roll = self.dice.roll();
            report.rolls += 1;

            if roll.is_double() {
                self.state.consecutive_doubles += 1;
                if self.state.consecutive_doubles >= MAX_DOUBLES {
                    trace!("third double {:?}, going to jail", roll);
                    self.state.send_to_jail();
                    report.jailed = true;
                    return;
                }
            }

            self.state.step(roll.sum());
            if self.land(report) == Landing::Jailed {
                report.jailed = true;
                return;
            }
            if !roll.is_double() {
                return;
            }
        }
    }

    /// Uses a held get-out-of-jail card, Chance first.
    fn use_jail_card(&mut self) -> bool {
        self.chance.use_held() || self.community_chest.use_held()
    }

    /// Credits the current space and applies whatever it does.
    fn land(&mut self, report: &mut TurnReport) -> Landing {
        self.state.land();
        report.landings += 1;

        let position = self.state.position;
        if position == GO_TO_JAIL {
            self.state.send_to_jail();
            return Landing::Jailed;
        }
        match DeckKind::for_space(position) {
            Some(kind) => self.draw_card(kind, report),
            None => Landing::Stay,
        }
    }

    /// Draws from `kind` and applies the card.
    ///
    /// Cards that move the player credit the destination and treat it as a
    /// fresh landing, so it can draw again or hit Go To Jail.
    fn draw_card(&mut self, kind: DeckKind, report: &mut TurnReport) -> Landing {
        let Some(card) = self.deck_mut(kind).draw() else {
            trace!("{} deck is empty, nothing to draw", kind.name());
            return Landing::Stay;
        };
        report.cards_drawn += 1;

        let from = self.state.position;
        let effect = kind.effect(card);
        trace!("drew {} card {} at {}: {:?}", kind.name(), card.id(), space_name(from), effect);

        let destination = match effect {
            CardEffect::GetOutOfJail => {
                self.deck_mut(kind).hold(card);
                return Landing::Stay;
            }
            CardEffect::GoToJail => {
                self.deck_mut(kind).give_back(card);
                self.state.send_to_jail();
                return Landing::Jailed;
            }
            CardEffect::Money => {
                self.deck_mut(kind).give_back(card);
                return Landing::Stay;
            }
            CardEffect::AdvanceTo(space) => space,
            CardEffect::NearestRailroad => nearest(from, &RAILROADS).unwrap_or(from),
            CardEffect::NearestUtility => nearest(from, &UTILITIES).unwrap_or(from),
            CardEffect::GoBack(steps) => retreat(from, steps),
        };

        self.deck_mut(kind).give_back(card);
        self.state.position = destination;
        self.land(report)
    }
}

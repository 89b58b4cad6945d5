//! Chance and Community Chest decks.
//!
//! Each deck holds 16 numbered cards shuffled once at game start. Drawing
//! takes the top card; the card then goes back into the deck's custody
//! according to its [`DeckPolicy`], unless it is a get-out-of-jail card,
//! which is held by the player until used.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::space::{space_kind, SpaceKind, GO};
use crate::error::LandfallError;

/// The number of cards in each deck.
pub const DECK_SIZE: usize = 16;

/// A card identifier in `1..=16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Creates a card from its identifier. Returns None outside `1..=16`.
    pub const fn new(id: u8) -> Option<Card> {
        if id >= 1 && (id as usize) <= DECK_SIZE {
            Some(Card(id))
        } else {
            None
        }
    }

    /// Returns the card identifier.
    pub const fn id(self) -> u8 {
        self.0
    }
}

/// All 16 cards in identifier order.
pub fn all_cards() -> impl Iterator<Item = Card> {
    (1..=DECK_SIZE as u8).map(Card)
}

/// What a card does to the player's position or hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffect {
    /// Kept by the player until a jailed turn uses it.
    GetOutOfJail,
    /// Straight to jail without passing Go.
    GoToJail,
    /// Move directly to the given space.
    AdvanceTo(u8),
    /// Move to the nearest railroad.
    NearestRailroad,
    /// Move to the nearest utility.
    NearestUtility,
    /// Move backwards the given number of spaces.
    GoBack(u8),
    /// Pays or collects money only. No effect on movement.
    Money,
}

/// Which of the two decks a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

impl DeckKind {
    /// Returns the deck drawn from when landing on `space`, if any.
    pub fn for_space(space: u8) -> Option<DeckKind> {
        match space_kind(space) {
            SpaceKind::Chance => Some(DeckKind::Chance),
            SpaceKind::CommunityChest => Some(DeckKind::CommunityChest),
            _ => None,
        }
    }

    /// Returns the lowercase deck name.
    pub const fn name(self) -> &'static str {
        match self {
            DeckKind::Chance => "chance",
            DeckKind::CommunityChest => "community_chest",
        }
    }

    /// Looks up the effect of a card from this deck.
    pub const fn effect(self, card: Card) -> CardEffect {
        match (self, card.0) {
            (_, 1) => CardEffect::GetOutOfJail,
            (_, 2) => CardEffect::GoToJail,
            (_, 3) => CardEffect::AdvanceTo(GO),
            (DeckKind::Chance, 4) => CardEffect::AdvanceTo(24), // Illinois Avenue
            (DeckKind::Chance, 5) => CardEffect::AdvanceTo(11), // St. Charles Place
            (DeckKind::Chance, 6) => CardEffect::AdvanceTo(5),  // Reading Railroad
            (DeckKind::Chance, 7) => CardEffect::AdvanceTo(39), // Boardwalk
            (DeckKind::Chance, 8 | 9) => CardEffect::NearestRailroad,
            (DeckKind::Chance, 10) => CardEffect::NearestUtility,
            (DeckKind::Chance, 11) => CardEffect::GoBack(3),
            _ => CardEffect::Money,
        }
    }
}

/// Where a card goes once it is returned to its deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckPolicy {
    /// Returned cards sit in a discard pile that is never redrawn, so the
    /// deck runs dry after its cards have all been drawn once.
    #[default]
    Exhaust,
    /// Returned cards go to the bottom of the pile.
    Recycle,
}

/// One deck of 16 cards with its draw pile, discards, and held card.
#[derive(Debug, Clone)]
pub struct Deck {
    kind: DeckKind,
    policy: DeckPolicy,
    pile: VecDeque<Card>,
    discard: Vec<Card>,
    held: Option<Card>,
}

impl Deck {
    /// Creates a freshly shuffled deck.
    pub fn shuffled(kind: DeckKind, policy: DeckPolicy, rng: &mut impl Rng) -> Self {
        let mut cards: Vec<Card> = all_cards().collect();
        cards.shuffle(rng);
        Deck {
            kind,
            policy,
            pile: cards.into(),
            discard: Vec::with_capacity(DECK_SIZE),
            held: None,
        }
    }

    /// Creates a deck with a fixed top-to-bottom order.
    ///
    /// `order` must be a permutation of `1..=16`.
    pub fn from_order(kind: DeckKind, policy: DeckPolicy, order: &[u8]) -> Result<Self, LandfallError> {
        let mut seen = [false; DECK_SIZE + 1];
        let mut pile = VecDeque::with_capacity(DECK_SIZE);
        for &id in order {
            let card = Card::new(id).ok_or_else(|| LandfallError::InvalidDeckOrder(order.to_vec()))?;
            if seen[id as usize] {
                return Err(LandfallError::InvalidDeckOrder(order.to_vec()));
            }
            seen[id as usize] = true;
            pile.push_back(card);
        }
        if pile.len() != DECK_SIZE {
            return Err(LandfallError::InvalidDeckOrder(order.to_vec()));
        }
        Ok(Deck {
            kind,
            policy,
            pile,
            discard: Vec::with_capacity(DECK_SIZE),
            held: None,
        })
    }

    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Takes the top card, or None if the pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.pile.pop_front()
    }

    /// Returns a card to the deck's custody.
    pub fn give_back(&mut self, card: Card) {
        match self.policy {
            DeckPolicy::Exhaust => self.discard.push(card),
            DeckPolicy::Recycle => self.pile.push_back(card),
        }
    }

    /// Keeps a drawn card out of circulation until [`Deck::use_held`].
    pub fn hold(&mut self, card: Card) {
        debug_assert!(self.held.is_none(), "{:?} deck already has a held card", self.kind);
        self.held = Some(card);
    }

    /// Returns true if a card from this deck is currently held.
    pub fn has_held(&self) -> bool {
        self.held.is_some()
    }

    /// Uses the held card, returning it to the deck. Returns false if none was held.
    pub fn use_held(&mut self) -> bool {
        match self.held.take() {
            Some(card) => {
                self.give_back(card);
                true
            }
            None => false,
        }
    }

    /// Number of cards left to draw.
    pub fn remaining(&self) -> usize {
        self.pile.len()
    }

    /// Number of cards returned but not redrawable.
    pub fn discarded(&self) -> usize {
        self.discard.len()
    }

    /// Returns true if there is nothing left to draw.
    pub fn is_exhausted(&self) -> bool {
        self.pile.is_empty()
    }

    /// Total cards accounted for: pile, discards, and held card.
    pub fn card_count(&self) -> usize {
        self.pile.len() + self.discard.len() + usize::from(self.held.is_some())
    }

    /// Returns true if every card is in exactly one place.
    pub fn is_consistent(&self) -> bool {
        let mut seen = [false; DECK_SIZE + 1];
        for card in self.pile.iter().chain(self.discard.iter()).chain(self.held.iter()) {
            let idx = card.0 as usize;
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        seen[1..].iter().all(|&s| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const IDENTITY: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

    #[test]
    fn card_range() {
        assert_eq!(Card::new(0), None);
        assert_eq!(Card::new(1).map(Card::id), Some(1));
        assert_eq!(Card::new(16).map(Card::id), Some(16));
        assert_eq!(Card::new(17), None);
    }

    #[test]
    fn deck_for_space() {
        assert_eq!(DeckKind::for_space(7), Some(DeckKind::Chance));
        assert_eq!(DeckKind::for_space(33), Some(DeckKind::CommunityChest));
        assert_eq!(DeckKind::for_space(30), None);
    }

    #[test]
    fn effect_table() {
        let c = |id| Card::new(id).unwrap();
        assert_eq!(DeckKind::Chance.effect(c(1)), CardEffect::GetOutOfJail);
        assert_eq!(DeckKind::Chance.effect(c(2)), CardEffect::GoToJail);
        assert_eq!(DeckKind::Chance.effect(c(3)), CardEffect::AdvanceTo(0));
        assert_eq!(DeckKind::Chance.effect(c(7)), CardEffect::AdvanceTo(39));
        assert_eq!(DeckKind::Chance.effect(c(9)), CardEffect::NearestRailroad);
        assert_eq!(DeckKind::Chance.effect(c(10)), CardEffect::NearestUtility);
        assert_eq!(DeckKind::Chance.effect(c(11)), CardEffect::GoBack(3));
        assert_eq!(DeckKind::Chance.effect(c(16)), CardEffect::Money);
        assert_eq!(DeckKind::CommunityChest.effect(c(1)), CardEffect::GetOutOfJail);
        assert_eq!(DeckKind::CommunityChest.effect(c(2)), CardEffect::GoToJail);
        assert_eq!(DeckKind::CommunityChest.effect(c(3)), CardEffect::AdvanceTo(0));
        assert_eq!(DeckKind::CommunityChest.effect(c(4)), CardEffect::Money);
    }

    #[test]
    fn shuffled_deck_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(7);
        let deck = Deck::shuffled(DeckKind::Chance, DeckPolicy::Exhaust, &mut rng);
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert!(deck.is_consistent());
    }

    #[test]
    fn from_order_rejects_bad_orders() {
        assert!(Deck::from_order(DeckKind::Chance, DeckPolicy::Exhaust, &[1, 2, 3]).is_err());
        let mut dup = IDENTITY;
        dup[15] = 1;
        assert!(Deck::from_order(DeckKind::Chance, DeckPolicy::Exhaust, &dup).is_err());
        let mut out_of_range = IDENTITY;
        out_of_range[0] = 17;
        assert!(Deck::from_order(DeckKind::Chance, DeckPolicy::Exhaust, &out_of_range).is_err());
    }

    #[test]
    fn exhaust_policy_runs_dry() {
        let mut deck = Deck::from_order(DeckKind::Chance, DeckPolicy::Exhaust, &IDENTITY).unwrap();
        for expected in 1..=16u8 {
            let card = deck.draw().unwrap();
            assert_eq!(card.id(), expected);
            deck.give_back(card);
            assert_eq!(deck.card_count(), DECK_SIZE);
        }
        assert!(deck.is_exhausted());
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.discarded(), DECK_SIZE);
    }

    #[test]
    fn recycle_policy_returns_to_bottom() {
        let mut deck = Deck::from_order(DeckKind::Chance, DeckPolicy::Recycle, &IDENTITY).unwrap();
        let first = deck.draw().unwrap();
        deck.give_back(first);
        for expected in 2..=16u8 {
            let card = deck.draw().unwrap();
            assert_eq!(card.id(), expected);
            deck.give_back(card);
        }
        assert_eq!(deck.draw().map(Card::id), Some(1));
    }

    #[test]
    fn held_card_stays_out_until_used() {
        let mut deck = Deck::from_order(DeckKind::CommunityChest, DeckPolicy::Recycle, &IDENTITY).unwrap();
        let card = deck.draw().unwrap();
        deck.hold(card);
        assert!(deck.has_held());
        assert_eq!(deck.remaining(), DECK_SIZE - 1);
        assert_eq!(deck.card_count(), DECK_SIZE);
        assert!(deck.is_consistent());

        assert!(deck.use_held());
        assert!(!deck.has_held());
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert!(!deck.use_held());
    }
}

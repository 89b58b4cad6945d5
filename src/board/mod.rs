//! Board representation and game-state types.
//!
//! Contains the static board layout, the two card decks, and the
//! per-game player state.

pub mod deck;
pub mod space;
pub mod state;

pub use deck::{all_cards, Card, CardEffect, Deck, DeckKind, DeckPolicy, DECK_SIZE};
pub use space::{
    advance, nearest, retreat, space_kind, space_name, spaces_of_kind, SpaceInfo, SpaceKind,
    ALL_SPACE_KINDS, BOARD_SIZE, CHANCE_SPACES, COMMUNITY_CHEST_SPACES, FREE_PARKING, GO,
    GO_TO_JAIL, JAIL, RAILROADS, SPACE_INFO, TAX_SPACES, UTILITIES,
};
pub use state::GameState;

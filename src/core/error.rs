use thiserror::Error;

use super::{Axis, Card};

/// The error type for the hand_odds library.
///
/// Every failure is a static configuration problem: a malformed deck shape,
/// a draw that does not fit in the deck, bad held cards, or a malformed
/// pattern. Retrying the same query can never fix it. A pattern that simply
/// can't be made is not an error, its probability is zero.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvalidConfiguration {
    #[error("Deck must have at least one rank")]
    NoRanks,
    #[error("Deck must have at least one suit")]
    NoSuits,
    #[error("Deck of {0} cards is larger than the 128 cards supported")]
    DeckTooLarge(usize),
    #[error("Drawing {draw} cards with {held} held exceeds the {deck} card deck")]
    DrawTooLarge {
        draw: usize,
        held: usize,
        deck: usize,
    },
    #[error("Held card {0} is outside the deck")]
    CardOutOfRange(Card),
    #[error("Card already held {0}")]
    DuplicateHeldCard(Card),
    #[error("Pattern groups must require at least one card")]
    EmptyGroup,
    #[error("Runs must be at least one rank long")]
    EmptyRun,
    #[error("Named {axis} {index} is outside the deck")]
    NamedIndexOutOfRange { axis: Axis, index: usize },
    #[error("Named {axis} {index} appears more than once")]
    DuplicateNamedIndex { axis: Axis, index: usize },
    #[error("Named card {0} is outside the deck")]
    NamedCardOutOfRange(Card),
    #[error("Named card {0} appears more than once")]
    DuplicateNamedCard(Card),
    #[error("Unknown hand name {0}")]
    UnknownHand(String),
}

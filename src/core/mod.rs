//! This is the core module. It exports the deck shape and the exact
//! arithmetic everything else counts with. Nothing in here knows about
//! poker hands.

/// card.rs has the card and the axis it can be grouped on.
mod card;
/// Re-export Card and Axis
pub use self::card::{Axis, Card};

/// Bitset of card indices.
mod card_set;
/// Export `CardSet` and its iterator.
pub use self::card_set::{CardSet, CardSetIter, MAX_CARDS};

/// Deck shape and held card validation.
mod deck;
/// Export `DeckModel`
pub use self::deck::DeckModel;

/// Pascal's triangle.
mod binomial;
pub use self::binomial::Binomials;

/// Truncated generating functions.
mod series;
pub use self::series::Series;

/// Exact rational results.
mod probability;
pub use self::probability::Probability;

/// Export the error type.
mod error;
/// Everything in there should be public.
pub use self::error::*;

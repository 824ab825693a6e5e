//! Exact probabilities of poker patterns for any deck shape.
//!
//! A deck is `ranks` x `suits` cards. Patterns cover rank and suit
//! multiplicity profiles (pairs, full houses, flushes), runs of ranks
//! (straights, suited or not) and liar's poker style calls on named ranks,
//! suits or cards. Given a pattern, the cards already held, and how many
//! cards get drawn, the engine counts the favorable draws exactly and
//! returns the probability as a fraction in lowest terms.
//!
//! ```
//! use hand_odds::core::{Card, DeckModel, Probability};
//! use hand_odds::odds::Engine;
//! use hand_odds::pattern::HandPattern;
//!
//! let engine = Engine::new(DeckModel::default());
//! let held = [Card::new(0, 0), Card::new(0, 1)];
//! // Trips and nothing else: one of the two remaining cards of rank 0.
//! let p = engine
//!     .probability(&HandPattern::exact_ranks(vec![3]), &held, 1)
//!     .unwrap();
//! assert_eq!(Probability::new(2, 22), p);
//! ```

/// Decks, cards, exact fractions, and the combinatorics underneath.
/// Nothing in core knows about hand patterns.
pub mod core;
/// What to look for.
pub mod pattern;
/// Counting and probability tables.
pub mod odds;

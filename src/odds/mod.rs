//! Exact hand probabilities.
//!
//! The engine counts the draws that make a pattern and divides by the
//! number of possible draws. Nothing is sampled and nothing is rounded; the
//! answer is a `Probability` in lowest terms.
//!
//! ```
//! use hand_odds::core::{DeckModel, Probability};
//! use hand_odds::odds::probability;
//! use hand_odds::pattern::HandPattern;
//!
//! let deck = DeckModel::new(6, 4).unwrap();
//! let p = probability(&deck, &HandPattern::pair(), &[], 2).unwrap();
//! assert_eq!(Probability::new(3, 23), p);
//! ```
use tracing::{Level, event};

use crate::core::{Binomials, Card, DeckModel, InvalidConfiguration, Probability};
use crate::pattern::{HandPattern, Target, compile};

/// Counting for named, at least, patterns.
mod named;
/// Counting for exact profiles.
mod profile;
/// Counting for runs of ranks.
mod run;

/// Whole tables of probabilities.
mod table;
pub use self::table::{ProbabilityTable, Row, TableConfig};

/// Computes probabilities for one deck shape.
///
/// The engine only holds the deck and a binomial table built for it; it
/// never changes after construction, so one engine can answer any number of
/// queries from any number of threads.
#[derive(Debug, Clone)]
pub struct Engine {
    deck: DeckModel,
    binomials: Binomials,
}

impl Engine {
    pub fn new(deck: DeckModel) -> Self {
        Self {
            binomials: Binomials::new(deck.size()),
            deck,
        }
    }

    pub fn deck(&self) -> &DeckModel {
        &self.deck
    }

    /// Number of different draws of `draw_size` cards once `held` is out of
    /// the deck.
    pub fn outcomes(&self, held: &[Card], draw_size: usize) -> Result<u128, InvalidConfiguration> {
        self.deck.validate(held, draw_size)?;
        Ok(self.choose_remaining(held, draw_size))
    }

    /// Number of those draws that, together with `held`, make `pattern`.
    pub fn favorable(
        &self,
        pattern: &HandPattern,
        held: &[Card],
        draw_size: usize,
    ) -> Result<u128, InvalidConfiguration> {
        let target = self.compile(pattern, held, draw_size)?;
        Ok(self.count(&target, held, draw_size))
    }

    /// The probability that `held` plus `draw_size` random cards from the
    /// rest of the deck make `pattern`.
    pub fn probability(
        &self,
        pattern: &HandPattern,
        held: &[Card],
        draw_size: usize,
    ) -> Result<Probability, InvalidConfiguration> {
        let target = self.compile(pattern, held, draw_size)?;
        let favorable = self.count(&target, held, draw_size);
        let outcomes = self.choose_remaining(held, draw_size);
        event!(
            Level::DEBUG,
            %pattern,
            draw_size,
            held = held.len(),
            %favorable,
            %outcomes,
            "probability"
        );
        Ok(Probability::new(favorable, outcomes))
    }

    /// Compiling checks the held cards, so only the draw size is left.
    fn compile(
        &self,
        pattern: &HandPattern,
        held: &[Card],
        draw_size: usize,
    ) -> Result<Target, InvalidConfiguration> {
        let target = compile(&self.deck, pattern, held)?;
        self.deck.check_draw(held.len(), draw_size)?;
        event!(Level::TRACE, ?target, draw_size, "compiled");
        Ok(target)
    }

    fn choose_remaining(&self, held: &[Card], draw_size: usize) -> u128 {
        self.binomials.choose(self.deck.remaining_cards(held), draw_size)
    }

    fn count(&self, target: &Target, held: &[Card], draw_size: usize) -> u128 {
        let b = &self.binomials;
        match target {
            Target::Always => self.choose_remaining(held, draw_size),
            Target::Unsatisfiable => 0,
            Target::Profile(t) => profile::count(t, b, draw_size),
            Target::Run(t) => run::count(t, b, draw_size),
            Target::SuitedRun(t) => run::count_suited(t, b, draw_size),
            Target::Named(t) => named::count(t, b, draw_size),
        }
    }
}

/// One off query. Builds an `Engine` for the deck and asks it.
pub fn probability(
    deck: &DeckModel,
    pattern: &HandPattern,
    held: &[Card],
    draw_size: usize,
) -> Result<Probability, InvalidConfiguration> {
    Engine::new(*deck).probability(pattern, held, draw_size)
}

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{Level, debug_span, event};

use crate::core::{Card, DeckModel, InvalidConfiguration, Probability};
use crate::pattern::{HandPattern, NamedGroup, NamedHand, StandardHand};

use super::Engine;

/// Everything a batch of probabilities needs besides the patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    pub ranks: usize,
    pub suits: usize,
    /// Draw sizes to compute. Sizes that don't fit in the deck once the
    /// held cards are out are skipped.
    pub draw_sizes: RangeInclusive<usize>,
    pub held: Vec<Card>,
}

impl TableConfig {
    /// The deck shape, checked.
    pub fn deck(&self) -> Result<DeckModel, InvalidConfiguration> {
        DeckModel::new(self.ranks, self.suits)
    }
}

impl Default for TableConfig {
    /// The liar's poker deck, every draw size but the whole deck.
    fn default() -> Self {
        Self {
            ranks: 6,
            suits: 4,
            draw_sizes: 1..=23,
            held: vec![],
        }
    }
}

/// One pattern's probability at each draw size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    pub held: Vec<Card>,
    /// `(draw_size, probability)`, smallest draw first.
    pub probabilities: Vec<(usize, Probability)>,
}

impl Row {
    pub fn at(&self, draw_size: usize) -> Option<Probability> {
        self.probabilities
            .iter()
            .find(|(size, _)| *size == draw_size)
            .map(|(_, p)| *p)
    }
}

/// Work for one row. Rows don't depend on each other.
#[derive(Debug, Clone)]
struct Job {
    key: String,
    held: Vec<Card>,
    /// The pattern to look for at each draw size.
    queries: Vec<(usize, HandPattern)>,
}

impl Job {
    fn new<F>(
        key: String,
        held: Vec<Card>,
        deck: &DeckModel,
        draws: &RangeInclusive<usize>,
        pattern: F,
    ) -> Self
    where
        F: Fn(usize) -> HandPattern,
    {
        let most = deck.remaining_cards(&held);
        let queries = draws
            .clone()
            .filter(|&d| d <= most)
            .map(|d| (d, pattern(d)))
            .collect();
        Self { key, held, queries }
    }

    fn run(self, engine: &Engine) -> Result<(String, Row), InvalidConfiguration> {
        let span = debug_span!("row", key = %self.key);
        let _enter = span.enter();

        let probabilities = self
            .queries
            .iter()
            .map(|(draw, pattern)| Ok((*draw, engine.probability(pattern, &self.held, *draw)?)))
            .collect::<Result<Vec<_>, InvalidConfiguration>>()?;
        Ok((
            self.key,
            Row {
                held: self.held,
                probabilities,
            },
        ))
    }
}

/// Probabilities for many patterns, keyed by a stable identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProbabilityTable {
    rows: BTreeMap<String, Row>,
}

impl ProbabilityTable {
    /// Every `StandardHand` at every configured draw size, keyed by the
    /// hand's name.
    ///
    /// ```
    /// use hand_odds::core::Probability;
    /// use hand_odds::odds::{ProbabilityTable, TableConfig};
    ///
    /// let table = ProbabilityTable::standard(&TableConfig::default()).unwrap();
    /// assert_eq!(Some(Probability::new(3, 23)), table.probability("pair", 2));
    /// ```
    pub fn standard(config: &TableConfig) -> Result<Self, InvalidConfiguration> {
        let deck = config.deck()?;
        let engine = Engine::new(deck);
        deck.validate(&config.held, 0)?;

        let jobs = StandardHand::ALL
            .iter()
            .map(|hand| {
                Job::new(
                    hand.name().to_string(),
                    config.held.clone(),
                    &deck,
                    &config.draw_sizes,
                    |draw| hand.pattern(draw),
                )
            })
            .collect();
        Self::run(&engine, jobs)
    }

    /// Any patterns, keyed by their `Display` identifier.
    pub fn patterns(
        config: &TableConfig,
        patterns: &[HandPattern],
    ) -> Result<Self, InvalidConfiguration> {
        let deck = config.deck()?;
        let engine = Engine::new(deck);
        deck.validate(&config.held, 0)?;

        let jobs = patterns
            .iter()
            .map(|pattern| {
                Job::new(
                    pattern.to_string(),
                    config.held.clone(),
                    &deck,
                    &config.draw_sizes,
                    |_| pattern.clone(),
                )
            })
            .collect();
        Self::run(&engine, jobs)
    }

    /// Every complete rank profile of `draw_size` cards that fits in the
    /// deck. Each draw has exactly one profile, so the probabilities add up
    /// to one.
    ///
    /// ```
    /// use hand_odds::core::DeckModel;
    /// use hand_odds::odds::ProbabilityTable;
    ///
    /// let table = ProbabilityTable::profiles(&DeckModel::default(), 2).unwrap();
    /// let keys: Vec<&str> = table.keys().collect();
    /// assert_eq!(vec!["ranks{1,1}", "ranks{2}"], keys);
    /// ```
    pub fn profiles(deck: &DeckModel, draw_size: usize) -> Result<Self, InvalidConfiguration> {
        deck.validate(&[], draw_size)?;
        let engine = Engine::new(*deck);
        let jobs = partitions(draw_size, deck.suits(), deck.ranks())
            .into_iter()
            .map(|groups| {
                let pattern = HandPattern::exact_ranks(groups);
                Job::new(
                    pattern.to_string(),
                    vec![],
                    deck,
                    &(draw_size..=draw_size),
                    |_| pattern.clone(),
                )
            })
            .collect();
        Self::run(&engine, jobs)
    }

    /// Liar's poker calls, with the cards of the call already in hand.
    ///
    /// Every call names its ranks or suits, and the matched cards are held
    /// cards on the named ranks (suit by suit from suit 0) or on the named
    /// suit (rank by rank from rank 0). Keys are `call/matched`, e.g.
    /// `pair/1` or `full_house/3+1`. Calls that don't fit the deck shape
    /// are left out, as are the fully matched ones. `config.held` is held
    /// on top of the matched cards.
    pub fn liars_poker(config: &TableConfig) -> Result<Self, InvalidConfiguration> {
        let deck = config.deck()?;
        let engine = Engine::new(deck);
        deck.validate(&config.held, 0)?;

        let mut jobs = Vec::new();
        for (key, pattern, matched) in liars_poker_calls(&deck) {
            let mut held = config.held.clone();
            held.extend(matched);
            if let Err(e) = deck.validate(&held, 0) {
                event!(Level::DEBUG, %key, ?e, "matched cards clash with held cards");
                return Err(e);
            }
            jobs.push(Job::new(key, held, &deck, &config.draw_sizes, |_| pattern.clone()));
        }
        Self::run(&engine, jobs)
    }

    fn run(engine: &Engine, jobs: Vec<Job>) -> Result<Self, InvalidConfiguration> {
        event!(Level::DEBUG, jobs = jobs.len(), "computing table");

        #[cfg(feature = "parallel")]
        let rows = jobs
            .into_par_iter()
            .map(|job| job.run(engine))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        #[cfg(not(feature = "parallel"))]
        let rows = jobs
            .into_iter()
            .map(|job| job.run(engine))
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self { rows })
    }

    pub fn get(&self, key: &str) -> Option<&Row> {
        self.rows.get(key)
    }

    /// Shortcut for one cell of the table.
    pub fn probability(&self, key: &str, draw_size: usize) -> Option<Probability> {
        self.get(key).and_then(|row| row.at(draw_size))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Row)> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Partitions of `n` into at most `max_parts` parts of at most `max_part`,
/// largest part first.
fn partitions(n: usize, max_part: usize, max_parts: usize) -> Vec<Vec<usize>> {
    fn go(
        n: usize,
        max_part: usize,
        parts_left: usize,
        prefix: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if n == 0 {
            out.push(prefix.clone());
            return;
        }
        if parts_left == 0 {
            return;
        }
        for part in (1..=max_part.min(n)).rev() {
            prefix.push(part);
            go(n - part, part, parts_left - 1, prefix, out);
            prefix.pop();
        }
    }
    let mut out = Vec::new();
    go(n, max_part, max_parts, &mut Vec::new(), &mut out);
    out
}

fn named_ranks(groups: &[(usize, usize)]) -> HandPattern {
    HandPattern::Named(NamedHand::Ranks(
        groups
            .iter()
            .map(|&(rank, at_least)| NamedGroup::new(rank, at_least))
            .collect(),
    ))
}

/// `count` cards of `rank`, from suit 0 up.
fn on_rank(rank: usize, count: usize) -> impl Iterator<Item = Card> {
    (0..count).map(move |suit| Card::new(rank as u8, suit as u8))
}

/// Every liar's poker call that fits the deck, with its matched cards.
fn liars_poker_calls(deck: &DeckModel) -> Vec<(String, HandPattern, Vec<Card>)> {
    let suits = deck.suits();
    let rank_count = deck.ranks();
    let mut calls = Vec::new();

    calls.push(("high_card".to_string(), HandPattern::named_rank(0, 1), vec![]));

    for (name, size) in [("pair", 2), ("three_of_a_kind", 3), ("four_of_a_kind", 4)] {
        if size > suits {
            continue;
        }
        for matched in 0..size {
            calls.push((
                format!("{name}/{matched}"),
                HandPattern::named_rank(0, size),
                on_rank(0, matched).collect(),
            ));
        }
    }

    for (name, first, second) in [("two_pair", 2, 2), ("full_house", 3, 2)] {
        if rank_count < 2 || first > suits || second > suits {
            continue;
        }
        for a in 0..=first {
            for b in 0..=second {
                // Two pair is symmetric, one order is enough.
                if (name == "two_pair" && b > a) || (a == first && b == second) {
                    continue;
                }
                calls.push((
                    format!("{name}/{a}+{b}"),
                    named_ranks(&[(0, first), (1, second)]),
                    on_rank(0, a).chain(on_rank(1, b)).collect(),
                ));
            }
        }
    }

    const RUN: usize = 5;
    if rank_count >= RUN {
        for matched in 0..RUN {
            calls.push((
                format!("straight/{matched}"),
                named_ranks(&[(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]),
                (0..matched).map(|r| Card::new(r as u8, 0)).collect(),
            ));
            calls.push((
                format!("flush/{matched}"),
                HandPattern::Named(NamedHand::Suits(vec![NamedGroup::new(0, RUN)])),
                (0..matched).map(|r| Card::new(r as u8, 0)).collect(),
            ));
            calls.push((
                format!("straight_flush/{matched}"),
                HandPattern::Named(NamedHand::Cards(
                    (0..RUN).map(|r| Card::new(r as u8, 0)).collect(),
                )),
                (0..matched).map(|r| Card::new(r as u8, 0)).collect(),
            ));
        }
    }
    calls
}

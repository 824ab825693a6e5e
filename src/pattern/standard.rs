use std::fmt;
use std::str::FromStr;

use crate::core::InvalidConfiguration;

use super::HandPattern;

/// The usual poker hand categories, as sub-hands of a larger draw.
///
/// Flushes and straights are five cards long, like in regular poker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StandardHand {
    /// Every card a different rank.
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

/// Cards in a straight or a flush.
const FIVE: usize = 5;

impl StandardHand {
    pub const ALL: [StandardHand; 9] = [
        StandardHand::HighCard,
        StandardHand::Pair,
        StandardHand::TwoPair,
        StandardHand::ThreeOfAKind,
        StandardHand::Straight,
        StandardHand::Flush,
        StandardHand::FullHouse,
        StandardHand::FourOfAKind,
        StandardHand::StraightFlush,
    ];

    /// Stable identifier.
    pub fn name(self) -> &'static str {
        match self {
            StandardHand::HighCard => "high_card",
            StandardHand::Pair => "pair",
            StandardHand::TwoPair => "two_pair",
            StandardHand::ThreeOfAKind => "three_of_a_kind",
            StandardHand::Straight => "straight",
            StandardHand::Flush => "flush",
            StandardHand::FullHouse => "full_house",
            StandardHand::FourOfAKind => "four_of_a_kind",
            StandardHand::StraightFlush => "straight_flush",
        }
    }

    /// The pattern for this category when `draw_size` cards make the hand.
    ///
    /// Only high card depends on the draw size: it is the complete profile
    /// with every card on its own rank.
    pub fn pattern(self, draw_size: usize) -> HandPattern {
        match self {
            StandardHand::HighCard => HandPattern::exact_ranks(vec![1; draw_size]),
            StandardHand::Pair => HandPattern::pair(),
            StandardHand::TwoPair => HandPattern::two_pair(),
            StandardHand::ThreeOfAKind => HandPattern::three_of_a_kind(),
            StandardHand::Straight => HandPattern::straight(FIVE),
            StandardHand::Flush => HandPattern::flush(FIVE),
            StandardHand::FullHouse => HandPattern::full_house(),
            StandardHand::FourOfAKind => HandPattern::four_of_a_kind(),
            StandardHand::StraightFlush => HandPattern::straight_flush(FIVE),
        }
    }
}

impl fmt::Display for StandardHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardHand {
    type Err = InvalidConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StandardHand::ALL
            .into_iter()
            .find(|hand| hand.name() == s)
            .ok_or_else(|| InvalidConfiguration::UnknownHand(s.to_string()))
    }
}

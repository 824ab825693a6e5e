//! Declarative descriptions of the hands to look for.
//!
//! A `HandPattern` is a closed set of variants. Counting code matches on it
//! exhaustively (through `compile`), so adding a new kind of pattern means
//! teaching the compiler and the engine about it.
use std::fmt;

use crate::core::{Axis, Card};

/// Turn a pattern plus held cards into something countable.
mod compile;
pub use self::compile::{NamedTarget, ProfileTarget, RunTarget, Target, compile};

/// The usual poker categories.
mod standard;
pub use self::standard::StandardHand;

/// What the lines of an axis outside a profile's groups may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rest {
    /// Nothing else is in the hand. The profile describes every card.
    Empty,
    /// A sub-hand. Every other line may hold any number of cards, zero
    /// included, as long as it is not one of the group multiplicities.
    /// Otherwise a hand with two pairs would be counted twice as "a pair".
    Free,
}

/// An exact multiplicity profile along one axis.
///
/// `groups` is the multiset of line counts that must be present, e.g.
/// `[3, 2]` along `Axis::Rank` is a full house, `[5]` along `Axis::Suit`
/// is a five card flush. "Exact" means a group of 2 is satisfied by a line
/// with exactly two cards of held plus drawn, not three.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub axis: Axis,
    pub groups: Vec<usize>,
    pub rest: Rest,
}

impl Profile {
    /// A complete rank profile.
    pub fn ranks(groups: Vec<usize>) -> Self {
        Self::new(Axis::Rank, groups, Rest::Empty)
    }

    /// A complete suit profile.
    pub fn suits(groups: Vec<usize>) -> Self {
        Self::new(Axis::Suit, groups, Rest::Empty)
    }

    /// Groups are kept largest first so equal profiles compare equal.
    pub fn new(axis: Axis, mut groups: Vec<usize>, rest: Rest) -> Self {
        groups.sort_unstable_by(|a, b| b.cmp(a));
        Self { axis, groups, rest }
    }

    /// The same groups as a sub-hand.
    pub fn free(self) -> Self {
        Self {
            rest: Rest::Free,
            ..self
        }
    }

    /// Cards the groups account for.
    pub fn cards(&self) -> usize {
        self.groups.iter().sum()
    }
}

/// One designated rank or suit that must show up at least `at_least` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedGroup {
    pub index: usize,
    pub at_least: usize,
}

impl NamedGroup {
    pub fn new(index: usize, at_least: usize) -> Self {
        Self { index, at_least }
    }
}

/// Liar's poker style calls. "A pair of jacks" names the rank, and is made
/// by any hand with at least two jacks in it.
///
/// Each variant only names one kind of thing, so the named parts of the
/// deck never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NamedHand {
    Ranks(Vec<NamedGroup>),
    Suits(Vec<NamedGroup>),
    /// Every one of these exact cards.
    Cards(Vec<Card>),
}

/// A hand to compute the probability of.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HandPattern {
    /// Every hand. Probability one.
    Any,
    /// An exact rank or suit multiplicity profile.
    Profile(Profile),
    /// `length` consecutive ranks with at least one card each, all in one
    /// suit if `suited`. Ranks don't wrap around. Other cards are free.
    Run { length: usize, suited: bool },
    /// At least so many of named ranks, suits or cards.
    Named(NamedHand),
}

impl HandPattern {
    /// Exactly one rank with exactly two cards, the rest free.
    pub fn pair() -> Self {
        Self::sub_ranks(vec![2])
    }

    pub fn two_pair() -> Self {
        Self::sub_ranks(vec![2, 2])
    }

    pub fn three_of_a_kind() -> Self {
        Self::sub_ranks(vec![3])
    }

    pub fn full_house() -> Self {
        Self::sub_ranks(vec![3, 2])
    }

    pub fn four_of_a_kind() -> Self {
        Self::sub_ranks(vec![4])
    }

    /// Exactly `length` cards of one suit, the rest free.
    pub fn flush(length: usize) -> Self {
        HandPattern::Profile(Profile::new(Axis::Suit, vec![length], Rest::Free))
    }

    pub fn straight(length: usize) -> Self {
        HandPattern::Run {
            length,
            suited: false,
        }
    }

    pub fn straight_flush(length: usize) -> Self {
        HandPattern::Run {
            length,
            suited: true,
        }
    }

    /// A complete rank profile: these groups and nothing else.
    pub fn exact_ranks(groups: Vec<usize>) -> Self {
        HandPattern::Profile(Profile::ranks(groups))
    }

    /// A rank profile as a sub-hand.
    pub fn sub_ranks(groups: Vec<usize>) -> Self {
        HandPattern::Profile(Profile::ranks(groups).free())
    }

    /// At least `at_least` cards of rank `rank`.
    pub fn named_rank(rank: usize, at_least: usize) -> Self {
        HandPattern::Named(NamedHand::Ranks(vec![NamedGroup::new(rank, at_least)]))
    }
}

fn write_list<T, F>(f: &mut fmt::Formatter<'_>, items: &[T], mut item: F) -> fmt::Result
where
    F: FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    f.write_str("{")?;
    for (i, it) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        item(f, it)?;
    }
    f.write_str("}")
}

/// Stable identifiers, used as keys of probability tables.
///
/// ```
/// use hand_odds::pattern::HandPattern;
///
/// assert_eq!("ranks{3,2}+free", HandPattern::full_house().to_string());
/// assert_eq!("ranks{2,1,1}", HandPattern::exact_ranks(vec![1, 2, 1]).to_string());
/// assert_eq!("suits{5}+free", HandPattern::flush(5).to_string());
/// assert_eq!("suited_run5", HandPattern::straight_flush(5).to_string());
/// assert_eq!("named_ranks{3>=2}", HandPattern::named_rank(3, 2).to_string());
/// ```
impl fmt::Display for HandPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandPattern::Any => f.write_str("any"),
            HandPattern::Profile(profile) => {
                let mut groups = profile.groups.clone();
                groups.sort_unstable_by(|a, b| b.cmp(a));
                write!(f, "{}s", profile.axis)?;
                write_list(f, &groups, |f, g| write!(f, "{g}"))?;
                match profile.rest {
                    Rest::Empty => Ok(()),
                    Rest::Free => f.write_str("+free"),
                }
            }
            HandPattern::Run { length, suited } => {
                if *suited {
                    f.write_str("suited_")?;
                }
                write!(f, "run{length}")
            }
            HandPattern::Named(named) => {
                let (axis, groups) = match named {
                    NamedHand::Ranks(groups) => (Axis::Rank, groups),
                    NamedHand::Suits(groups) => (Axis::Suit, groups),
                    NamedHand::Cards(cards) => {
                        f.write_str("named_cards")?;
                        return write_list(f, cards, |f, c| write!(f, "{c}"));
                    }
                };
                write!(f, "named_{axis}s")?;
                write_list(f, groups, |f, g| write!(f, "{}>={}", g.index, g.at_least))
            }
        }
    }
}

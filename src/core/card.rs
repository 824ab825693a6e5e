use std::fmt;

/// Which of the two card attributes a pattern looks at.
///
/// A deck is a grid of ranks and suits. Every rank is a line of `suits`
/// cards, every suit is a line of `ranks` cards, so most counting code only
/// needs to know which way it is reading the grid.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Group cards by rank. Pairs, trips, full houses.
    Rank,
    /// Group cards by suit. Flushes.
    Suit,
}

impl Axis {
    /// The index of `card` along this axis.
    pub fn of(self, card: Card) -> usize {
        match self {
            Axis::Rank => usize::from(card.rank),
            Axis::Suit => usize::from(card.suit),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Rank => "rank",
            Axis::Suit => "suit",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card of a generalized deck.
///
/// Cards have no face values; a card is identified by its position in the
/// rank by suit grid. Ranks are ordered, which is what runs use. Suits have
/// no meaningful order, it's only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Rank index, starting from 0.
    pub rank: u8,
    /// Suit index, starting from 0.
    pub suit: u8,
}

impl Card {
    pub fn new(rank: u8, suit: u8) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}s{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_compare() {
        let c1 = Card::new(3, 0);
        let c2 = Card::new(4, 0);
        let c3 = Card::new(4, 1);

        assert!(c1 == c1);
        // Ranks order first
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Then suits.
        assert!(c3 > c2);
    }

    #[test]
    fn test_axis_of() {
        let c = Card::new(5, 2);
        assert_eq!(5, Axis::Rank.of(c));
        assert_eq!(2, Axis::Suit.of(c));
    }

    #[test]
    fn test_display() {
        assert_eq!("r5s2", Card::new(5, 2).to_string());
        assert_eq!("suit", Axis::Suit.to_string());
    }

    #[test]
    fn test_size() {
        // Card should be two u8's
        assert!(mem::size_of::<Card>() <= 2);
    }
}

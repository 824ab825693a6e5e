use std::fmt::Debug;
use std::ops::{BitAnd, BitOr};

/// Largest deck a `CardSet` can describe.
pub const MAX_CARDS: usize = 128;

/// This struct is a bitset for cards of a generalized deck.
///
/// Each card is represented by a bit in a 128 bit integer. The bit for a
/// card is its deck index (see `DeckModel::index`), so the same set means
/// different cards in differently shaped decks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardSet {
    cards: u128,
}

impl CardSet {
    /// Create a new empty set
    ///
    /// ```
    /// use hand_odds::core::CardSet;
    /// let cards = CardSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// A set holding every index below `len`.
    ///
    /// ```
    /// use hand_odds::core::CardSet;
    /// let cards = CardSet::full(24);
    /// assert_eq!(24, cards.count());
    /// assert!(cards.contains(23));
    /// assert!(!cards.contains(24));
    /// ```
    pub fn full(len: usize) -> Self {
        let cards = if len >= MAX_CARDS {
            u128::MAX
        } else {
            (1u128 << len) - 1
        };
        Self { cards }
    }

    /// Insert a card index. Returns false if it was already there.
    ///
    /// # Panics
    ///
    /// If `idx` is not below `MAX_CARDS`.
    pub fn insert(&mut self, idx: usize) -> bool {
        assert!(idx < MAX_CARDS, "card index {idx} past {MAX_CARDS}");
        let had = self.contains(idx);
        self.cards |= 1u128 << idx;
        !had
    }

    /// Remove a card index. Returns true if it was there.
    pub fn remove(&mut self, idx: usize) -> bool {
        if !self.contains(idx) {
            return false;
        }
        self.cards &= !(1u128 << idx);
        true
    }

    pub fn contains(&self, idx: usize) -> bool {
        idx < MAX_CARDS && (self.cards & (1u128 << idx)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the set ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn iter(&self) -> CardSetIter {
        CardSetIter { cards: self.cards }
    }
}

impl Debug for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for CardSet {
    type Output = CardSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitAnd for CardSet {
    type Output = CardSet;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl FromIterator<usize> for CardSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = CardSet::new();
        for idx in iter {
            set.insert(idx);
        }
        set
    }
}

/// Iterates the indices of a `CardSet` from lowest to highest.
#[derive(Debug, Clone, Copy)]
pub struct CardSetIter {
    cards: u128,
}

impl Iterator for CardSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cards == 0 {
            return None;
        }
        let idx = self.cards.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.cards &= self.cards - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cards.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for CardSet {
    type Item = usize;
    type IntoIter = CardSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut cards = CardSet::new();
        assert!(cards.insert(17));
        assert!(!cards.insert(17));
        assert!(cards.contains(17));
        assert_eq!(1, cards.count());

        assert!(cards.remove(17));
        assert!(!cards.remove(17));
        assert!(cards.is_empty());
    }

    #[test]
    fn test_high_bits() {
        let mut cards = CardSet::new();
        cards.insert(127);
        cards.insert(64);
        assert_eq!(vec![64, 127], cards.iter().collect::<Vec<_>>());
        assert_eq!(128, CardSet::full(128).count());
        assert!(!cards.contains(200));
    }

    #[test]
    fn test_out_of_range_remove() {
        let mut cards = CardSet::full(128);
        assert!(!cards.remove(128));
        assert!(!cards.remove(usize::MAX));
        assert_eq!(128, cards.count());
    }

    #[test]
    #[should_panic(expected = "card index 128 past 128")]
    fn test_out_of_range_insert() {
        let mut cards = CardSet::new();
        cards.insert(128);
    }

    #[test]
    fn test_iter_ordered() {
        let cards: CardSet = [9, 1, 40, 3].into_iter().collect();
        assert_eq!(vec![1, 3, 9, 40], cards.into_iter().collect::<Vec<_>>());
        assert_eq!((4, Some(4)), cards.iter().size_hint());
    }

    #[test]
    fn test_bit_ops() {
        let a: CardSet = (0..6).collect();
        let b: CardSet = (4..10).collect();
        assert_eq!(2, (a & b).count());
        assert_eq!(10, (a | b).count());
    }
}

use crate::core::card::{Axis, Card};
use crate::core::card_set::{CardSet, MAX_CARDS};
use crate::core::error::InvalidConfiguration;

/// The shape of a generalized deck: `ranks` x `suits`, with every rank and
/// suit combination present exactly once.
///
/// A standard deck is `DeckModel::new(13, 4)`. The default is the 24 card
/// liar's poker deck (nine through ace in four suits).
///
/// Only serializes. Deserialize a `TableConfig` instead, which checks the
/// shape when it builds its deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeckModel {
    ranks: usize,
    suits: usize,
}

impl DeckModel {
    /// Create a deck shape.
    ///
    /// ```
    /// use hand_odds::core::{DeckModel, InvalidConfiguration};
    ///
    /// assert_eq!(52, DeckModel::new(13, 4).unwrap().size());
    /// assert_eq!(Err(InvalidConfiguration::NoSuits), DeckModel::new(13, 0));
    /// ```
    pub fn new(ranks: usize, suits: usize) -> Result<Self, InvalidConfiguration> {
        if ranks == 0 {
            return Err(InvalidConfiguration::NoRanks);
        }
        if suits == 0 {
            return Err(InvalidConfiguration::NoSuits);
        }
        let size = ranks.saturating_mul(suits);
        if size > MAX_CARDS {
            return Err(InvalidConfiguration::DeckTooLarge(size));
        }
        Ok(Self { ranks, suits })
    }

    pub fn ranks(&self) -> usize {
        self.ranks
    }

    pub fn suits(&self) -> usize {
        self.suits
    }

    /// Total number of cards in the deck.
    pub fn size(&self) -> usize {
        self.ranks * self.suits
    }

    /// How many lines there are along an axis. (ranks for `Axis::Rank`)
    pub fn lines(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rank => self.ranks,
            Axis::Suit => self.suits,
        }
    }

    /// How many cards sit on each line of an axis. Every rank has one card
    /// per suit and the other way around.
    pub fn line_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rank => self.suits,
            Axis::Suit => self.ranks,
        }
    }

    /// Is this card part of the deck ?
    pub fn contains(&self, card: Card) -> bool {
        usize::from(card.rank) < self.ranks && usize::from(card.suit) < self.suits
    }

    /// The position of a card in the deck, rank major.
    /// The card must be in the deck.
    pub fn index(&self, card: Card) -> usize {
        usize::from(card.rank) * self.suits + usize::from(card.suit)
    }

    /// The card at a deck position.
    pub fn card(&self, idx: usize) -> Card {
        // The deck is at most 128 cards so both fit in a u8.
        Card::new((idx / self.suits) as u8, (idx % self.suits) as u8)
    }

    /// Every card in the deck, in index order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        (0..self.size()).map(|idx| self.card(idx))
    }

    /// Turn held cards into a `CardSet`, checking that every card belongs
    /// to this deck and that none is held twice.
    pub fn held_set(&self, held: &[Card]) -> Result<CardSet, InvalidConfiguration> {
        let mut set = CardSet::new();
        for &card in held {
            if !self.contains(card) {
                return Err(InvalidConfiguration::CardOutOfRange(card));
            }
            if !set.insert(self.index(card)) {
                return Err(InvalidConfiguration::DuplicateHeldCard(card));
            }
        }
        Ok(set)
    }

    /// Check that `draw_size` more cards can be drawn on top of `held`.
    ///
    /// ```
    /// use hand_odds::core::{Card, DeckModel, InvalidConfiguration};
    ///
    /// let deck = DeckModel::default();
    /// let held = [Card::new(0, 0), Card::new(0, 1)];
    /// assert!(deck.validate(&held, 22).is_ok());
    /// assert_eq!(
    ///     Err(InvalidConfiguration::DrawTooLarge { draw: 23, held: 2, deck: 24 }),
    ///     deck.validate(&held, 23)
    /// );
    /// ```
    pub fn validate(&self, held: &[Card], draw_size: usize) -> Result<(), InvalidConfiguration> {
        self.held_set(held)?;
        self.check_draw(held.len(), draw_size)
    }

    /// The draw size half of `validate`, for held cards already checked.
    pub(crate) fn check_draw(
        &self,
        held: usize,
        draw_size: usize,
    ) -> Result<(), InvalidConfiguration> {
        if draw_size.saturating_add(held) > self.size() {
            return Err(InvalidConfiguration::DrawTooLarge {
                draw: draw_size,
                held,
                deck: self.size(),
            });
        }
        Ok(())
    }

    /// Cards left to draw from once `held` is out of the deck.
    pub fn remaining_cards(&self, held: &[Card]) -> usize {
        self.size().saturating_sub(held.len())
    }

    /// Count held cards on every line of an axis.
    pub(crate) fn held_per_line(&self, axis: Axis, held: &[Card]) -> Vec<usize> {
        let mut counts = vec![0; self.lines(axis)];
        for &card in held {
            counts[axis.of(card)] += 1;
        }
        counts
    }
}

impl Default for DeckModel {
    fn default() -> Self {
        Self { ranks: 6, suits: 4 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        let deck = DeckModel::new(6, 4).unwrap();
        assert_eq!(24, deck.size());
        assert_eq!(deck, DeckModel::default());
        assert_eq!(6, deck.lines(Axis::Rank));
        assert_eq!(4, deck.line_len(Axis::Rank));
        assert_eq!(6, deck.line_len(Axis::Suit));
    }

    #[test]
    fn test_bad_shapes() {
        assert_eq!(Err(InvalidConfiguration::NoRanks), DeckModel::new(0, 4));
        assert_eq!(Err(InvalidConfiguration::NoSuits), DeckModel::new(4, 0));
        assert_eq!(
            Err(InvalidConfiguration::DeckTooLarge(130)),
            DeckModel::new(13, 10)
        );
        assert!(DeckModel::new(32, 4).is_ok());
    }

    #[test]
    fn test_index_round_trip() {
        let deck = DeckModel::new(13, 4).unwrap();
        for (idx, card) in deck.cards().enumerate() {
            assert_eq!(idx, deck.index(card));
            assert!(deck.contains(card));
        }
        assert_eq!(52, deck.cards().count());
        assert!(!deck.contains(Card::new(13, 0)));
        assert!(!deck.contains(Card::new(0, 4)));
    }

    #[test]
    fn test_validate_out_of_range() {
        let deck = DeckModel::default();
        let bad = Card::new(6, 0);
        assert_eq!(
            Err(InvalidConfiguration::CardOutOfRange(bad)),
            deck.validate(&[bad], 1)
        );
        let bad_suit = Card::new(0, 4);
        assert_eq!(
            Err(InvalidConfiguration::CardOutOfRange(bad_suit)),
            deck.validate(&[Card::new(0, 0), bad_suit], 1)
        );
    }

    #[test]
    fn test_validate_duplicate() {
        let deck = DeckModel::default();
        let c = Card::new(2, 3);
        assert_eq!(
            Err(InvalidConfiguration::DuplicateHeldCard(c)),
            deck.validate(&[c, Card::new(1, 1), c], 0)
        );
    }

    #[test]
    fn test_validate_draw() {
        let deck = DeckModel::default();
        assert!(deck.validate(&[], 24).is_ok());
        assert!(deck.validate(&[], 0).is_ok());
        assert_eq!(
            Err(InvalidConfiguration::DrawTooLarge {
                draw: 25,
                held: 0,
                deck: 24
            }),
            deck.validate(&[], 25)
        );
        assert_eq!(22, deck.remaining_cards(&[Card::new(0, 0), Card::new(1, 0)]));
    }

    #[test]
    fn test_held_per_line() {
        let deck = DeckModel::default();
        let held = [Card::new(0, 0), Card::new(0, 1), Card::new(3, 1)];
        assert_eq!(vec![2, 0, 0, 1, 0, 0], deck.held_per_line(Axis::Rank, &held));
        assert_eq!(vec![1, 2, 0, 0], deck.held_per_line(Axis::Suit, &held));
    }
}

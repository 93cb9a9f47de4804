use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use crate::card::{Card, Rank, Suit};
use crate::error::GameError;

/// An ordered single deck of 52 unique cards. Cards leave from the top
/// (the end of the sequence) and never return; every round starts from a
/// freshly shuffled deck.
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full deck in uniformly random order.
    pub fn new() -> Self {
        Self::shuffled(&mut SmallRng::from_entropy())
    }

    /// A full deck shuffled from a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::shuffled(&mut SmallRng::seed_from_u64(seed))
    }

    fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.shuffle(rng);
        Deck { cards }
    }

    /// A deck with a fixed card order. The last card is the top of the
    /// deck and is drawn first. Used to script deals.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    /// Removes and returns the top card.
    pub fn draw_one(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fresh_deck_holds_all_52_cards() {
        let deck = Deck::new();
        assert_eq!(deck.size(), 52);
        let mut unique = HashSet::new();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(suit, rank);
                assert!(deck.contains(card));
                unique.insert(card);
            }
        }
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn drawing_removes_cards_without_repeats() {
        let mut deck = Deck::seeded(7);
        let mut drawn = HashSet::new();
        for k in 1..=52 {
            let card = deck.draw_one().unwrap();
            assert!(drawn.insert(card), "duplicate draw: {card}");
            assert!(!deck.contains(card));
            assert_eq!(deck.size(), 52 - k);
        }
    }

    #[test]
    fn empty_deck_fails_explicitly() {
        let mut deck = Deck::stacked(vec![]);
        assert_eq!(deck.draw_one(), Err(GameError::DeckExhausted));
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let mut a = Deck::seeded(42);
        let mut b = Deck::seeded(42);
        for _ in 0..52 {
            assert_eq!(a.draw_one().unwrap(), b.draw_one().unwrap());
        }
    }

    #[test]
    fn stacked_deck_draws_from_the_top() {
        let ace = Card::new(Suit::Spades, Rank::Ace);
        let king = Card::new(Suit::Hearts, Rank::King);
        let mut deck = Deck::stacked(vec![king, ace]);
        assert_eq!(deck.draw_one().unwrap(), ace);
        assert_eq!(deck.draw_one().unwrap(), king);
    }
}

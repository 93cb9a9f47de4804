use crate::card::Card;
use crate::hand::Hand;

pub const DEALER_NAME: &str = "Dealer";

/// A seat at the table: a display name plus the hand it owns. The player
/// and the dealer share this shape; only the dealer's draw policy differs,
/// and that lives with hand valuation.
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    hand: Hand,
}

impl Participant {
    /// The human player. The name is requested once per session and
    /// persists across rounds.
    pub fn player(name: impl Into<String>) -> Self {
        Participant {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    pub fn dealer() -> Self {
        Participant {
            name: DEALER_NAME.to_string(),
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Empties the hand for a new round. The name is kept.
    pub fn reset(&mut self) {
        self.hand.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn reset_clears_cards_but_keeps_the_name() {
        let mut player = Participant::player("Ada");
        player.add_card(Card::new(Suit::Hearts, Rank::Ace));
        player.add_card(Card::new(Suit::Clubs, Rank::King));
        assert_eq!(player.hand().len(), 2);
        player.reset();
        assert!(player.hand().is_empty());
        assert_eq!(player.name(), "Ada");
    }

    #[test]
    fn dealer_has_the_fixed_name() {
        assert_eq!(Participant::dealer().name(), DEALER_NAME);
    }
}

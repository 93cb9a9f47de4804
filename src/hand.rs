use crate::card::{Card, Rank};

/// The dealer draws while below this total and stands at or above it.
pub const DEALER_STAND: u8 = 17;

/// One participant's cards for the current round. Order matters: the
/// valuation walks the cards in the order they were dealt.
#[derive(Debug, Default, Clone)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Hand value under the running-total ace rule: cards are summed left
    /// to right, and an ace counts 11 only when the total accumulated so
    /// far is below 11, otherwise 1. Each ace is judged against the cards
    /// before it, not the final total, so [9, A, A] is 21 while an optimal
    /// count would also reach 21 by different assignments. This exact
    /// behavior is load-bearing for compatibility; do not replace it with
    /// whole-hand ace demotion.
    pub fn total(&self) -> u8 {
        let mut total: u8 = 0;
        for card in &self.cards {
            total += match card.rank {
                Rank::Ace => {
                    if total < 11 {
                        11
                    } else {
                        1
                    }
                }
                rank => rank.pips(),
            };
        }
        total
    }

    pub fn is_busted(&self) -> bool {
        self.total() > 21
    }

    /// True for any 21-valued hand, not just a natural two-card one.
    /// Multi-card 21s count as blackjack here on purpose.
    pub fn is_blackjack(&self) -> bool {
        self.total() == 21
    }

    pub fn dealer_should_stop(&self) -> bool {
        self.total() >= DEALER_STAND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn hand(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.push(Card::new(Suit::Spades, rank));
        }
        hand
    }

    #[test]
    fn numerals_and_faces_sum_directly() {
        assert_eq!(hand(&[Rank::Two, Rank::Nine]).total(), 11);
        assert_eq!(hand(&[Rank::Jack, Rank::Queen]).total(), 20);
        assert_eq!(hand(&[Rank::King, Rank::Queen, Rank::Five]).total(), 25);
    }

    #[test]
    fn lone_ace_is_eleven() {
        assert_eq!(hand(&[Rank::Ace]).total(), 11);
    }

    #[test]
    fn second_ace_drops_to_one() {
        assert_eq!(hand(&[Rank::Ace, Rank::Ace]).total(), 12);
    }

    #[test]
    fn ace_king_is_twenty_one() {
        assert_eq!(hand(&[Rank::Ace, Rank::King]).total(), 21);
        assert!(hand(&[Rank::Ace, Rank::King]).is_blackjack());
    }

    #[test]
    fn ace_value_depends_on_cards_before_it() {
        // The ace sees only the running total at its position.
        assert_eq!(hand(&[Rank::Nine, Rank::Ace, Rank::Ace]).total(), 21);
        assert_eq!(hand(&[Rank::Ace, Rank::Nine, Rank::Ace]).total(), 21);
        // An early ace keeps its 11 even when later cards bust the hand.
        assert_eq!(hand(&[Rank::Ten, Rank::Ace, Rank::Five]).total(), 26);
        assert_eq!(hand(&[Rank::Ace, Rank::Seven, Rank::Nine]).total(), 27);
    }

    #[test]
    fn bust_boundary() {
        assert!(!hand(&[Rank::King, Rank::Jack, Rank::Ace]).is_busted()); // 21
        assert!(hand(&[Rank::King, Rank::Jack, Rank::Two]).is_busted()); // 22
    }

    #[test]
    fn multi_card_twenty_one_counts_as_blackjack() {
        assert!(hand(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_blackjack());
        assert!(!hand(&[Rank::Ten, Rank::Ten]).is_blackjack());
    }

    #[test]
    fn dealer_stops_at_seventeen() {
        assert!(!hand(&[Rank::Ten, Rank::Six]).dealer_should_stop()); // 16
        assert!(hand(&[Rank::Ten, Rank::Seven]).dealer_should_stop()); // 17
        assert!(hand(&[Rank::Ten, Rank::King]).dealer_should_stop()); // 20
    }

    #[test]
    fn clearing_empties_the_hand() {
        let mut hand = hand(&[Rank::Ace, Rank::King]);
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.total(), 0);
    }
}

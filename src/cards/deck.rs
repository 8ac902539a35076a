use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// Deck extends much of Hand functionality, with ability to remove cards from itself. Uniform selection without replacement via ::draw().
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// remove a uniformly random card from the deck
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        assert!(self.0.size() > 0);
        let i = rng.random_range(0..self.0.size());
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.remove(card);
        card
    }

    /// remove N random cards from the deck
    pub fn deal<const N: usize>(&mut self, rng: &mut impl Rng) -> [Card; N] {
        std::array::from_fn(|_| self.draw(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draws_are_distinct() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        let mut seen = Hand::empty();
        for _ in 0..52 {
            let card = deck.draw(rng);
            assert!(!seen.contains(&card));
            seen = Hand::add(seen, Hand::from(vec![card]));
        }
        assert_eq!(seen.size(), 52);
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn deal_consumes_deck() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut deck = Deck::new();
        let cards = deck.deal::<6>(rng);
        assert_eq!(deck.size(), 46);
        for card in cards {
            assert!(!Hand::from(deck).contains(&card));
        }
    }
}

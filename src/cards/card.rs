#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// long form used by RoundEnv::render
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// the rank cycles fastest, the suit is the 13-card block
/// Td
/// 8
/// 0b00001000
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank) + u8::from(c.suit) * 13
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n % 13),
            suit: Suit::from(n / 13),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
/// Td
/// xxxxxxxxxxxx 0000000000000000000000000000000000000000000100000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self::from(n.trailing_zeros() as u8)
    }
}

/// str isomorphism
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        assert!(s.len() == 2, "Invalid card str: {}", s);
        Self {
            rank: Rank::from(&s[0..1]),
            suit: Suit::from(&s[1..2]),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

use super::rank::Rank;
use super::suit::Suit;
use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let card = Card::from("Th");
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn rank_cycles_fastest() {
        let card = Card::from(27u8);
        assert!(card.rank() == Rank::Three);
        assert!(card.suit() == Suit::Heart);
        assert!(u8::from(Card::from("2d")) == 0);
        assert!(u8::from(Card::from("As")) == 51);
    }

    #[test]
    fn long_names() {
        assert!(Card::from("Ks").name() == "King of Spades");
        assert!(Card::from("2d").name() == "Two of Diamonds");
    }
}

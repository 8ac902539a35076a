use crate::cards::hand::Hand;
use crate::cards::strength::Strength;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Player,
    Push,
    Dealer,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Outcome::Player => write!(f, "{}", "PLAYER WINS".green()),
            Outcome::Push => write!(f, "{}", "PUSH".yellow()),
            Outcome::Dealer => write!(f, "{}", "DEALER WINS".red()),
        }
    }
}

/// Heads-up showdown between the player's and the dealer's final hands.
/// Each side is classified independently; the total order on Strength
/// settles both cross-category and same-category comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Showdown {
    player: Strength,
    dealer: Strength,
}

impl From<(Hand, Hand)> for Showdown {
    fn from((player, dealer): (Hand, Hand)) -> Self {
        Self {
            player: Strength::from(player),
            dealer: Strength::from(dealer),
        }
    }
}

impl Showdown {
    pub fn outcome(&self) -> Outcome {
        match self.player.cmp(&self.dealer) {
            Ordering::Greater => Outcome::Player,
            Ordering::Equal => Outcome::Push,
            Ordering::Less => Outcome::Dealer,
        }
    }
    pub fn player(&self) -> Strength {
        self.player
    }
    pub fn dealer(&self) -> Strength {
        self.dealer
    }
}

use colored::*;
use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn outcome(player: &str, dealer: &str) -> Outcome {
        Showdown::from((Hand::from(player), Hand::from(dealer))).outcome()
    }

    #[test]
    fn straight_flush_over_high_card() {
        assert_eq!(outcome("Qs Ks As", "2d 3c 5h"), Outcome::Player);
    }

    #[test]
    fn straight_flush_over_three_oak() {
        assert_eq!(outcome("5d 5c 5h", "Ts Js Qs"), Outcome::Dealer);
    }

    #[test]
    fn identical_rank_sets_push() {
        assert_eq!(outcome("3d 7c 9h", "3s 7d 9c"), Outcome::Push);
    }

    #[test]
    fn higher_category_always_wins() {
        // the dealer's stronger category must win, not push, even though
        // the player is classified first
        assert_eq!(outcome("Ad Kc Jh", "2d 2c 3h"), Outcome::Dealer);
        assert_eq!(outcome("2d 2c 3h", "2s 5s 7s"), Outcome::Dealer);
        assert_eq!(outcome("As Ks 9s", "2d 3c 4h"), Outcome::Dealer);
    }

    #[test]
    fn swapping_hands_inverts_outcome() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let mut deck = Deck::new();
            let a = Hand::from(deck.deal::<3>(rng).to_vec());
            let b = Hand::from(deck.deal::<3>(rng).to_vec());
            let forward = Showdown::from((a, b)).outcome();
            let reverse = Showdown::from((b, a)).outcome();
            match forward {
                Outcome::Player => assert_eq!(reverse, Outcome::Dealer),
                Outcome::Push => assert_eq!(reverse, Outcome::Push),
                Outcome::Dealer => assert_eq!(reverse, Outcome::Player),
            }
        }
    }
}

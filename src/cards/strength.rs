use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's strength.
///
/// This will always be constructed from a Hand, which is an unordered
/// set of Cards. The derived Ord compares category first, then the
/// category's deciding rank, then the kicker cards: exactly the
/// three-card-poker total order. Swapping the two sides of a comparison
/// therefore inverts every result except equality.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn value(&self) -> Ranking {
        self.value
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::from(s))
    }

    #[test]
    fn category_beats_rank() {
        assert!(strength("2d 3d 4d") > strength("Ad Ac Ah")); // straight flush > trips
        assert!(strength("2d 2c 2h") > strength("Qd Kc As")); // trips > straight
        assert!(strength("2d 3c 4h") > strength("As Ks 9s")); // straight > flush
        assert!(strength("2s 5s 7s") > strength("Ad Ac Kh")); // flush > pair
        assert!(strength("2d 2c 3h") > strength("Ad Kc Jh")); // pair > high card
    }

    #[test]
    fn flushes_resolve_by_highest_card() {
        assert!(strength("Ks 5s 4s") > strength("Qh 5h 4h"));
        assert!(strength("Ks 5s 4s") > strength("Kh 5h 3h"));
    }

    #[test]
    fn pairs_resolve_by_pair_then_kicker() {
        assert!(strength("9d 9c 2s") > strength("8d 8c As"));
        assert!(strength("9d 9c 5s") > strength("9h 9s 4d"));
    }

    #[test]
    fn identical_rank_sets_tie() {
        assert!(strength("3d 7c 9h") == strength("3s 7d 9c"));
        assert!(strength("Td Jd Qd") == strength("Ts Js Qs"));
    }
}

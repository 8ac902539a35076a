use super::rank::Rank;

/// A three-card hand's category.
///
/// Variants are declared in ascending order of strength, so the derived Ord
/// is the casino precedence: in three-card poker a straight outranks a flush
/// and three of a kind outranks both. Each variant carries the rank that
/// decides same-category comparisons before kickers are consulted.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),      // 2 kickers
    OnePair(Rank),       // 1 kicker
    Flush(Rank),         // 2 kickers
    Straight(Rank),      // 0 kickers
    ThreeOAK(Rank),      // 0 kickers
    StraightFlush(Rank), // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 2,
            Ranking::OnePair(_) => 1,
            _ => 0,
        }
    }

    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::HighCard(hi) | Ranking::OnePair(hi) | Ranking::Flush(hi) => !u16::from(hi),
            Ranking::Straight(..) | Ranking::ThreeOAK(..) | Ranking::StraightFlush(..) => {
                unreachable!()
            }
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        assert!(Ranking::StraightFlush(Rank::Four) > Ranking::ThreeOAK(Rank::Ace));
        assert!(Ranking::ThreeOAK(Rank::Two) > Ranking::Straight(Rank::Ace));
        assert!(Ranking::Straight(Rank::Four) > Ranking::Flush(Rank::Ace));
        assert!(Ranking::Flush(Rank::Four) > Ranking::OnePair(Rank::Ace));
        assert!(Ranking::OnePair(Rank::Two) > Ranking::HighCard(Rank::Ace));
    }

    #[test]
    fn same_category_by_rank() {
        assert!(Ranking::OnePair(Rank::King) > Ranking::OnePair(Rank::Queen));
        assert!(Ranking::Straight(Rank::Ace) > Ranking::Straight(Rank::King));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Play,
}

/// Policies hand us two raw preference scores rather than a discrete choice,
/// so a stochastic or continuous controller needs no discretization layer
/// upstream. Fold iff the first score strictly exceeds the second.
impl From<[f32; 2]> for Action {
    fn from(preference: [f32; 2]) -> Self {
        if preference[0] > preference[1] {
            Action::Fold
        } else {
            Action::Play
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Play => write!(f, "{}", "PLAY".green()),
        }
    }
}

use colored::*;
use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_second_component() {
        assert_eq!(Action::from([0.2, 0.9]), Action::Play);
        assert_eq!(Action::from([0.9, 0.1]), Action::Fold);
    }

    #[test]
    fn equal_scores_play() {
        assert_eq!(Action::from([0.5, 0.5]), Action::Play);
    }
}

use super::showdown::Outcome;
use crate::Utility;
use serde::{Deserialize, Serialize};

/// The reward table for a round.
///
/// The default +4 / 0 / -2 / -1 scale reproduces the environment this crate
/// grew out of; it is not a house-edge-accurate ante/play table, so it stays
/// a value rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payouts {
    pub win: Utility,
    pub push: Utility,
    pub loss: Utility,
    pub fold: Utility,
}

impl Default for Payouts {
    fn default() -> Self {
        Self {
            win: 4.,
            push: 0.,
            loss: -2.,
            fold: -1.,
        }
    }
}

impl Payouts {
    pub fn reward(&self, outcome: Outcome) -> Utility {
        match outcome {
            Outcome::Player => self.win,
            Outcome::Push => self.push,
            Outcome::Dealer => self.loss,
        }
    }
}

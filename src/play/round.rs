use super::action::Action;
use super::env::{Env, EnvironmentDescription, Space, Transition};
use super::payout::Payouts;
use super::showdown::Showdown;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The six raw card indices of a round, player's three first, dealer's last.
/// Decoding into ranks and suits happens only at showdown and render time.
pub type Observation = [u8; 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    New,
    Dealt,
    Settled,
}

/// A single-decision round of three-card poker.
///
/// reset() deals six cards without replacement, step() takes the one fold-or-play
/// decision and settles the round. Exactly one step is legal per deal; stepping a
/// fresh or settled round is a caller bug and panics.
pub struct RoundEnv {
    rng: SmallRng,
    payouts: Payouts,
    phase: Phase,
    cards: Observation,
}

impl RoundEnv {
    pub fn new(payouts: Payouts) -> Self {
        Self::with_rng(SmallRng::from_os_rng(), payouts)
    }

    /// reproducible deals for debugging and evaluation runs
    pub fn seeded(seed: u64, payouts: Payouts) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), payouts)
    }

    fn with_rng(rng: SmallRng, payouts: Payouts) -> Self {
        Self {
            rng,
            payouts,
            phase: Phase::New,
            cards: [0; 6],
        }
    }

    fn player(&self) -> Hand {
        Self::decode(&self.cards[..3])
    }
    fn dealer(&self) -> Hand {
        Self::decode(&self.cards[3..])
    }
    fn decode(indices: &[u8]) -> Hand {
        Hand::from(
            indices
                .iter()
                .map(|n| Card::from(*n))
                .collect::<Vec<Card>>(),
        )
    }

    /// diagnostic dump of the current deal in long card names
    pub fn render(&self) {
        assert!(self.phase != Phase::New, "render requires a dealt round");
        let names = |indices: &[u8]| {
            indices
                .iter()
                .map(|n| Card::from(*n).name())
                .collect::<Vec<String>>()
                .join(", ")
        };
        log::info!("player hand: {}", names(&self.cards[..3]));
        log::info!("dealer hand: {}", names(&self.cards[3..]));
    }
}

impl Env for RoundEnv {
    type Observation = Observation;
    type Action = [f32; 2];

    fn reset(&mut self) -> Observation {
        let mut deck = Deck::new();
        self.cards = deck.deal::<6>(&mut self.rng).map(u8::from);
        self.phase = Phase::Dealt;
        self.cards
    }

    fn step(&mut self, action: &[f32; 2]) -> Transition<Observation> {
        assert!(
            self.phase == Phase::Dealt,
            "step requires a dealt, unsettled round"
        );
        self.phase = Phase::Settled;
        let action = Action::from(*action);
        let reward = match action {
            Action::Fold => self.payouts.fold,
            Action::Play => {
                let showdown = Showdown::from((self.player(), self.dealer()));
                log::debug!(
                    "{} {} vs {} {}",
                    action,
                    showdown.player(),
                    showdown.dealer(),
                    showdown.outcome()
                );
                self.payouts.reward(showdown.outcome())
            }
        };
        // the round is over after the one decision, so the terminal
        // observation is the deal unchanged
        Transition {
            observation: self.cards,
            reward,
            done: true,
        }
    }

    fn description(&self) -> EnvironmentDescription {
        EnvironmentDescription {
            observation_space: vec![Space::Discrete(52); 6],
            action_space: Space::Discrete(2),
        }
    }
}

#[cfg(test)]
impl RoundEnv {
    /// put the round into a known dealt state
    fn rig(&mut self, player: &str, dealer: &str) {
        let cards = Hand::from(player)
            .into_iter()
            .chain(Hand::from(dealer).into_iter())
            .map(u8::from)
            .collect::<Vec<u8>>();
        self.cards = cards.try_into().expect("three cards per hand");
        self.phase = Phase::Dealt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOLD: [f32; 2] = [0.9, 0.1];
    const PLAY: [f32; 2] = [0.2, 0.9];

    fn env() -> RoundEnv {
        RoundEnv::seeded(0, Payouts::default())
    }

    #[test]
    fn reset_deals_six_distinct_cards() {
        let mut env = env();
        for _ in 0..100 {
            let observation = env.reset();
            let hand = RoundEnv::decode(&observation);
            assert_eq!(hand.size(), 6);
            assert!(observation.iter().all(|n| *n < 52));
        }
    }

    #[test]
    fn same_seed_same_deal() {
        let mut a = RoundEnv::seeded(7, Payouts::default());
        let mut b = RoundEnv::seeded(7, Payouts::default());
        assert_eq!(a.reset(), b.reset());
        assert_eq!(a.reset(), b.reset());
    }

    #[test]
    fn fold_is_terminal_and_costs_one() {
        let mut env = env();
        let observation = env.reset();
        let transition = env.step(&FOLD);
        assert_eq!(transition.reward, -1.);
        assert!(transition.done);
        assert_eq!(transition.observation, observation);
    }

    #[test]
    fn fold_ignores_the_deal() {
        let mut env = env();
        env.rig("Qs Ks As", "2d 3c 5h");
        assert_eq!(env.step(&FOLD).reward, -1.);
    }

    #[test]
    fn play_rewards_are_on_scale() {
        let mut env = env();
        for _ in 0..100 {
            env.reset();
            let reward = env.step(&PLAY).reward;
            assert!(reward == 4. || reward == 0. || reward == -2.);
        }
    }

    #[test]
    fn straight_flush_beats_high_card() {
        let mut env = env();
        env.rig("Ts Js Qs", "2d 3c 5h");
        let transition = env.step(&PLAY);
        assert_eq!(transition.reward, 4.);
        assert!(transition.done);
    }

    #[test]
    fn straight_flush_beats_three_of_a_kind() {
        let mut env = env();
        env.rig("5d 5c 5h", "Ts Js Qs");
        assert_eq!(env.step(&PLAY).reward, -2.);
    }

    #[test]
    fn identical_rank_sets_push() {
        let mut env = env();
        env.rig("3d 7c 9h", "3s 7d 9c");
        assert_eq!(env.step(&PLAY).reward, 0.);
    }

    #[test]
    fn custom_payout_table() {
        let payouts = Payouts {
            win: 1.,
            push: 0.,
            loss: -1.,
            fold: -0.5,
        };
        let mut env = RoundEnv::seeded(0, payouts);
        env.rig("Ts Js Qs", "2d 3c 5h");
        assert_eq!(env.step(&PLAY).reward, 1.);
        env.rig("Ts Js Qs", "2d 3c 5h");
        assert_eq!(env.step(&FOLD).reward, -0.5);
    }

    #[test]
    fn spaces_match_the_deal() {
        let env = env();
        let description = env.description();
        assert_eq!(description.observation_size(), 6);
        assert_eq!(description.action_size(), 2);
        assert!(
            description
                .observation_space
                .iter()
                .all(|space| space.size() == 52)
        );
    }

    #[test]
    #[should_panic]
    fn step_before_reset_panics() {
        let mut env = env();
        env.step(&PLAY);
    }

    #[test]
    #[should_panic]
    fn second_step_panics() {
        let mut env = env();
        env.reset();
        env.step(&PLAY);
        env.step(&PLAY);
    }
}

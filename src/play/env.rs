use crate::Utility;

/// One categorical dimension of an observation or action interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    Discrete(usize),
}

impl Space {
    pub fn size(&self) -> usize {
        match self {
            Self::Discrete(n) => *n,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnvironmentDescription {
    pub observation_space: Vec<Space>,
    pub action_space: Space,
}

impl EnvironmentDescription {
    pub fn observation_size(&self) -> usize {
        self.observation_space.len()
    }
    pub fn action_size(&self) -> usize {
        self.action_space.size()
    }
}

/// The result of one step.
#[derive(Debug, Clone, Copy)]
pub struct Transition<O> {
    pub observation: O,
    pub reward: Utility,
    pub done: bool,
}

/// The contract an external training loop drives: deal with reset, act with
/// step, read the spaces to size policy inputs and outputs. An instance owns
/// its RNG and its round state, so parallel rollouts hold one per worker with
/// nothing shared.
pub trait Env {
    type Observation: Clone;
    type Action;

    fn reset(&mut self) -> Self::Observation;
    fn step(&mut self, action: &Self::Action) -> Transition<Self::Observation>;
    fn description(&self) -> EnvironmentDescription;
}

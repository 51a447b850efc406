//! Q-learning pursuit controller
//!
//! This module implements the decision/update engine invoked by the host
//! engine: one `on_decision` call per turn, one `on_episode_end` call when
//! the episode concludes. The controller never drives the game loop itself.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    config::AgentConfig,
    error::{Error, Result},
    ports::Observation,
    q_learning::q_table::QTable,
    state::AbstractState,
    stats::EpisodeStats,
    types::Action,
};

/// The single most recent (state, action, raw score) triple.
///
/// Exactly one of these exists per agent, replaced on every decision and
/// cleared at episode boundaries. One-step TD keeps no deeper history.
#[derive(Debug, Clone)]
struct Transition {
    state: AbstractState,
    action: Action,
    score: f64,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular Q-learning agent for the pursuit game.
///
/// Learns action values with the one-step Q-learning update
///
/// ```text
/// Q(s,a) ← (1 - α) Q(s,a) + α [r + γ max_a' Q(s',a')]
/// ```
///
/// where the reward is the score delta between consecutive callbacks.
/// Action selection is ε-greedy over the engine-supplied legal set. After
/// `num_training` episodes both α and ε are forced to zero permanently:
/// the agent stops learning and exploring and plays pure greedy.
///
/// Each agent owns its table and transition memory outright. Hosts that
/// control several entities must construct one agent per entity.
#[derive(Debug, Clone)]
pub struct QLearnAgent {
    q_table: QTable,
    alpha: f64,
    epsilon: f64,
    gamma: f64,
    num_training: usize,
    episodes_so_far: usize,
    memory: Option<Transition>,
    stats: EpisodeStats,
    rng: StdRng,
}

impl QLearnAgent {
    /// Create an agent from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if any rate in the configuration
    /// is outside [0, 1] or not finite.
    pub fn new(config: AgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            q_table: QTable::new(),
            alpha: config.alpha,
            epsilon: config.epsilon,
            gamma: config.gamma,
            num_training: config.num_training,
            episodes_so_far: 0,
            memory: None,
            stats: EpisodeStats::new(),
            rng: build_rng(config.seed),
        })
    }

    /// Decision callback: called by the engine once per turn.
    ///
    /// Applies the TD update for the previous transition (skipped on the
    /// first decision of an episode), then selects an action ε-greedily
    /// over `observation.legal_actions()` and records the new transition.
    /// The returned action is always a member of the legal set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`] if the engine supplies an empty
    /// legal set; the engine contract is to never do so.
    pub fn on_decision(&mut self, observation: &dyn Observation) -> Result<Action> {
        let legal = observation.legal_actions();
        if legal.is_empty() {
            return Err(Error::NoLegalActions);
        }

        let state = AbstractState::from_observation(observation);
        self.apply_td_update(&state, legal, observation.score());

        let action = self.select_action_epsilon_greedy(&state, legal);

        self.memory = Some(Transition {
            state,
            action,
            score: observation.score(),
        });

        Ok(action)
    }

    /// Episode-end callback: called by the engine after a win or a loss.
    ///
    /// Applies the terminal TD update (empty successor set, so no future
    /// value), clears the transition memory so nothing leaks into the next
    /// episode, tallies the outcome, and advances the episode counter. Once
    /// `num_training` episodes have completed, α and ε are set to zero;
    /// further calls leave them there.
    pub fn on_episode_end(&mut self, observation: &dyn Observation) -> Result<()> {
        let state = AbstractState::from_observation(observation);
        self.apply_td_update(&state, &[], observation.score());
        self.memory = None;

        self.stats.record(observation.is_terminal_win());
        self.episodes_so_far += 1;

        if self.episodes_so_far >= self.num_training {
            self.alpha = 0.0;
            self.epsilon = 0.0;
        }

        Ok(())
    }

    /// One-step TD update of the remembered transition.
    ///
    /// No-op when there is no transition memory (first decision of an
    /// episode). `succ_legal` is the successor action set; empty signals a
    /// terminal state and contributes zero future value.
    fn apply_td_update(&mut self, next_state: &AbstractState, succ_legal: &[Action], score: f64) {
        let Some(prev) = self.memory.clone() else {
            return;
        };

        let max_next = self.q_table.max_value(next_state, succ_legal);
        let reward = score - prev.score;
        let target = reward + self.gamma * max_next;
        let updated =
            self.q_table.value(&prev.state, prev.action) * (1.0 - self.alpha) + self.alpha * target;
        self.q_table.set(prev.state, prev.action, updated);
    }

    /// ε-greedy action selection over the engine-supplied legal set.
    ///
    /// A uniform draw in [0, 1) strictly above ε selects greedily (ties
    /// broken by first occurrence in `legal`); otherwise the action is
    /// uniform random. ε = 1.0 therefore forces pure random play and
    /// ε = 0.0 pure greedy.
    fn select_action_epsilon_greedy(&mut self, state: &AbstractState, legal: &[Action]) -> Action {
        let draw: f64 = self.rng.random();
        if draw > self.epsilon {
            self.q_table.greedy_action(state, legal).unwrap_or(legal[0])
        } else {
            *legal.choose(&mut self.rng).unwrap_or(&legal[0])
        }
    }

    /// Current learning rate (zero once training has completed).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Current exploration rate (zero once training has completed).
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Discount factor.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Number of completed episodes.
    pub fn episodes_so_far(&self) -> usize {
        self.episodes_so_far
    }

    /// Episode count after which learning freezes.
    pub fn num_training(&self) -> usize {
        self.num_training
    }

    /// Whether the agent is still in its training phase.
    pub fn is_training(&self) -> bool {
        self.episodes_so_far < self.num_training
    }

    /// Win/loss tally across completed episodes.
    pub fn stats(&self) -> EpisodeStats {
        self.stats
    }

    /// Read access to the learned table, for inspection and diagnostics.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }
}

//! Configuration for agent creation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for creating a Q-learning agent.
///
/// Typically populated from the host's startup arguments. All rates must be
/// finite values in [0, 1]; [`AgentConfig::validate`] enforces this before
/// an agent is constructed.
///
/// # Examples
///
/// ```
/// use gridpursuit::AgentConfig;
///
/// let config = AgentConfig::new()
///     .with_alpha(0.5)
///     .with_num_training(100)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Learning rate α
    pub alpha: f64,
    /// Exploration rate ε
    pub epsilon: f64,
    /// Discount factor γ
    pub gamma: f64,
    /// Number of training episodes before learning is frozen
    pub num_training: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with the default parameters
    /// (α = 0.2, ε = 0.05, γ = 0.8, 10 training episodes, unseeded).
    pub fn new() -> Self {
        Self {
            alpha: 0.2,
            epsilon: 0.05,
            gamma: 0.8,
            num_training: 10,
            seed: None,
        }
    }

    /// Set the learning rate.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the exploration rate.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the discount factor.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the number of training episodes.
    pub fn with_num_training(mut self, num_training: usize) -> Self {
        self.num_training = num_training;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that all rates are finite and within [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("epsilon", self.epsilon),
            ("gamma", self.gamma),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

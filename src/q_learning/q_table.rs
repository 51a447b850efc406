//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{state::AbstractState, types::Action};

/// Q-table mapping (state, action) pairs to Q-values
///
/// Keys are abstract states paired with actions. Every key ever queried has
/// a defined value: absent keys are materialized at 0.0 on first read, so
/// re-reads are idempotent O(1) lookups. The table grows monotonically for
/// the lifetime of the agent; there is no eviction and no capacity bound.
/// That is acceptable for the small pursuit state spaces this crate targets
/// and a known limitation for larger ones (eviction would break the
/// convergence assumptions of tabular Q-learning).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QTable {
    q_values: HashMap<(AbstractState, Action), f64>,
}

impl QTable {
    /// Create an empty Q-table
    pub fn new() -> Self {
        Self {
            q_values: HashMap::new(),
        }
    }

    /// Get the Q-value for a state-action pair, materializing it at 0.0 if unseen
    pub fn value(&mut self, state: &AbstractState, action: Action) -> f64 {
        *self
            .q_values
            .entry((state.clone(), action))
            .or_insert(0.0)
    }

    /// Look up a Q-value without materializing the key.
    ///
    /// Diagnostic read: returns `None` for pairs never touched. Learning
    /// code goes through [`QTable::value`] instead.
    pub fn peek(&self, state: &AbstractState, action: Action) -> Option<f64> {
        self.q_values.get(&(state.clone(), action)).copied()
    }

    /// Set the Q-value for a state-action pair, overwriting unconditionally
    pub fn set(&mut self, state: AbstractState, action: Action, value: f64) {
        self.q_values.insert((state, action), value);
    }

    /// Maximum Q-value over the given actions in a state
    ///
    /// Returns 0.0 for an empty action set (terminal: no future value).
    pub fn max_value(&mut self, state: &AbstractState, actions: &[Action]) -> f64 {
        if actions.is_empty() {
            return 0.0;
        }
        actions
            .iter()
            .map(|&action| self.value(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Greedy action over the given actions in a state
    ///
    /// Ties are broken by first occurrence in `actions`: an action is only
    /// preferred over an earlier one if its value is strictly greater.
    /// Returns `None` for an empty action set.
    pub fn greedy_action(&mut self, state: &AbstractState, actions: &[Action]) -> Option<Action> {
        let mut best: Option<(Action, f64)> = None;
        for &action in actions {
            let q = self.value(state, action);
            match best {
                Some((_, best_q)) if q <= best_q => {}
                _ => best = Some((action, q)),
            }
        }
        best.map(|(action, _)| action)
    }

    /// Total number of materialized Q-values
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    /// Whether any Q-value has been materialized
    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }
}

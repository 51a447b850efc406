//! State abstraction for the learning key space
//!
//! The full engine observation carries far more than the learner needs
//! (food layout, score, terminal flags). Keying the value table on the raw
//! observation would make equivalent configurations look distinct, so the
//! abstractor reduces each observation to the positional facts only.

use serde::{Deserialize, Serialize};

use crate::{ports::Observation, types::Position};

/// Reduced, hashable representation of one game configuration.
///
/// Two observations produce equal `AbstractState`s iff the controlled agent
/// and every adversary occupy the same cells, regardless of object identity
/// or any non-positional field. Owns its data; no reference back to the
/// observation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbstractState {
    agent: Position,
    adversaries: Vec<Position>,
}

impl AbstractState {
    /// Build the abstraction from an engine observation.
    ///
    /// Pure function of the positional fields; adversary order is preserved
    /// as supplied by the engine.
    pub fn from_observation(observation: &dyn Observation) -> Self {
        AbstractState {
            agent: observation.controlled_position(),
            adversaries: observation.adversary_positions().to_vec(),
        }
    }

    /// Construct directly from positions.
    pub fn new(agent: Position, adversaries: Vec<Position>) -> Self {
        AbstractState { agent, adversaries }
    }

    /// Position of the controlled agent.
    pub fn agent(&self) -> Position {
        self.agent
    }

    /// Positions of the adversaries, in the order observed.
    pub fn adversaries(&self) -> &[Position] {
        &self.adversaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Action;

    struct FakeObservation {
        legal: Vec<Action>,
        agent: Position,
        adversaries: Vec<Position>,
        score: f64,
    }

    impl Observation for FakeObservation {
        fn legal_actions(&self) -> &[Action] {
            &self.legal
        }

        fn controlled_position(&self) -> Position {
            self.agent
        }

        fn adversary_positions(&self) -> &[Position] {
            &self.adversaries
        }

        fn score(&self) -> f64 {
            self.score
        }
    }

    #[test]
    fn test_equal_positions_equal_states() {
        let a = FakeObservation {
            legal: vec![Action::North],
            agent: Position::new(1, 1),
            adversaries: vec![Position::new(4, 4), Position::new(0, 3)],
            score: 0.0,
        };
        let b = FakeObservation {
            legal: vec![Action::South, Action::East],
            agent: Position::new(1, 1),
            adversaries: vec![Position::new(4, 4), Position::new(0, 3)],
            score: 120.0,
        };

        // Score and legal actions differ, positions agree
        assert_eq!(
            AbstractState::from_observation(&a),
            AbstractState::from_observation(&b)
        );
    }

    #[test]
    fn test_adversary_order_is_significant() {
        let a = AbstractState::new(
            Position::new(1, 1),
            vec![Position::new(4, 4), Position::new(0, 3)],
        );
        let b = AbstractState::new(
            Position::new(1, 1),
            vec![Position::new(0, 3), Position::new(4, 4)],
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_state_hashes_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        let state = AbstractState::new(Position::new(2, 0), vec![Position::new(5, 5)]);
        map.insert(state.clone(), 1.0);
        assert_eq!(
            map.get(&AbstractState::new(
                Position::new(2, 0),
                vec![Position::new(5, 5)]
            )),
            Some(&1.0)
        );
    }
}

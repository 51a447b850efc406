//! Common test fixtures for the gridpursuit test suite.
//!
//! Provides a scripted observation type so contract tests can hand the
//! controller exact decision points without a running engine.

use gridpursuit::{Action, Observation, Position};

/// A hand-built observation describing one decision point.
pub struct ScriptedObservation {
    pub legal: Vec<Action>,
    pub agent: Position,
    pub adversaries: Vec<Position>,
    pub score: f64,
    pub won: bool,
}

impl ScriptedObservation {
    /// Observation with a single adversary parked far away.
    pub fn at(agent: Position, legal: Vec<Action>, score: f64) -> Self {
        Self {
            legal,
            agent,
            adversaries: vec![Position::new(9, 9)],
            score,
            won: false,
        }
    }

    /// Terminal observation (no legal actions) at the given score.
    pub fn terminal(agent: Position, score: f64, won: bool) -> Self {
        Self {
            legal: vec![],
            agent,
            adversaries: vec![Position::new(9, 9)],
            score,
            won,
        }
    }
}

impl Observation for ScriptedObservation {
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

    fn is_terminal_win(&self) -> bool {
        self.won
    }
}

//! Observation port - the read-only view the game engine hands the controller
//!
//! The external engine owns the game loop, the map, and the adversaries; the
//! controller only ever sees one of these views per callback. A view is valid
//! for the duration of a single callback and the controller must not retain
//! references into it (the state abstractor copies out what it needs).

use crate::types::{Action, Position};

/// Read-only capability describing one decision point.
///
/// Implementations are **adapters** supplied by the host engine (or a test
/// fixture). The controller consumes them through this port only.
pub trait Observation {
    /// Legal actions for the controlled agent, in engine order.
    ///
    /// The order is significant: greedy ties are broken by first occurrence.
    /// Engines differ on whether a no-op action is included; the controller
    /// accepts either contract and never filters the set.
    fn legal_actions(&self) -> &[Action];

    /// Current position of the controlled agent.
    fn controlled_position(&self) -> Position;

    /// Positions of all adversaries, in engine order.
    fn adversary_positions(&self) -> &[Position];

    /// Current game score.
    fn score(&self) -> f64;

    /// Whether a just-ended episode was a win.
    ///
    /// Only meaningful at episode end; used for the win/loss tally, not for
    /// learning.
    fn is_terminal_win(&self) -> bool {
        false
    }
}

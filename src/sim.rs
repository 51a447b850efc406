//! Corridor pursuit world - a minimal reference engine
//!
//! The real game engine lives outside this crate; this module is the
//! stand-in collaborator used by the demo binary and the integration tests.
//! It is a one-dimensional corridor: the controlled agent starts at the west
//! end, eats pellets for score, and a single adversary patrols the east half
//! of the corridor. The agent wins by clearing every pellet and loses by
//! being caught or running out of time.
//!
//! Scoring follows the usual pursuit-game convention: a small time penalty
//! per turn, a pellet bonus, and large terminal bonuses/penalties, so the
//! score delta between turns is a usable reward signal.

use crate::{
    error::{Error, Result},
    ports::Observation,
    q_learning::QLearnAgent,
    types::{Action, Position},
};

const TIME_PENALTY: f64 = 1.0;
const PELLET_BONUS: f64 = 10.0;
const WIN_BONUS: f64 = 500.0;
const CAUGHT_PENALTY: f64 = 500.0;

/// Owned snapshot of one decision point.
///
/// Valid for the duration of a single callback; holds no reference back
/// into the world.
#[derive(Debug, Clone)]
pub struct WorldView {
    legal: Vec<Action>,
    agent: Position,
    adversaries: Vec<Position>,
    score: f64,
    won: bool,
}

impl Observation for WorldView {
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

/// The corridor world state.
///
/// Cells run from `0` (agent start) to `length - 1` (adversary home).
/// Pellets sit on every interior cell. The adversary patrols between the
/// corridor midpoint and its home cell, bouncing at both ends, one cell per
/// turn. The agent moves first each turn; a catch is the agent and the
/// adversary sharing a cell after either has moved.
#[derive(Debug, Clone)]
pub struct PursuitWorld {
    length: i32,
    agent: i32,
    ghost: i32,
    ghost_dir: i32,
    patrol_min: i32,
    pellets: Vec<bool>,
    score: f64,
    steps: usize,
    max_steps: usize,
    over: bool,
    won: bool,
}

impl PursuitWorld {
    /// Create a corridor of the given length (clamped to at least 4 cells).
    pub fn new(length: usize) -> Self {
        let length = length.max(4) as i32;
        let mut pellets = vec![true; length as usize];
        // No pellet on the agent start or the adversary home cell: the home
        // cell is never safely reachable, so a pellet there would make the
        // world unwinnable.
        pellets[0] = false;
        pellets[(length - 1) as usize] = false;

        Self {
            length,
            agent: 0,
            ghost: length - 1,
            ghost_dir: -1,
            patrol_min: length / 2,
            pellets,
            score: 0.0,
            steps: 0,
            max_steps: 200,
            over: false,
            won: false,
        }
    }

    /// Cap the number of turns before the episode times out as a loss.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Start a fresh episode with the same layout.
    pub fn reset(&mut self) {
        *self = Self::new(self.length as usize).with_max_steps(self.max_steps);
    }

    /// Snapshot the current decision point for the controller.
    pub fn observe(&self) -> WorldView {
        WorldView {
            legal: self.legal_actions(),
            agent: Position::new(self.agent, 0),
            adversaries: vec![Position::new(self.ghost, 0)],
            score: self.score,
            won: self.won,
        }
    }

    /// Legal actions at the agent's current cell, in engine order.
    ///
    /// A no-op action is always included; the controller is expected to
    /// consume the set verbatim.
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut legal = Vec::with_capacity(3);
        if self.agent < self.length - 1 {
            legal.push(Action::East);
        }
        if self.agent > 0 {
            legal.push(Action::West);
        }
        legal.push(Action::Stop);
        legal
    }

    /// Advance the world by one turn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EpisodeOver`] after the episode has ended and
    /// [`Error::IllegalAction`] if the action is not in the current legal
    /// set.
    pub fn step(&mut self, action: Action) -> Result<()> {
        if self.over {
            return Err(Error::EpisodeOver);
        }
        let legal = self.legal_actions();
        if !legal.contains(&action) {
            return Err(Error::IllegalAction { action, legal });
        }

        // Agent moves first
        match action {
            Action::East => self.agent += 1,
            Action::West => self.agent -= 1,
            _ => {}
        }
        self.score -= TIME_PENALTY;

        if self.agent == self.ghost {
            self.finish_caught();
            return Ok(());
        }

        if self.pellets[self.agent as usize] {
            self.pellets[self.agent as usize] = false;
            self.score += PELLET_BONUS;
            if self.pellets.iter().all(|eaten| !eaten) {
                self.score += WIN_BONUS;
                self.over = true;
                self.won = true;
                return Ok(());
            }
        }

        // Adversary patrols, bouncing at its bounds
        if self.ghost + self.ghost_dir > self.length - 1 || self.ghost + self.ghost_dir < self.patrol_min
        {
            self.ghost_dir = -self.ghost_dir;
        }
        self.ghost += self.ghost_dir;

        if self.agent == self.ghost {
            self.finish_caught();
            return Ok(());
        }

        self.steps += 1;
        if self.steps >= self.max_steps {
            self.over = true;
            self.won = false;
        }

        Ok(())
    }

    fn finish_caught(&mut self) {
        self.score -= CAUGHT_PENALTY;
        self.over = true;
        self.won = false;
    }

    /// Whether the episode has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether the episode ended in a win.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Current score.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Remaining pellet count.
    pub fn pellets_left(&self) -> usize {
        self.pellets.iter().filter(|&&p| p).count()
    }
}

/// Drive one full episode: decisions until terminal, then the end callback.
///
/// Returns whether the episode was won.
pub fn run_episode(world: &mut PursuitWorld, agent: &mut QLearnAgent) -> Result<bool> {
    while !world.is_over() {
        let action = agent.on_decision(&world.observe())?;
        world.step(action)?;
    }
    agent.on_episode_end(&world.observe())?;
    Ok(world.is_won())
}

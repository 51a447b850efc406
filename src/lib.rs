//! Tabular Q-learning controller for grid-world pursuit games
//!
//! This crate provides:
//! - A state abstractor reducing engine observations to hashable learning keys
//! - A lazily-populated action-value table with deterministic greedy selection
//! - An ε-greedy Q-learning agent driven by the host engine's two callbacks
//! - A minimal corridor-pursuit world for demos and integration tests
//!
//! The game engine itself (rendering, physics, adversary AI, map loading) is
//! an external collaborator reached through the [`ports::Observation`] port.

pub mod config;
pub mod error;
pub mod ports;
pub mod q_learning;
pub mod sim;
pub mod state;
pub mod stats;
pub mod types;

pub use config::AgentConfig;
pub use error::{Error, Result};
pub use ports::Observation;
pub use q_learning::{QLearnAgent, QTable};
pub use state::AbstractState;
pub use stats::{EpisodeStats, RunSummary};
pub use types::{Action, Position};

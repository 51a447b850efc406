//! Tabular Q-learning for the pursuit controller
//!
//! One-step temporal difference control: the agent revises the value of the
//! previous (state, action) pair toward `reward + γ max_a' Q(s', a')` each
//! time the engine calls back, blending old estimate and new target by the
//! learning rate α.
//!
//! ## Usage Example
//!
//! ```no_run
//! use gridpursuit::{AgentConfig, QLearnAgent};
//!
//! let mut agent = QLearnAgent::new(
//!     AgentConfig::new()
//!         .with_alpha(0.2)      // learning rate
//!         .with_epsilon(0.05)   // exploration rate
//!         .with_gamma(0.8)      // discount factor
//!         .with_num_training(10),
//! )
//! .unwrap();
//!
//! // The host engine then calls agent.on_decision(&observation) once per
//! // turn and agent.on_episode_end(&observation) once per episode.
//! ```

pub mod agent;
pub mod q_table;

// Public re-exports
pub use agent::QLearnAgent;
pub use q_table::QTable;

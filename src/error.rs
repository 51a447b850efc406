//! Error types for the gridpursuit crate

use thiserror::Error;

/// Main error type for the gridpursuit crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal actions available at decision point")]
    NoLegalActions,

    #[error("invalid parameter {name}: {value} (expected a finite value in [0, 1])")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("illegal action {action}: not in the legal set {legal:?}")]
    IllegalAction {
        action: crate::types::Action,
        legal: Vec<crate::types::Action>,
    },

    #[error("episode is already over")]
    EpisodeOver,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading the agent configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read agent config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse agent config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("agent config {path} declares no agents")]
    Empty { path: PathBuf },
    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Failure while answering an analysis request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The caller supplied bad input (empty username, ...).
    #[error("{0}")]
    InvalidInput(String),
    /// The requested agent is not in the loaded configuration.
    #[error("Agent {0} not found in configuration")]
    UnknownAgent(String),
    /// The recommendation generator failed.
    #[error("recommendation generation failed: {0}")]
    Generation(String),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

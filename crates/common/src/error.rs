use thiserror::Error;

// Custom Result type alias for convenient use across the project
pub type Result<T> = std::result::Result<T, CollectorError>;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Invalid point count: {0} (at least one target point is required)")]
    InvalidPointCount(i64),

    #[error("Positions have not been generated yet")]
    NotInitialized,

    #[error("Tour has already been built for this geometry")]
    AlreadyBuilt,

    #[error("No unvisited point reachable from index {current} while the tour is incomplete")]
    NoCandidate { current: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

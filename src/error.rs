use thiserror::Error;

/// Error types for the pixelseg library
#[derive(Error, Debug)]
pub enum ClusterError {
    /// The number of clusters k is invalid (must be > 0)
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// Not enough samples for the requested number of clusters
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The sample buffer is empty
    #[error("Empty sample buffer: nothing to cluster")]
    EmptyInput,
}

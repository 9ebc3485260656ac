//! Error types for promptdeck.

/// Errors that can occur while configuring or running segmentation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid lines-per-slide limit (must be > 0).
    #[error("invalid max lines per slide: {0} (must be > 0)")]
    InvalidMaxLines(usize),

    /// Invalid characters-per-line limit (must be > 0).
    #[error("invalid max chars per line: {0} (must be > 0)")]
    InvalidMaxChars(usize),

    /// Minimum characters per line is zero or exceeds the maximum.
    #[error("invalid min chars per line: {min} (must be in 1..={max})")]
    InvalidMinChars {
        /// The rejected minimum.
        min: usize,
        /// The configured maximum.
        max: usize,
    },

    /// Similarity threshold outside `0.0..=1.0`.
    #[error("invalid similarity threshold: {0} (must be in 0.0..=1.0)")]
    InvalidThreshold(f32),

    /// A merge gate returned the wrong number of decisions.
    #[error("merge gate returned {actual} decisions for {expected} sentences")]
    GateLength {
        /// Number of sentences passed to the gate.
        expected: usize,
        /// Number of decisions returned.
        actual: usize,
    },

    /// Embedding model error.
    #[error("embedding error: {0}")]
    Embedding(String),
}

/// Result type for promptdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

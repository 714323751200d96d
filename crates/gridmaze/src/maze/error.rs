//! Error types for scenario generation

/// Result type alias
pub type Result<T> = std::result::Result<T, MazeError>;

/// Generation and validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MazeError {
    /// Grid cannot hold enough non-crossing edges to ever satisfy the minimum
    #[error(
        "Invalid grid size {grid_size}: at most {capacity} edges fit, but {min_edges} are required"
    )]
    InvalidGridSize {
        /// Requested side length
        grid_size: u32,
        /// Upper bound on acceptable edges
        capacity: usize,
        /// Required minimum
        min_edges: usize,
    },

    /// Edge probability outside `(0, 1]`
    #[error("Invalid edge probability {0}: must be in (0, 1]")]
    InvalidEdgeProbability(f64),

    /// Minimum edge count of zero
    #[error("Invalid minimum edge count: must be at least 1")]
    InvalidMinEdges,

    /// No usable neighbor offsets
    #[error("No non-zero neighbor offsets configured")]
    EmptyOffsets,

    /// Attempt cap exhausted
    #[error("No valid scenario after {attempts} attempts")]
    GenerationTimeout {
        /// Candidate graphs built
        attempts: u32,
    },

    /// Scenario breaks an invariant
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
}

//! Error types for clockwork-core

use thiserror::Error;

/// Result type for clockwork-core operations
pub type Result<T> = std::result::Result<T, CircularError>;

/// Errors raised by the circular helpers.
///
/// Wrapping and sector tests are total over finite inputs and never fail; only the constructors and the
/// aggregate statistics return these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CircularError {
    /// A statistic was requested over an empty sequence (or one made only of skipped NaNs).
    #[error("Invalid argument: cannot reduce an empty sequence of angles")]
    EmptyInput,

    /// The mean resultant vector is too short to define a direction.
    #[error("Undefined result: resultant vector length {length:e} has no direction")]
    UndefinedDirection {
        /// Length of the mean resultant vector.
        length: f64,
    },

    /// A circle was described by a non-finite or non-positive full arc.
    #[error("Invalid argument: full arc must be finite and positive, got {0}")]
    InvalidFullArc(f64),

    /// Sector start and end lists differ in length.
    #[error("Invalid argument: {starts} sector starts but {ends} sector ends")]
    ShapeMismatch {
        /// Number of sector starts.
        starts: usize,
        /// Number of sector ends.
        ends: usize,
    },

    /// Angles cannot be paired with the given sectors.
    #[error("Invalid argument: {angles} angles cannot be broadcast against {sectors} sectors")]
    BroadcastMismatch {
        /// Number of angles.
        angles: usize,
        /// Number of sectors.
        sectors: usize,
    },
}

//! Error type shared by presentations, tables and the enumerators.

use thiserror::Error;

/// Errors surfaced by coset enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CosetError {
    /// A letter is `0` or names a generator outside `1..=generators`.
    #[error("letter {letter} is outside the alphabet of {generators} generator(s)")]
    MalformedWord { letter: i32, generators: usize },
    /// The coset cap was reached before the table closed.
    #[error("coset enumeration needs more than {limit} cosets; raise `max_cosets` to continue")]
    ResourceExceeded { limit: usize },
    /// A live cell breaks letter symmetry or liveness closure. Always a bug.
    #[error("coset table inconsistent at coset {coset}: {reason}")]
    InternalInconsistency { coset: usize, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, CosetError>;

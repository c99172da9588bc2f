//! Crate-wide error type.

use thiserror::Error;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, CayleyCodeError>;

/// Everything that can go wrong building or decoding a Cayley-complex code.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CayleyCodeError {
    /// Mismatched field characteristics, a generator set whose length doesn't match
    /// its small code, an odd generator count, or any other malformed construction input.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Random sampling of an inverse-closed (and possibly TNC) generator set exhausted
    /// its retry budget.
    #[error("could not find a suitable generator set after {trials} trials")]
    NoGenerator {
        /// Number of resampling attempts made before giving up.
        trials: usize,
    },

    /// A small-code decoder could not resolve a local block (unknown syndrome, brute
    /// force found no word within half the minimum distance).
    #[error("local decoder failed to decode a block of length {len}")]
    LocalDecoderFailed {
        /// Length of the block that failed to decode.
        len: usize,
    },

    /// The row-reduction oracle could not compute a nullspace/row-span basis.
    #[error("row reduction oracle failed: {0}")]
    RowReduceFailed(String),

    /// A structural invariant (square count, edge count) did not hold; indicates a bug
    /// in the construction or a pathological input.
    #[error("degenerate construction: {0}")]
    Degenerate(String),

    /// I/O failure while reading or writing a persisted artifact (only reachable with
    /// the `persist` feature).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure serializing or deserializing a construction descriptor (only reachable
    /// with the `persist` feature).
    #[error("serialization error: {0}")]
    SerializationError(String),
}

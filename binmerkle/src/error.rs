use thiserror::Error;

use crate::Digest;

/// Alias for `core::result::Result<T, MerkleError>`.
pub type Result<T> = core::result::Result<T, MerkleError>;

/// Errors from Merkle tree construction, proof lookup and proof decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// `build` was called with zero leaves.
    #[error("cannot build a merkle tree without leaves")]
    EmptyInput,
    /// A proof was requested for an index outside `[0, leaf_count)`.
    #[error("no leaf with index {index} (leaf count {leaf_count})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// No leaf hashes to the requested digest.
    #[error("no leaf with digest {}", hex::encode(.0))]
    NotFound(Digest),
    /// The input exceeds the configured maximum leaf count.
    #[error("too many leaves (count {count}, max {max})")]
    TooManyLeaves {
        /// Number of leaves supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
    /// Proof bytes do not follow the wire layout.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}

//! Binary Merkle tree with compact single-leaf inclusion proofs.
//!
//! A [`MerkleTree`] is built once from a finite list of leaves and never
//! changes. For every leaf it holds a [`Proof`] that a verifier knowing only
//! the root digest can check without any other leaf.
//!
//! Hash domain separation:
//! - Leaf nodes:     `H(0x00 || leaf)`
//! - Internal nodes: `H(0x01 || left || right)`
//! - Dangling nodes: `H(0x01 || node)` (empty right sibling)
//!
//! # Core types
//!
//! - [`MerkleTree`]: build, root, proof lookup, verification.
//! - [`Proof`] / [`ProofStep`] / [`Side`]: proofs and their wire encoding.
//! - [`DigestProvider`]: the injected hash function ([`Blake2b256`] by
//!   default, [`Blake3`], [`Sha256`]).
//! - [`TreeOptions`]: leaf cap and parallelism threshold.

#![warn(missing_docs)]

mod digest;
mod error;
pub mod hash;
pub mod level;
mod options;
pub mod proof;
mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use binmerkle_costs::{CostContext, CostResult, CostsExt, OperationCost};
pub use digest::{Blake2b256, Blake3, DIGEST_LENGTH, Digest, DigestProvider, Sha256};
pub use error::{MerkleError, Result};
pub use options::{DEFAULT_MAX_LEAF_COUNT, DEFAULT_PARALLEL_THRESHOLD, TreeOptions};
pub use proof::{MAX_PROOF_STEPS, Proof, ProofStep, Side, accumulator::tree_height};
pub use tree::MerkleTree;
pub use verify::verify_encoded;

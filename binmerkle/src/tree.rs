use binmerkle_costs::{CostResult, CostsExt, OperationCost, cost_return_on_error_no_add};
use tracing::{debug, trace};

use crate::{
    Blake2b256, Digest, DigestProvider, MerkleError, Result, TreeOptions,
    hash::leaf_digest,
    level::{parent_width, reduce_level},
    proof::{Proof, accumulator::ProofAccumulator},
};

/// An immutable binary Merkle tree over an ordered list of leaves.
///
/// Construction hashes every leaf once, then reduces level by level until a
/// single root remains, extending every leaf's proof at each level. Nothing
/// is mutated after [`build`](Self::build) returns, so a tree can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct MerkleTree<P: DigestProvider = Blake2b256> {
    provider: P,
    leaf_digests: Vec<Digest>,
    proofs: Vec<Proof>,
    root: Digest,
}

impl MerkleTree<Blake2b256> {
    /// Build a tree over `leaves` with the default [`Blake2b256`] provider,
    /// the digest Waves/Ride verifiers check proofs with.
    ///
    /// Fails with [`MerkleError::EmptyInput`] when `leaves` is empty.
    pub fn build<I, L>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        Self::build_with_provider(Blake2b256, leaves)
    }
}

impl<P: DigestProvider> MerkleTree<P> {
    /// Build a tree over `leaves` with the given digest provider and default
    /// [`TreeOptions`].
    pub fn build_with_provider<I, L>(provider: P, leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        Self::build_with_options(provider, leaves, &TreeOptions::default()).unwrap()
    }

    /// Build a tree, reporting how many digests were computed.
    ///
    /// A tree of `n` leaves costs `n` leaf hashes plus one node hash per
    /// pair (or dangling node) on every level above the leaves. A single
    /// leaf is its own root and costs no node hash.
    pub fn build_with_options<I, L>(
        provider: P,
        leaves: I,
        options: &TreeOptions,
    ) -> CostResult<Self, MerkleError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut cost = OperationCost::default();

        let leaves: Vec<L> = leaves.into_iter().collect();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput).wrap_with_cost(cost);
        }
        cost_return_on_error_no_add!(cost, options.check_leaf_count(leaves.len()));

        let leaf_digests: Vec<Digest> = leaves
            .iter()
            .map(|leaf| leaf_digest(&provider, leaf.as_ref()))
            .collect();
        cost.hash_leaf_calls = saturating_calls(leaf_digests.len());

        let mut accumulator = ProofAccumulator::new(leaf_digests.len());
        extend_proofs(&mut accumulator, &leaf_digests, options);

        let mut level = leaf_digests.clone();
        while level.len() > 1 {
            let next = reduce(&provider, &level, options);
            debug_assert_eq!(next.len(), parent_width(level.len()));
            cost.hash_node_calls = cost
                .hash_node_calls
                .saturating_add(saturating_calls(next.len()));
            trace!(
                depth = accumulator.depth(),
                width = level.len(),
                next_width = next.len(),
                "reduced level"
            );
            level = next;
            if level.len() > 1 {
                extend_proofs(&mut accumulator, &level, options);
            }
        }
        let root = level[0];

        debug!(
            leaf_count = leaf_digests.len(),
            height = accumulator.depth(),
            hash_calls = cost.hash_calls(),
            root = %hex::encode(root),
            "built merkle tree"
        );

        Ok(MerkleTree {
            provider,
            leaf_digests,
            proofs: accumulator.finish(),
            root,
        })
        .wrap_with_cost(cost)
    }

    /// The root digest.
    pub fn root_digest(&self) -> Digest {
        self.root
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaf_digests.len()
    }

    /// Number of steps in every proof of this tree.
    pub fn height(&self) -> usize {
        self.proofs.first().map_or(0, Proof::len)
    }

    /// Leaf digests in input order.
    pub fn leaf_digests(&self) -> &[Digest] {
        &self.leaf_digests
    }

    /// Proof for the leaf at `index`.
    pub fn proof_for_index(&self, index: usize) -> Result<&Proof> {
        self.proofs.get(index).ok_or(MerkleError::IndexOutOfRange {
            index,
            leaf_count: self.leaf_count(),
        })
    }

    /// Proof for the first leaf whose digest is `digest`.
    ///
    /// Duplicate leaves share a digest; only the first index is used. See
    /// [`indices_of_leaf_digest`](Self::indices_of_leaf_digest) for all of
    /// them.
    pub fn proof_for_leaf_digest(&self, digest: &Digest) -> Result<&Proof> {
        let index = self
            .leaf_digests
            .iter()
            .position(|leaf| leaf == digest)
            .ok_or(MerkleError::NotFound(*digest))?;
        self.proof_for_index(index)
    }

    /// Proof for the first leaf equal to `leaf`.
    pub fn proof_for_leaf(&self, leaf: &[u8]) -> Result<&Proof> {
        self.proof_for_leaf_digest(&leaf_digest(&self.provider, leaf))
    }

    /// Every index whose leaf digest is `digest`, in ascending order.
    pub fn indices_of_leaf_digest(&self, digest: &Digest) -> Vec<usize> {
        self.leaf_digests
            .iter()
            .enumerate()
            .filter(|(_, leaf)| *leaf == digest)
            .map(|(index, _)| index)
            .collect()
    }

    /// Whether `proof` proves that `leaf` is included under this tree's
    /// root.
    pub fn verify(&self, proof: &Proof, leaf: &[u8]) -> bool {
        proof.verify(&self.provider, &self.root, leaf)
    }

    /// Same as [`verify`](Self::verify) for wire-encoded proofs. Malformed
    /// bytes yield `false`.
    pub fn verify_encoded(&self, proof: &[u8], leaf: &[u8]) -> bool {
        crate::verify::verify_encoded(&self.provider, &self.root, proof, leaf)
    }
}

fn reduce<P: DigestProvider>(provider: &P, level: &[Digest], options: &TreeOptions) -> Vec<Digest> {
    #[cfg(feature = "parallel")]
    {
        if options.is_parallel(level.len()) {
            return crate::level::reduce_level_parallel(provider, level);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = options;
    reduce_level(provider, level)
}

fn extend_proofs(accumulator: &mut ProofAccumulator, level: &[Digest], options: &TreeOptions) {
    #[cfg(feature = "parallel")]
    {
        if options.is_parallel(level.len()) {
            accumulator.extend_parallel(level);
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = options;
    accumulator.extend(level);
}

fn saturating_calls(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

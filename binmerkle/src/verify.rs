//! Proof verification.
//!
//! Pure functions: a verifier needs the root digest, the leaf and the proof,
//! nothing else from the tree. Verification never fails loudly; any proof
//! that does not reproduce the root, including undecodable bytes, is simply
//! rejected.

use binmerkle_costs::{CostContext, CostsExt, OperationCost};
use tracing::trace;

use crate::{
    Digest, DigestProvider,
    hash::{combine, leaf_digest},
    proof::Proof,
};

impl Proof {
    /// Recompute the root reached from `leaf_digest` by replaying every step.
    pub fn compute_root<P: DigestProvider + ?Sized>(
        &self,
        provider: &P,
        leaf_digest: &Digest,
    ) -> Digest {
        self.steps()
            .iter()
            .fold(*leaf_digest, |current, step| combine(provider, &current, step))
    }

    /// Whether this proof shows `leaf` is included under `root`.
    pub fn verify<P: DigestProvider + ?Sized>(
        &self,
        provider: &P,
        root: &Digest,
        leaf: &[u8],
    ) -> bool {
        self.verify_with_cost(provider, root, leaf).unwrap()
    }

    /// [`verify`](Self::verify), also reporting digest invocations.
    pub fn verify_with_cost<P: DigestProvider + ?Sized>(
        &self,
        provider: &P,
        root: &Digest,
        leaf: &[u8],
    ) -> CostContext<bool> {
        leaf_digest(provider, leaf)
            .wrap_with_cost(OperationCost::with_hash_leaf_calls(1))
            .flat_map(|digest| self.verify_leaf_digest_with_cost(provider, root, &digest))
    }

    fn verify_leaf_digest_with_cost<P: DigestProvider + ?Sized>(
        &self,
        provider: &P,
        root: &Digest,
        leaf_digest: &Digest,
    ) -> CostContext<bool> {
        if !self.is_canonical() {
            trace!("rejecting proof with an empty step marked right");
            return false.wrap_with_cost(OperationCost::default());
        }

        // A single-leaf tree is its own root; its proof is one empty step
        // that is never combined.
        if self.is_single_leaf() {
            return (leaf_digest == root).wrap_with_cost(OperationCost::default());
        }

        let computed = self.compute_root(provider, leaf_digest);
        let cost =
            OperationCost::with_hash_node_calls(u32::try_from(self.len()).unwrap_or(u32::MAX));
        (&computed == root).wrap_with_cost(cost)
    }
}

/// Decode `proof` and verify it against `root`. Undecodable proofs, including
/// a sibling length that differs from the digest length, yield `false`.
pub fn verify_encoded<P: DigestProvider + ?Sized>(
    provider: &P,
    root: &Digest,
    proof: &[u8],
    leaf: &[u8],
) -> bool {
    match Proof::from_bytes(proof) {
        Ok(proof) => proof.verify(provider, root, leaf),
        Err(e) => {
            trace!(error = %e, "rejecting undecodable proof");
            false
        }
    }
}

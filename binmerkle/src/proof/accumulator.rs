//! Builds every leaf's proof in lockstep with level reduction.
//!
//! Pairs are always `(2k, 2k + 1)` and a dangling node at index `2k` maps to
//! index `k` one level up, so a leaf's running ancestor at depth `d` is simply
//! `leaf >> d` and its sibling is `(leaf >> d) ^ 1`. No ancestor bookkeeping
//! is carried between levels.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{Digest, proof::ProofStep, proof::Proof};

/// In-progress proofs for every leaf of a tree under construction.
pub(crate) struct ProofAccumulator {
    steps: Vec<Vec<ProofStep>>,
    depth: u32,
}

impl ProofAccumulator {
    /// Start with an empty proof per leaf.
    pub(crate) fn new(leaf_count: usize) -> Self {
        let height = tree_height(leaf_count);
        ProofAccumulator {
            steps: (0..leaf_count).map(|_| Vec::with_capacity(height)).collect(),
            depth: 0,
        }
    }

    /// Number of levels accumulated so far.
    pub(crate) fn depth(&self) -> u32 {
        self.depth
    }

    /// Extend every proof with the step for `level`, the digests at the
    /// current depth. `level` must be the full level, not yet reduced.
    pub(crate) fn extend(&mut self, level: &[Digest]) {
        let depth = self.depth;
        for (leaf, steps) in self.steps.iter_mut().enumerate() {
            steps.push(step_for(level, leaf >> depth));
        }
        self.depth += 1;
    }

    /// Same as [`extend`](Self::extend), fanned out across the rayon pool.
    #[cfg(feature = "parallel")]
    pub(crate) fn extend_parallel(&mut self, level: &[Digest]) {
        let depth = self.depth;
        self.steps
            .par_iter_mut()
            .enumerate()
            .for_each(|(leaf, steps)| steps.push(step_for(level, leaf >> depth)));
        self.depth += 1;
    }

    /// Seal the accumulated steps into proofs, in leaf order.
    pub(crate) fn finish(self) -> Vec<Proof> {
        self.steps.into_iter().map(Proof::new).collect()
    }
}

/// The step recorded for the ancestor at `index` of `level`.
pub(crate) fn step_for(level: &[Digest], index: usize) -> ProofStep {
    match level.get(index ^ 1) {
        Some(sibling) if index % 2 == 0 => ProofStep::right(*sibling),
        Some(sibling) => ProofStep::left(*sibling),
        None => ProofStep::empty(),
    }
}

/// Number of steps in every proof of a tree with `leaf_count` leaves:
/// `ceil(log2(leaf_count))`, and 1 for a single leaf.
pub fn tree_height(leaf_count: usize) -> usize {
    if leaf_count <= 1 {
        return 1;
    }
    (usize::BITS - (leaf_count - 1).leading_zeros()) as usize
}

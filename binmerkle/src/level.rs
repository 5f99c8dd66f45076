//! Level reduction: one tree level to the next.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    Digest, DigestProvider,
    hash::{EMPTY, node_digest},
};

/// Reduce one level to the next: pairs `(2k, 2k + 1)` become
/// `H(0x01 || left || right)` and a dangling last element becomes
/// `H(0x01 || element)`.
///
/// The output has `ceil(level.len() / 2)` digests.
pub fn reduce_level<P: DigestProvider + ?Sized>(provider: &P, level: &[Digest]) -> Vec<Digest> {
    level
        .chunks(2)
        .map(|pair| reduce_pair(provider, pair))
        .collect()
}

/// Same output as [`reduce_level`], computing pairs on the rayon pool.
#[cfg(feature = "parallel")]
pub fn reduce_level_parallel<P: DigestProvider + ?Sized>(
    provider: &P,
    level: &[Digest],
) -> Vec<Digest> {
    level
        .par_chunks(2)
        .map(|pair| reduce_pair(provider, pair))
        .collect()
}

fn reduce_pair<P: DigestProvider + ?Sized>(provider: &P, pair: &[Digest]) -> Digest {
    let right: &[u8] = pair.get(1).map_or(EMPTY, |digest| digest.as_slice());
    node_digest(provider, &pair[0], right)
}

/// Width of the level above one of `width` digests.
pub(crate) fn parent_width(width: usize) -> usize {
    width.div_ceil(2)
}

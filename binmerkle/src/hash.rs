//! Domain-separated hashing.
//!
//! - Leaf nodes:     `H(0x00 || leaf)`
//! - Internal nodes: `H(0x01 || left || right)`
//!
//! A dangling node at the end of an odd-sized level is combined with an
//! empty right sibling, `H(0x01 || node)`, instead of being carried up.

use crate::{
    Digest, DigestProvider,
    proof::{ProofStep, Side},
};

/// Domain tag prepended to leaf hash inputs.
pub const LEAF_TAG: u8 = 0x00;
/// Domain tag prepended to internal node hash inputs.
pub const NODE_TAG: u8 = 0x01;
/// The conceptual sibling of a dangling node.
pub const EMPTY: &[u8] = &[];

/// Hash raw leaf bytes: `H(LEAF_TAG || leaf)`.
pub fn leaf_digest<P: DigestProvider + ?Sized>(provider: &P, leaf: &[u8]) -> Digest {
    provider.digest(&[&[LEAF_TAG], leaf])
}

/// Hash two children into their parent: `H(NODE_TAG || left || right)`.
///
/// `right` is [`EMPTY`] for a dangling node.
pub fn node_digest<P: DigestProvider + ?Sized>(provider: &P, left: &[u8], right: &[u8]) -> Digest {
    provider.digest(&[&[NODE_TAG], left, right])
}

/// Combine a running ancestor digest with one proof step.
///
/// This is the only place where the side marker is interpreted, and it is
/// shared by verification and by the tests pinning construction output.
pub fn combine<P: DigestProvider + ?Sized>(
    provider: &P,
    current: &Digest,
    step: &ProofStep,
) -> Digest {
    match (step.side(), step.sibling()) {
        (_, None) => node_digest(provider, current, EMPTY),
        (Side::Right, Some(sibling)) => node_digest(provider, current, sibling),
        (Side::Left, Some(sibling)) => node_digest(provider, sibling, current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blake3;

    #[test]
    fn test_leaf_and_node_tags_differ() {
        assert_ne!(LEAF_TAG, NODE_TAG);
        // same bytes, different domain
        let bytes = [7u8; 64];
        let as_leaf = leaf_digest(&Blake3, &bytes);
        let as_node = node_digest(&Blake3, &bytes[..32], &bytes[32..]);
        assert_ne!(as_leaf, as_node);
    }

    #[test]
    fn test_leaf_digest_layout() {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[0x00]);
        hasher.update(b"zero");
        assert_eq!(leaf_digest(&Blake3, b"zero"), *hasher.finalize().as_bytes());
        // empty leaves are allowed
        assert_eq!(leaf_digest(&Blake3, b""), *blake3::hash(&[0x00]).as_bytes());
    }

    #[test]
    fn test_combine_respects_side() {
        let current = leaf_digest(&Blake3, b"a");
        let sibling = leaf_digest(&Blake3, b"b");

        let right = combine(&Blake3, &current, &ProofStep::right(sibling));
        assert_eq!(right, node_digest(&Blake3, &current, &sibling));

        let left = combine(&Blake3, &current, &ProofStep::left(sibling));
        assert_eq!(left, node_digest(&Blake3, &sibling, &current));

        assert_ne!(left, right);
    }

    #[test]
    fn test_combine_empty_pads_on_the_right() {
        let current = leaf_digest(&Blake3, b"dangling");
        let padded = combine(&Blake3, &current, &ProofStep::empty());

        let mut expected = Vec::with_capacity(33);
        expected.push(NODE_TAG);
        expected.extend_from_slice(&current);
        assert_eq!(padded, *blake3::hash(&expected).as_bytes());
    }
}

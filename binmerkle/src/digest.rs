//! Digest providers.
//!
//! The tree never names a hash function directly; every digest goes through
//! a [`DigestProvider`], so leaf and node hashing are guaranteed to use the
//! same function and tests can swap in a stub.

use blake2::{Blake2b, Digest as _, digest::consts::U32};
use sha2::Sha256 as Sha256Hasher;

/// The length of a [`Digest`] (in bytes).
pub const DIGEST_LENGTH: usize = 32;

/// A fixed-size hash output.
pub type Digest = [u8; DIGEST_LENGTH];

/// One-way hash function producing [`DIGEST_LENGTH`]-byte digests.
pub trait DigestProvider: Send + Sync {
    /// Hashes the concatenation of `parts`.
    fn digest(&self, parts: &[&[u8]]) -> Digest;
}

impl<P: DigestProvider + ?Sized> DigestProvider for &P {
    fn digest(&self, parts: &[&[u8]]) -> Digest {
        (**self).digest(parts)
    }
}

impl<P: DigestProvider + ?Sized> DigestProvider for Box<P> {
    fn digest(&self, parts: &[&[u8]]) -> Digest {
        (**self).digest(parts)
    }
}

/// Blake3.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Blake3;

impl DigestProvider for Blake3 {
    fn digest(&self, parts: &[&[u8]]) -> Digest {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        *hasher.finalize().as_bytes()
    }
}

/// Blake2b with a 256-bit output, the digest Waves/Ride verifiers expect.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Blake2b256;

impl DigestProvider for Blake2b256 {
    fn digest(&self, parts: &[&[u8]]) -> Digest {
        let mut hasher = Blake2b::<U32>::new();
        for part in parts {
            hasher.update(part);
        }
        let mut digest: Digest = Default::default();
        digest.copy_from_slice(&hasher.finalize());
        digest
    }
}

/// SHA-256.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha256;

impl DigestProvider for Sha256 {
    fn digest(&self, parts: &[&[u8]]) -> Digest {
        let mut hasher = Sha256Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        let mut digest: Digest = Default::default();
        digest.copy_from_slice(&hasher.finalize());
        digest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_vectors() {
        assert_eq!(
            hex::encode(Blake3.digest(&[])),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
        assert_eq!(
            hex::encode(Blake2b256.digest(&[])),
            "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8"
        );
        assert_eq!(
            hex::encode(Sha256.digest(&[])),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_parts_hash_as_concatenation() {
        let providers: [&dyn DigestProvider; 3] = [&Blake3, &Blake2b256, &Sha256];
        for provider in providers {
            let split = provider.digest(&[b"ab", b"", b"cde"]);
            let joined = provider.digest(&[b"abcde"]);
            assert_eq!(split, joined);
        }
    }

    #[test]
    fn test_blake3_matches_crate_hash() {
        assert_eq!(Blake3.digest(&[b"zero"]), *blake3::hash(b"zero").as_bytes());
    }
}

//! Test digest providers.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::{Blake3, Digest, DigestProvider};

/// Stub provider whose digests are easy to read in a failing assertion:
/// byte 0 is the input length, byte 1 the first input byte (the domain tag)
/// and the rest is an FNV-1a fold of the input.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StubDigest;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl DigestProvider for StubDigest {
    fn digest(&self, parts: &[&[u8]]) -> Digest {
        let mut length = 0usize;
        let mut first = None;
        let mut lanes = [FNV_OFFSET; 4];
        for byte in parts.iter().flat_map(|part| part.iter()) {
            first.get_or_insert(*byte);
            length += 1;
            for (lane, state) in lanes.iter_mut().enumerate() {
                *state ^= (*byte as u64) ^ ((lane as u64) << 8);
                *state = state.wrapping_mul(FNV_PRIME);
            }
        }

        let mut digest: Digest = Default::default();
        for (chunk, state) in digest.chunks_mut(8).zip(lanes) {
            chunk.copy_from_slice(&state.to_be_bytes());
        }
        digest[0] = length as u8;
        digest[1] = first.unwrap_or(0xff);
        digest
    }
}

/// Blake3 provider counting its invocations.
#[derive(Debug, Default)]
pub(crate) struct CountingDigest {
    calls: AtomicU32,
}

impl CountingDigest {
    pub(crate) fn calls(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl DigestProvider for CountingDigest {
    fn digest(&self, parts: &[&[u8]]) -> Digest {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Blake3.digest(parts)
    }
}

/// `"zero"`, `"one"`, ... for the first `count` numbers (up to 16).
pub(crate) fn number_names(count: usize) -> Vec<&'static str> {
    const NAMES: [&str; 16] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "thirteen", "fourteen", "fifteen",
    ];
    NAMES[..count].to_vec()
}

/// Distinct leaves `leaf-0`, `leaf-1`, ...
pub(crate) fn indexed_leaves(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("leaf-{i}").into_bytes())
        .collect()
}

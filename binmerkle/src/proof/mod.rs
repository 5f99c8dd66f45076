//! Single-leaf inclusion proofs and their wire encoding.
//!
//! A proof is one [`ProofStep`] per tree level, leaf level first. On the wire
//! each step is
//!
//! `side (1) || length (1) || sibling (length)`
//!
//! where `side` is `0x00` (sibling on the left) or `0x01` (sibling on the
//! right) and `length` is either `0` (no sibling, the node was dangling) or
//! [`DIGEST_LENGTH`]. Steps are concatenated with no framing.

pub(crate) mod accumulator;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DIGEST_LENGTH, Digest, MerkleError, Result};

// The length byte on the wire must be able to carry a full sibling.
const _: () = assert!(DIGEST_LENGTH <= u8::MAX as usize);

/// Upper bound on decoded steps. A proof has one step per level, so 64 steps
/// already covers more leaves than a `usize` can index.
pub const MAX_PROOF_STEPS: usize = 64;

/// Which side of the running ancestor the sibling occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Side {
    /// Sibling is hashed first: `H(0x01 || sibling || current)`.
    Left = 0x00,
    /// Sibling is hashed second: `H(0x01 || current || sibling)`.
    Right = 0x01,
}

impl Side {
    /// Wire byte for this side.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parse a wire byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Side::Left),
            0x01 => Some(Side::Right),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = MerkleError;

    fn try_from(byte: u8) -> Result<Self> {
        Side::from_byte(byte)
            .ok_or_else(|| MerkleError::InvalidProof(format!("unknown side byte {:#04x}", byte)))
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// One level of a proof: the sibling of the running ancestor, or nothing
/// when the ancestor had no pair at that level.
///
/// Steps only come from [`left`](Self::left), [`right`](Self::right),
/// [`empty`](Self::empty) or decoding, so an empty step is always marked
/// [`Side::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProofStep"))]
pub struct ProofStep {
    side: Side,
    sibling: Option<Digest>,
}

/// Unchecked serde shape of a [`ProofStep`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawProofStep {
    side: Side,
    sibling: Option<Digest>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProofStep> for ProofStep {
    type Error = MerkleError;

    fn try_from(raw: RawProofStep) -> Result<Self> {
        match (raw.side, raw.sibling) {
            (Side::Right, None) => Err(MerkleError::InvalidProof(
                "empty sibling marked right".to_string(),
            )),
            (side, sibling) => Ok(ProofStep { side, sibling }),
        }
    }
}

impl ProofStep {
    /// Sibling sits to the left of the running ancestor.
    pub fn left(sibling: Digest) -> Self {
        ProofStep {
            side: Side::Left,
            sibling: Some(sibling),
        }
    }

    /// Sibling sits to the right of the running ancestor.
    pub fn right(sibling: Digest) -> Self {
        ProofStep {
            side: Side::Right,
            sibling: Some(sibling),
        }
    }

    /// No sibling at this level. Always marked [`Side::Left`].
    pub fn empty() -> Self {
        ProofStep {
            side: Side::Left,
            sibling: None,
        }
    }

    /// Side the sibling occupies.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Sibling digest; `None` for a dangling ancestor.
    pub fn sibling(&self) -> Option<&Digest> {
        self.sibling.as_ref()
    }

    /// Whether this step has the only accepted form of its kind: an empty
    /// step must be marked [`Side::Left`].
    pub fn is_canonical(&self) -> bool {
        !(self.sibling.is_none() && self.side == Side::Right)
    }

    /// Whether this step carries no sibling.
    pub fn is_empty(&self) -> bool {
        self.sibling.is_none()
    }

    /// Sibling bytes as they appear on the wire (zero-length when empty).
    pub fn sibling_bytes(&self) -> &[u8] {
        match &self.sibling {
            Some(sibling) => sibling,
            None => &[],
        }
    }

    /// Encoded size of this step in bytes.
    pub fn encoded_len(&self) -> usize {
        2 + self.sibling_bytes().len()
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        let sibling = self.sibling_bytes();
        out.push(self.side.as_byte());
        // bounded by DIGEST_LENGTH, checked at compile time above
        out.push(sibling.len() as u8);
        out.extend_from_slice(sibling);
    }
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sibling {
            Some(sibling) => write!(f, "{} {}", self.side, hex::encode(sibling)),
            None => write!(f, "empty"),
        }
    }
}

/// An inclusion proof for one leaf, ordered leaf level first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Proof {
    steps: Vec<ProofStep>,
}

impl Proof {
    /// Construct a proof from steps ordered leaf level first.
    pub fn new(steps: Vec<ProofStep>) -> Self {
        Proof { steps }
    }

    /// The steps, leaf level first.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Number of steps (tree levels covered).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the proof has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Encoded size in bytes.
    pub fn encoded_len(&self) -> usize {
        self.steps.iter().map(ProofStep::encoded_len).sum()
    }

    /// Whether every step is [`canonical`](ProofStep::is_canonical).
    pub fn is_canonical(&self) -> bool {
        self.steps.iter().all(ProofStep::is_canonical)
    }

    /// Whether this is the proof of a single-leaf tree: exactly one
    /// empty-sibling step.
    pub(crate) fn is_single_leaf(&self) -> bool {
        matches!(self.steps.as_slice(), [step] if step.is_empty())
    }

    /// Encode to the flat wire layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        for step in &self.steps {
            step.encode_into(&mut out);
        }
        out
    }

    /// Decode from the flat wire layout.
    ///
    /// Rejects truncated steps, unknown side bytes, sibling lengths other
    /// than `0` or [`DIGEST_LENGTH`], empty steps marked [`Side::Right`] and
    /// proofs longer than [`MAX_PROOF_STEPS`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut steps = Vec::new();
        let mut offset = 0;

        while offset < bytes.len() {
            if steps.len() == MAX_PROOF_STEPS {
                return Err(MerkleError::InvalidProof(format!(
                    "proof has more than {} steps",
                    MAX_PROOF_STEPS
                )));
            }

            let header = bytes.get(offset..offset + 2).ok_or_else(|| {
                MerkleError::InvalidProof(format!("truncated step header at offset {}", offset))
            })?;
            let side = Side::try_from(header[0])?;
            let length = header[1] as usize;
            offset += 2;

            let step = match length {
                0 if side == Side::Right => {
                    return Err(MerkleError::InvalidProof(format!(
                        "empty sibling marked right at offset {}",
                        offset - 2
                    )));
                }
                0 => ProofStep::empty(),
                DIGEST_LENGTH => {
                    let sibling = bytes.get(offset..offset + DIGEST_LENGTH).ok_or_else(|| {
                        MerkleError::InvalidProof(format!(
                            "truncated sibling at offset {} ({} bytes left, expected {})",
                            offset,
                            bytes.len() - offset,
                            DIGEST_LENGTH
                        ))
                    })?;
                    let mut digest: Digest = Default::default();
                    digest.copy_from_slice(sibling);
                    offset += DIGEST_LENGTH;
                    match side {
                        Side::Left => ProofStep::left(digest),
                        Side::Right => ProofStep::right(digest),
                    }
                }
                other => {
                    return Err(MerkleError::InvalidProof(format!(
                        "sibling length {} does not match digest length {}",
                        other, DIGEST_LENGTH
                    )));
                }
            };
            steps.push(step);
        }

        Ok(Proof { steps })
    }
}

impl From<Vec<ProofStep>> for Proof {
    fn from(steps: Vec<ProofStep>) -> Self {
        Proof::new(steps)
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proof [")?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", step)?;
        }
        write!(f, "]")
    }
}

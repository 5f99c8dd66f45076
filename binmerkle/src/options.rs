use std::fmt;

use crate::{MerkleError, Result};

/// Default cap on the number of leaves accepted by a single build.
pub const DEFAULT_MAX_LEAF_COUNT: usize = 1 << 24;

/// Default level width from which reduction and proof extension are fanned
/// out across threads (with the `parallel` feature).
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Options controlling tree construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    /// Reject inputs with more leaves than this before hashing anything.
    /// `None` accepts any size.
    pub max_leaf_count: Option<usize>,
    /// Levels at least this wide are processed on the rayon pool. Has no
    /// effect without the `parallel` feature.
    pub parallel_threshold: usize,
}

impl fmt::Display for TreeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_leaf_count {
            Some(max) => write!(
                f,
                "TreeOptions {{ max_leaf_count: {}, parallel_threshold: {} }}",
                max, self.parallel_threshold
            ),
            None => write!(
                f,
                "TreeOptions {{ max_leaf_count: unbounded, parallel_threshold: {} }}",
                self.parallel_threshold
            ),
        }
    }
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            max_leaf_count: Some(DEFAULT_MAX_LEAF_COUNT),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl TreeOptions {
    /// Default options without a leaf cap.
    pub fn unbounded() -> Self {
        Self {
            max_leaf_count: None,
            ..Default::default()
        }
    }

    /// Default options with a different leaf cap.
    pub fn with_max_leaf_count(max_leaf_count: usize) -> Self {
        Self {
            max_leaf_count: Some(max_leaf_count),
            ..Default::default()
        }
    }

    /// Default options that never go parallel.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Default::default()
        }
    }

    pub(crate) fn check_leaf_count(&self, count: usize) -> Result<()> {
        match self.max_leaf_count {
            Some(max) if count > max => Err(MerkleError::TooManyLeaves { count, max }),
            _ => Ok(()),
        }
    }

    pub(crate) fn is_parallel(&self, width: usize) -> bool {
        cfg!(feature = "parallel") && width >= self.parallel_threshold
    }
}

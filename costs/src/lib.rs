#![deny(missing_docs)]
//! Interface crate to unify how operations' hashing costs are passed and
//! retrieved.

mod context;

use std::ops::{Add, AddAssign};

pub use context::{CostContext, CostResult, CostsExt};

/// Digest invocations performed by an operation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct OperationCost {
    /// How many times a leaf was hashed (`LEAF_TAG ++ leaf`).
    pub hash_leaf_calls: u32,
    /// How many times two nodes were combined (`NODE_TAG ++ left ++ right`).
    pub hash_node_calls: u32,
}

impl OperationCost {
    /// Helper function to build default `OperationCost` with different
    /// `hash_leaf_calls`.
    pub fn with_hash_leaf_calls(hash_leaf_calls: u32) -> Self {
        OperationCost {
            hash_leaf_calls,
            ..Default::default()
        }
    }

    /// Helper function to build default `OperationCost` with different
    /// `hash_node_calls`.
    pub fn with_hash_node_calls(hash_node_calls: u32) -> Self {
        OperationCost {
            hash_node_calls,
            ..Default::default()
        }
    }

    /// Total number of digest invocations.
    pub fn hash_calls(&self) -> u64 {
        self.hash_leaf_calls as u64 + self.hash_node_calls as u64
    }

    /// Returns true if no hashing was done.
    pub fn is_nothing(&self) -> bool {
        self.hash_calls() == 0
    }
}

impl Add for OperationCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        OperationCost {
            hash_leaf_calls: self.hash_leaf_calls + rhs.hash_leaf_calls,
            hash_node_calls: self.hash_node_calls + rhs.hash_node_calls,
        }
    }
}

impl AddAssign for OperationCost {
    fn add_assign(&mut self, rhs: Self) {
        self.hash_leaf_calls += rhs.hash_leaf_calls;
        self.hash_node_calls += rhs.hash_node_calls;
    }
}

/// Unwrap a plain `Result` inside a function returning `CostResult`. On `Err`
/// it returns early, carrying the cost accumulated so far in `$cost`.
#[macro_export]
macro_rules! cost_return_on_error_no_add {
    ( $cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result = { $($body)+ };
            match result {
                Ok(x) => x,
                Err(e) => return Err(e).wrap_with_cost($cost),
            }
        }
    };
}

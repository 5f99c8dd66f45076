use crate::OperationCost;

/// A value together with the digest work spent producing it.
#[must_use]
#[derive(Debug, Eq, PartialEq)]
pub struct CostContext<T> {
    /// The produced value.
    pub value: T,
    /// Digest invocations spent on it.
    pub cost: OperationCost,
}

impl<T> CostContext<T> {
    /// Move the cost into `acc` and return the value.
    pub fn unwrap_add_cost(self, acc: &mut OperationCost) -> T {
        *acc += self.cost;
        self.value
    }

    /// Return the value, discarding the cost.
    pub fn unwrap(self) -> T {
        self.value
    }

    /// Feed the value into a follow-up step; the result carries both costs.
    pub fn flat_map<B>(self, f: impl FnOnce(T) -> CostContext<B>) -> CostContext<B> {
        let mut cost = self.cost;
        let value = f(self.value).unwrap_add_cost(&mut cost);
        CostContext { value, cost }
    }

    /// Charge work done outside this context.
    pub fn add_cost(mut self, cost: OperationCost) -> Self {
        self.cost += cost;
        self
    }
}

/// Fallible operation result with its cost.
pub type CostResult<T, E> = CostContext<Result<T, E>>;

/// Attach a cost to any value.
pub trait CostsExt: Sized {
    /// Wrap `self` with the given cost.
    fn wrap_with_cost(self, cost: OperationCost) -> CostContext<Self> {
        CostContext { value: self, cost }
    }
}

impl<T> CostsExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_map_sums_costs() {
        let leaf = [0u8; 4].wrap_with_cost(OperationCost::with_hash_leaf_calls(1));
        let chained = leaf.flat_map(|bytes| {
            (bytes.len() == 4).wrap_with_cost(OperationCost::with_hash_node_calls(3))
        });
        assert_eq!(
            chained,
            CostContext {
                value: true,
                cost: OperationCost {
                    hash_leaf_calls: 1,
                    hash_node_calls: 3,
                },
            }
        );
    }

    #[test]
    fn test_unwrap_add_cost_accumulates() {
        let mut total = OperationCost::with_hash_node_calls(2);
        let value = 7u32
            .wrap_with_cost(OperationCost::with_hash_node_calls(5))
            .unwrap_add_cost(&mut total);
        assert_eq!(value, 7);
        assert_eq!(total, OperationCost::with_hash_node_calls(7));
    }

    #[test]
    fn test_add_cost_and_unwrap() {
        let ctx: CostResult<u8, ()> = Ok(1).wrap_with_cost(OperationCost::default());
        let ctx = ctx.add_cost(OperationCost::with_hash_leaf_calls(2));
        assert_eq!(ctx.cost.hash_calls(), 2);
        assert_eq!(ctx.unwrap(), Ok(1));
    }
}

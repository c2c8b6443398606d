//! Iteration strategies a selector runtime dispatches on.

use selectorforge_config::SelectionOrder;

/// How a selector walks its elements once its order is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IterationStrategy {
    /// Source order, each element once per pass.
    Sequential,

    /// Comparator order over a materialized element list.
    Sorted,

    /// Uniform random picks from the pool; elements may repeat.
    RandomWithReplacement,

    /// One permutation of the materialized elements per iterator.
    Shuffled,

    /// Random picks weighted by a per-element probability.
    WeightedRandom,
}

impl IterationStrategy {
    /// Returns the strategy for a resolved selection order.
    ///
    /// Returns `None` for `Inherit`, which has no runtime meaning.
    pub fn for_order(order: SelectionOrder) -> Option<Self> {
        match order {
            SelectionOrder::Inherit => None,
            SelectionOrder::Original => Some(IterationStrategy::Sequential),
            SelectionOrder::Sorted => Some(IterationStrategy::Sorted),
            SelectionOrder::Random => Some(IterationStrategy::RandomWithReplacement),
            SelectionOrder::Shuffled => Some(IterationStrategy::Shuffled),
            SelectionOrder::Probabilistic => Some(IterationStrategy::WeightedRandom),
        }
    }

    /// Returns `true` if the iterator never runs out of elements on its own.
    pub fn is_never_ending(&self) -> bool {
        matches!(
            self,
            IterationStrategy::RandomWithReplacement | IterationStrategy::WeightedRandom
        )
    }

    /// Returns `true` if all elements must be collected before the first is yielded.
    pub fn requires_materialization(&self) -> bool {
        matches!(
            self,
            IterationStrategy::Sorted
                | IterationStrategy::Shuffled
                | IterationStrategy::WeightedRandom
        )
    }
}

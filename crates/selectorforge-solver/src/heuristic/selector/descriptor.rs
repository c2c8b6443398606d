//! Frozen runtime view of a configured selector tree.

use std::fmt;

use selectorforge_config::{SelectionCacheType, SelectionOrder};

use super::IterationStrategy;

/// The kind of selector a descriptor node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    ChangeMove,
    SwapMove,
    UnionMove,
    CartesianProductMove,
    Entity,
    Value,
}

impl SelectorKind {
    /// Returns the configuration name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorKind::ChangeMove => "change_move_selector",
            SelectorKind::SwapMove => "swap_move_selector",
            SelectorKind::UnionMove => "union_move_selector",
            SelectorKind::CartesianProductMove => "cartesian_product_move_selector",
            SelectorKind::Entity => "entity_selector",
            SelectorKind::Value => "value_selector",
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selector node with its selection order and cache type resolved.
///
/// Built once by [`SelectorTreeBuilder`](crate::SelectorTreeBuilder) and
/// never mutated afterwards. `selection_order` is never `Inherit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorDescriptor {
    kind: SelectorKind,
    path: String,
    selection_order: SelectionOrder,
    cache_type: SelectionCacheType,
    strategy: IterationStrategy,
    children: Vec<SelectorDescriptor>,
}

impl SelectorDescriptor {
    pub(crate) fn new(
        kind: SelectorKind,
        path: String,
        selection_order: SelectionOrder,
        cache_type: SelectionCacheType,
        strategy: IterationStrategy,
        children: Vec<SelectorDescriptor>,
    ) -> Self {
        Self {
            kind,
            path,
            selection_order,
            cache_type,
            strategy,
            children,
        }
    }

    pub fn kind(&self) -> SelectorKind {
        self.kind
    }

    /// Slash-separated position of this node in its tree.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn selection_order(&self) -> SelectionOrder {
        self.selection_order
    }

    pub fn cache_type(&self) -> SelectionCacheType {
        self.cache_type
    }

    pub fn strategy(&self) -> IterationStrategy {
        self.strategy
    }

    pub fn children(&self) -> &[SelectorDescriptor] {
        &self.children
    }

    /// Returns `true` if iterating this selector never ends on its own.
    pub fn is_never_ending(&self) -> bool {
        self.strategy.is_never_ending()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(SelectorDescriptor::len).sum::<usize>()
    }

    /// Always `false`: a descriptor contains at least itself.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over this subtree in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectorDescriptor> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Finds the node with the given path in this subtree.
    pub fn find(&self, path: &str) -> Option<&SelectorDescriptor> {
        self.iter().find(|node| node.path == path)
    }
}

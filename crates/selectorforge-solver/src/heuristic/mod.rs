//! Heuristic building blocks used by search phases.

pub mod selector;

pub use selector::{IterationStrategy, SelectorDescriptor, SelectorKind};

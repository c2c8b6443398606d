//! SelectorForge Solver Engine
//!
//! This crate turns configured selector trees into resolved runtime
//! descriptors:
//! - Selector tree builder (top-down selection order resolution)
//! - Cache type validation of every resolved order
//! - Iteration strategy per selector
//! - Per-phase selector plans

pub mod builder;
pub mod heuristic;

pub use builder::{
    build_phase_plans, root_selection_order, PhaseSelectorPlan, SelectorTreeBuilder,
    CONSTRUCTION_HEURISTIC_ROOT_SELECTION_ORDER, DEFAULT_ROOT_SELECTION_ORDER,
};
pub use heuristic::{IterationStrategy, SelectorDescriptor, SelectorKind};

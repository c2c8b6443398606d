//! Selector runtime descriptors.
//!
//! Selectors enumerate the elements that the solver considers when
//! exploring the solution space. The descriptors here carry the frozen,
//! resolved selection order of each selector in a configured tree.

mod descriptor;
mod iteration;

pub use descriptor::{SelectorDescriptor, SelectorKind};
pub use iteration::IterationStrategy;

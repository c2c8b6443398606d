//! SelectorForge - Selector configuration for local search in Rust
//!
//! Load a selector tree, resolve the selection order of every selector
//! against its parent, and hand the frozen descriptors to the runtime.
//!
//! # Example
//!
//! ```rust
//! use selectorforge::prelude::*;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [[phases]]
//!     type = "local_search"
//!     [phases.move_selector]
//!     type = "swap_move_selector"
//! "#).unwrap();
//!
//! let plans = build_phase_plans(&config).unwrap();
//! let tree = plans[0].move_selector.as_ref().unwrap();
//! assert_eq!(tree.selection_order(), SelectionOrder::Random);
//! ```

pub use selectorforge_config as config;
pub use selectorforge_solver as solver;

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use selectorforge_config::{
        ConfigError, MoveSelectorConfig, PhaseConfig, SelectionCacheType, SelectionOrder,
        SolverConfig,
    };
    pub use selectorforge_solver::{
        build_phase_plans, IterationStrategy, PhaseSelectorPlan, SelectorDescriptor,
        SelectorKind, SelectorTreeBuilder,
    };
}

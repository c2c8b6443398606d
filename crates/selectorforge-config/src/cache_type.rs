//! Cache scope of a selector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How long a selector's computed elements stay valid before recomputation.
///
/// Variants are ordered from shortest to longest lived, so
/// `SelectionCacheType::Phase > SelectionCacheType::Step`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SelectionCacheType {
    /// Elements are generated when they are needed. Nothing is cached.
    #[default]
    JustInTime,

    /// Elements are cached at the start of each step.
    Step,

    /// Elements are cached at the start of each phase.
    Phase,

    /// Elements are cached once for the whole solve.
    Solver,
}

impl SelectionCacheType {
    /// Returns `true` for step-level caching or coarser.
    pub fn is_cached(&self) -> bool {
        *self >= SelectionCacheType::Step
    }

    /// Returns the configuration name of this cache type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionCacheType::JustInTime => "just_in_time",
            SelectionCacheType::Step => "step",
            SelectionCacheType::Phase => "phase",
            SelectionCacheType::Solver => "solver",
        }
    }
}

impl fmt::Display for SelectionCacheType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

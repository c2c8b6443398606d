//! Configuration system for SelectorForge.
//!
//! Load selector trees from TOML or YAML files and resolve the selection
//! order of each selector against its parent.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use selectorforge_config::{PhaseConfig, SelectionOrder, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [[phases]]
//!     type = "local_search"
//!     [phases.move_selector]
//!     type = "change_move_selector"
//!     selection_order = "shuffled"
//!     cache_type = "step"
//! "#).unwrap();
//!
//! assert_eq!(config.phases.len(), 1);
//! let PhaseConfig::LocalSearch(local_search) = &config.phases[0] else {
//!     panic!("expected local search");
//! };
//! let selector = local_search.move_selector.as_ref().unwrap();
//! assert_eq!(selector.selection_order(), Some(SelectionOrder::Shuffled));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use selectorforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod cache_type;
mod selection_order;
mod selector;

pub use cache_type::SelectionCacheType;
pub use selection_order::SelectionOrder;
pub use selector::{
    CartesianProductConfig, ChangeMoveConfig, EntitySelectorConfig, MoveSelectorConfig,
    SwapMoveConfig, UnionMoveSelectorConfig, ValueSelectorConfig,
};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A caller broke an API precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Phase configurations.
    #[serde(default)]
    pub phases: Vec<PhaseConfig>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a phase configuration.
    pub fn with_phase(mut self, phase: PhaseConfig) -> Self {
        self.phases.push(phase);
        self
    }
}

/// Phase configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhaseConfig {
    /// Construction heuristic phase.
    ConstructionHeuristic(ConstructionHeuristicConfig),

    /// Local search phase.
    LocalSearch(LocalSearchConfig),
}

impl PhaseConfig {
    /// Returns the configuration tag of this phase.
    pub fn type_name(&self) -> &'static str {
        match self {
            PhaseConfig::ConstructionHeuristic(_) => "construction_heuristic",
            PhaseConfig::LocalSearch(_) => "local_search",
        }
    }

    /// Returns the move selector of this phase, if configured.
    pub fn move_selector(&self) -> Option<&MoveSelectorConfig> {
        match self {
            PhaseConfig::ConstructionHeuristic(c) => c.move_selector.as_ref(),
            PhaseConfig::LocalSearch(c) => c.move_selector.as_ref(),
        }
    }
}

/// Construction heuristic configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstructionHeuristicConfig {
    /// Move selector configuration.
    pub move_selector: Option<MoveSelectorConfig>,
}

/// Local search configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Move selector configuration.
    pub move_selector: Option<MoveSelectorConfig>,
}

#[cfg(test)]
mod tests;

//! Builder module for constructing selector trees from configuration
//!
//! This module walks a configured selector tree from the root down,
//! resolves every node's selection order against its parent, and checks
//! the result against the node's cache type.

use rayon::prelude::*;
use selectorforge_config::{
    ConfigError, EntitySelectorConfig, MoveSelectorConfig, PhaseConfig, SelectionCacheType,
    SelectionOrder, SolverConfig, ValueSelectorConfig,
};
use tracing::{debug, info};

use crate::heuristic::{IterationStrategy, SelectorDescriptor, SelectorKind};

/// Order inherited by a root selector that has no parent.
pub const DEFAULT_ROOT_SELECTION_ORDER: SelectionOrder = SelectionOrder::Random;

/// Order inherited by the root selector of a construction heuristic phase.
pub const CONSTRUCTION_HEURISTIC_ROOT_SELECTION_ORDER: SelectionOrder = SelectionOrder::Original;

/// Builder for resolved selector trees.
///
/// # Examples
///
/// ```
/// use selectorforge_config::{ChangeMoveConfig, EntitySelectorConfig, MoveSelectorConfig, SelectionOrder};
/// use selectorforge_solver::SelectorTreeBuilder;
///
/// let config = MoveSelectorConfig::ChangeMoveSelector(ChangeMoveConfig {
///     entity_selector: Some(EntitySelectorConfig::default()),
///     ..Default::default()
/// });
///
/// let tree = SelectorTreeBuilder::default().build(&config).unwrap();
/// assert_eq!(tree.selection_order(), SelectionOrder::Random);
/// assert_eq!(tree.children()[0].selection_order(), SelectionOrder::Random);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SelectorTreeBuilder {
    root_order: SelectionOrder,
    parallel_branches: bool,
}

impl Default for SelectorTreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_SELECTION_ORDER)
    }
}

impl SelectorTreeBuilder {
    /// Creates a builder whose root selector inherits `root_order`.
    ///
    /// `root_order` must be resolved; `Inherit` makes every build fail with
    /// [`ConfigError::InvalidArgument`].
    pub fn new(root_order: SelectionOrder) -> Self {
        Self {
            root_order,
            parallel_branches: false,
        }
    }

    /// Resolves sibling subtrees on the rayon thread pool.
    pub fn with_parallel_branches(mut self, parallel: bool) -> Self {
        self.parallel_branches = parallel;
        self
    }

    pub fn root_order(&self) -> SelectionOrder {
        self.root_order
    }

    /// Builds the resolved descriptor tree for a move selector.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidArgument`] if the root order is `Inherit`.
    /// - [`ConfigError::Invalid`] if a node's resolved order needs caching
    ///   but its cache type is `just_in_time`, or a union / cartesian
    ///   product has no child selectors.
    pub fn build(&self, config: &MoveSelectorConfig) -> Result<SelectorDescriptor, ConfigError> {
        let tree =
            self.build_move_selector(config, Some(self.root_order), config.type_name().to_string())?;
        info!(
            event = "selector_tree_built",
            root = %tree.kind(),
            selection_order = %tree.selection_order(),
            node_count = tree.len(),
        );
        Ok(tree)
    }

    fn build_move_selector(
        &self,
        config: &MoveSelectorConfig,
        inherited: Option<SelectionOrder>,
        path: String,
    ) -> Result<SelectorDescriptor, ConfigError> {
        match config {
            MoveSelectorConfig::ChangeMoveSelector(c) => {
                let node = resolve_node(
                    SelectorKind::ChangeMove,
                    &path,
                    c.selection_order,
                    c.cache_type,
                    inherited,
                )?;
                let mut children = Vec::new();
                if let Some(entity) = &c.entity_selector {
                    children.push(build_entity_selector(
                        entity,
                        node.selection_order,
                        format!("{path}/entity_selector"),
                    )?);
                }
                if let Some(value) = &c.value_selector {
                    children.push(build_value_selector(
                        value,
                        node.selection_order,
                        format!("{path}/value_selector"),
                    )?);
                }
                Ok(node.into_descriptor(path, children))
            }

            MoveSelectorConfig::SwapMoveSelector(c) => {
                let node = resolve_node(
                    SelectorKind::SwapMove,
                    &path,
                    c.selection_order,
                    c.cache_type,
                    inherited,
                )?;
                let mut children = Vec::new();
                if let Some(entity) = &c.entity_selector {
                    children.push(build_entity_selector(
                        entity,
                        node.selection_order,
                        format!("{path}/entity_selector"),
                    )?);
                }
                if let Some(entity) = &c.secondary_entity_selector {
                    children.push(build_entity_selector(
                        entity,
                        node.selection_order,
                        format!("{path}/secondary_entity_selector"),
                    )?);
                }
                Ok(node.into_descriptor(path, children))
            }

            MoveSelectorConfig::UnionMoveSelector(c) => self.build_composite(
                SelectorKind::UnionMove,
                path,
                c.selection_order,
                c.cache_type,
                &c.selectors,
                inherited,
            ),

            MoveSelectorConfig::CartesianProductMoveSelector(c) => self.build_composite(
                SelectorKind::CartesianProductMove,
                path,
                c.selection_order,
                c.cache_type,
                &c.selectors,
                inherited,
            ),
        }
    }

    fn build_composite(
        &self,
        kind: SelectorKind,
        path: String,
        configured: Option<SelectionOrder>,
        cache_type: Option<SelectionCacheType>,
        selectors: &[MoveSelectorConfig],
        inherited: Option<SelectionOrder>,
    ) -> Result<SelectorDescriptor, ConfigError> {
        let node = resolve_node(kind, &path, configured, cache_type, inherited)?;
        if selectors.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "The {kind} ({path}) must have at least one child selector."
            )));
        }

        let children = self.build_children(selectors, node.selection_order, &path)?;
        Ok(node.into_descriptor(path, children))
    }

    fn build_children(
        &self,
        selectors: &[MoveSelectorConfig],
        inherited: SelectionOrder,
        path: &str,
    ) -> Result<Vec<SelectorDescriptor>, ConfigError> {
        let build_child = |(index, child): (usize, &MoveSelectorConfig)| {
            self.build_move_selector(
                child,
                Some(inherited),
                format!("{path}/{index}/{}", child.type_name()),
            )
        };

        if self.parallel_branches {
            // Collected in sibling order so the reported error is deterministic.
            let results: Vec<_> = selectors.par_iter().enumerate().map(build_child).collect();
            results.into_iter().collect()
        } else {
            selectors.iter().enumerate().map(build_child).collect()
        }
    }
}

fn build_entity_selector(
    config: &EntitySelectorConfig,
    inherited: SelectionOrder,
    path: String,
) -> Result<SelectorDescriptor, ConfigError> {
    let node = resolve_node(
        SelectorKind::Entity,
        &path,
        config.selection_order,
        config.cache_type,
        Some(inherited),
    )?;
    Ok(node.into_descriptor(path, Vec::new()))
}

fn build_value_selector(
    config: &ValueSelectorConfig,
    inherited: SelectionOrder,
    path: String,
) -> Result<SelectorDescriptor, ConfigError> {
    let node = resolve_node(
        SelectorKind::Value,
        &path,
        config.selection_order,
        config.cache_type,
        Some(inherited),
    )?;
    Ok(node.into_descriptor(path, Vec::new()))
}

struct ResolvedNode {
    kind: SelectorKind,
    selection_order: SelectionOrder,
    cache_type: SelectionCacheType,
    strategy: IterationStrategy,
}

impl ResolvedNode {
    fn into_descriptor(
        self,
        path: String,
        children: Vec<SelectorDescriptor>,
    ) -> SelectorDescriptor {
        SelectorDescriptor::new(
            self.kind,
            path,
            self.selection_order,
            self.cache_type,
            self.strategy,
            children,
        )
    }
}

fn resolve_node(
    kind: SelectorKind,
    path: &str,
    configured: Option<SelectionOrder>,
    cache_type: Option<SelectionCacheType>,
    inherited: Option<SelectionOrder>,
) -> Result<ResolvedNode, ConfigError> {
    let selection_order = SelectionOrder::resolve(configured, inherited)?;
    let cache_type = cache_type.unwrap_or_default();

    if selection_order.requires_caching() && !cache_type.is_cached() {
        return Err(ConfigError::Invalid(format!(
            "The {kind} ({path}) has selection order ({selection_order}) \
             which requires a cache type of step or higher, but has cache type ({cache_type})."
        )));
    }

    let strategy = IterationStrategy::for_order(selection_order).ok_or_else(|| {
        ConfigError::InvalidArgument(format!(
            "The {kind} ({path}) resolved to an unresolved selection order ({selection_order})."
        ))
    })?;

    debug!(
        event = "selector_resolved",
        kind = %kind,
        path = path,
        configured = ?configured,
        inherited = ?inherited,
        selection_order = %selection_order,
        cache_type = %cache_type,
    );

    Ok(ResolvedNode {
        kind,
        selection_order,
        cache_type,
        strategy,
    })
}

/// Resolved move selector tree of one configured phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSelectorPlan {
    /// Position of the phase in the solver configuration.
    pub phase_index: usize,

    /// Configuration tag of the phase.
    pub phase_type: &'static str,

    /// Resolved move selector, if the phase configures one.
    pub move_selector: Option<SelectorDescriptor>,
}

/// Returns the order a phase's root selector inherits.
pub fn root_selection_order(phase: &PhaseConfig) -> SelectionOrder {
    match phase {
        PhaseConfig::ConstructionHeuristic(_) => CONSTRUCTION_HEURISTIC_ROOT_SELECTION_ORDER,
        PhaseConfig::LocalSearch(_) => DEFAULT_ROOT_SELECTION_ORDER,
    }
}

/// Builds the resolved selector tree of every configured phase.
///
/// # Errors
///
/// Returns the first error of any phase, unchanged.
pub fn build_phase_plans(config: &SolverConfig) -> Result<Vec<PhaseSelectorPlan>, ConfigError> {
    config
        .phases
        .iter()
        .enumerate()
        .map(|(phase_index, phase)| -> Result<PhaseSelectorPlan, ConfigError> {
            let move_selector = phase
                .move_selector()
                .map(|selector| SelectorTreeBuilder::new(root_selection_order(phase)).build(selector))
                .transpose()?;
            Ok(PhaseSelectorPlan {
                phase_index,
                phase_type: phase.type_name(),
                move_selector,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;

//! Selector configuration tree.
//!
//! Every node may set a `selection_order` and a `cache_type`. Leaving the
//! order unset is the same as `inherit`.

use serde::{Deserialize, Serialize};

use crate::{SelectionCacheType, SelectionOrder};

/// Move selector configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveSelectorConfig {
    /// Change move selector.
    ChangeMoveSelector(ChangeMoveConfig),

    /// Swap move selector.
    SwapMoveSelector(SwapMoveConfig),

    /// Union of multiple selectors.
    UnionMoveSelector(UnionMoveSelectorConfig),

    /// Cartesian product of selectors.
    CartesianProductMoveSelector(CartesianProductConfig),
}

impl MoveSelectorConfig {
    /// Returns the configuration tag of this selector.
    pub fn type_name(&self) -> &'static str {
        match self {
            MoveSelectorConfig::ChangeMoveSelector(_) => "change_move_selector",
            MoveSelectorConfig::SwapMoveSelector(_) => "swap_move_selector",
            MoveSelectorConfig::UnionMoveSelector(_) => "union_move_selector",
            MoveSelectorConfig::CartesianProductMoveSelector(_) => {
                "cartesian_product_move_selector"
            }
        }
    }

    /// Returns the locally configured selection order, if any.
    pub fn selection_order(&self) -> Option<SelectionOrder> {
        match self {
            MoveSelectorConfig::ChangeMoveSelector(c) => c.selection_order,
            MoveSelectorConfig::SwapMoveSelector(c) => c.selection_order,
            MoveSelectorConfig::UnionMoveSelector(c) => c.selection_order,
            MoveSelectorConfig::CartesianProductMoveSelector(c) => c.selection_order,
        }
    }

    /// Returns the locally configured cache type, if any.
    pub fn cache_type(&self) -> Option<SelectionCacheType> {
        match self {
            MoveSelectorConfig::ChangeMoveSelector(c) => c.cache_type,
            MoveSelectorConfig::SwapMoveSelector(c) => c.cache_type,
            MoveSelectorConfig::UnionMoveSelector(c) => c.cache_type,
            MoveSelectorConfig::CartesianProductMoveSelector(c) => c.cache_type,
        }
    }

    /// Sets the selection order, replacing any configured one.
    pub fn with_selection_order(mut self, order: SelectionOrder) -> Self {
        match &mut self {
            MoveSelectorConfig::ChangeMoveSelector(c) => c.selection_order = Some(order),
            MoveSelectorConfig::SwapMoveSelector(c) => c.selection_order = Some(order),
            MoveSelectorConfig::UnionMoveSelector(c) => c.selection_order = Some(order),
            MoveSelectorConfig::CartesianProductMoveSelector(c) => c.selection_order = Some(order),
        }
        self
    }

    /// Sets the cache type, replacing any configured one.
    pub fn with_cache_type(mut self, cache_type: SelectionCacheType) -> Self {
        match &mut self {
            MoveSelectorConfig::ChangeMoveSelector(c) => c.cache_type = Some(cache_type),
            MoveSelectorConfig::SwapMoveSelector(c) => c.cache_type = Some(cache_type),
            MoveSelectorConfig::UnionMoveSelector(c) => c.cache_type = Some(cache_type),
            MoveSelectorConfig::CartesianProductMoveSelector(c) => c.cache_type = Some(cache_type),
        }
        self
    }
}

/// Change move configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ChangeMoveConfig {
    /// Selection order of the generated moves.
    pub selection_order: Option<SelectionOrder>,

    /// Cache scope of the generated moves.
    pub cache_type: Option<SelectionCacheType>,

    /// Entities whose variable is changed.
    pub entity_selector: Option<EntitySelectorConfig>,

    /// Values assigned to the changed variable.
    pub value_selector: Option<ValueSelectorConfig>,
}

/// Swap move configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SwapMoveConfig {
    /// Selection order of the generated moves.
    pub selection_order: Option<SelectionOrder>,

    /// Cache scope of the generated moves.
    pub cache_type: Option<SelectionCacheType>,

    /// Left-hand entities of each swap.
    pub entity_selector: Option<EntitySelectorConfig>,

    /// Right-hand entities of each swap. Defaults to the left-hand selector.
    pub secondary_entity_selector: Option<EntitySelectorConfig>,
}

/// Union move selector configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UnionMoveSelectorConfig {
    /// Selection order across the child selectors.
    pub selection_order: Option<SelectionOrder>,

    /// Cache scope of the union.
    pub cache_type: Option<SelectionCacheType>,

    /// Child selectors.
    #[serde(default)]
    pub selectors: Vec<MoveSelectorConfig>,
}

/// Cartesian product move selector configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CartesianProductConfig {
    /// Selection order of the combined moves.
    pub selection_order: Option<SelectionOrder>,

    /// Cache scope of the combined moves.
    pub cache_type: Option<SelectionCacheType>,

    /// Child selectors.
    #[serde(default)]
    pub selectors: Vec<MoveSelectorConfig>,
}

/// Entity selector configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EntitySelectorConfig {
    /// Entity class filter.
    pub entity_class: Option<String>,

    /// Selection order of the entities.
    pub selection_order: Option<SelectionOrder>,

    /// Cache scope of the entities.
    pub cache_type: Option<SelectionCacheType>,
}

/// Value selector configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ValueSelectorConfig {
    /// Planning variable the values belong to.
    pub variable_name: Option<String>,

    /// Selection order of the values.
    pub selection_order: Option<SelectionOrder>,

    /// Cache scope of the values.
    pub cache_type: Option<SelectionCacheType>,
}

//! Selection order configuration for selectors.
//!
//! Defines the order in which elements are selected from a selector and how
//! a selector's effective order is derived from its parent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Defines the order in which elements are selected from a selector.
///
/// This enum controls how entities, values, or moves are ordered when
/// iterating through a selector. Only [`SelectionOrder::Inherit`] is
/// unresolved: it may be configured, but never survives [`SelectionOrder::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOrder {
    /// Inherit the selection order from the parent selector.
    ///
    /// If there is no parent, the tree builder supplies `Random`.
    #[default]
    Inherit,

    /// Select elements in their original order.
    ///
    /// Elements are returned in the order they appear in the underlying
    /// collection, each exactly once per pass.
    Original,

    /// Select elements in sorted order.
    ///
    /// Elements are sorted according to a sorter before iteration.
    /// Each element will be selected exactly once (if all elements are consumed).
    /// Requires caching (at least step-level).
    Sorted,

    /// Select elements in random order without shuffling.
    ///
    /// Elements are selected randomly from the pool on each call to next().
    /// The same element may be selected multiple times.
    /// This scales well because it does not require caching.
    Random,

    /// Select elements in random order by shuffling.
    ///
    /// Elements are shuffled when a selection iterator is created.
    /// Each element will be selected exactly once (if all elements are consumed).
    /// Requires caching (at least step-level).
    Shuffled,

    /// Select elements based on probability weights.
    ///
    /// Elements with higher probability have a greater chance of being selected.
    /// The same element may be selected multiple times.
    /// Requires caching (at least step-level).
    Probabilistic,
}

impl SelectionOrder {
    /// Every selection order, in declaration order.
    pub const ALL: [SelectionOrder; 6] = [
        SelectionOrder::Inherit,
        SelectionOrder::Original,
        SelectionOrder::Sorted,
        SelectionOrder::Random,
        SelectionOrder::Shuffled,
        SelectionOrder::Probabilistic,
    ];

    /// Resolves the effective selection order of a selector.
    ///
    /// An absent or `Inherit` configured order takes the inherited order
    /// verbatim. Any other configured order wins over the inherited one.
    ///
    /// # Arguments
    ///
    /// * `configured` - The order set on the selector itself, if any
    /// * `inherited` - The resolved order of the parent, or the root default
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgument`] if `inherited` is absent or
    /// is itself `Inherit`. This is a caller bug, checked before the
    /// configured order is looked at.
    ///
    /// # Examples
    ///
    /// ```
    /// use selectorforge_config::SelectionOrder;
    ///
    /// let root = SelectionOrder::resolve(None, Some(SelectionOrder::Random)).unwrap();
    /// assert_eq!(root, SelectionOrder::Random);
    ///
    /// let child = SelectionOrder::resolve(Some(SelectionOrder::Sorted), Some(root)).unwrap();
    /// assert_eq!(child, SelectionOrder::Sorted);
    ///
    /// let grandchild = SelectionOrder::resolve(Some(SelectionOrder::Inherit), Some(child)).unwrap();
    /// assert_eq!(grandchild, SelectionOrder::Sorted);
    ///
    /// assert!(SelectionOrder::resolve(None, None).is_err());
    /// ```
    pub fn resolve(
        configured: Option<SelectionOrder>,
        inherited: Option<SelectionOrder>,
    ) -> Result<SelectionOrder, ConfigError> {
        let inherited = match inherited {
            Some(order) if order.is_resolved() => order,
            other => {
                return Err(ConfigError::InvalidArgument(format!(
                    "The inherited selection order ({}) cannot be absent or inherit.",
                    other.map_or_else(|| "none".to_string(), |order| order.to_string())
                )))
            }
        };

        match configured {
            None | Some(SelectionOrder::Inherit) => Ok(inherited),
            Some(order) => Ok(order),
        }
    }

    /// Returns `true` unless this is `Inherit`.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SelectionOrder::Inherit)
    }

    /// Returns `true` if this selection order implies random selection.
    ///
    /// This is used to determine whether a selector should use random iteration
    /// or deterministic iteration.
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            SelectionOrder::Random | SelectionOrder::Shuffled | SelectionOrder::Probabilistic
        )
    }

    /// Returns `true` if this selection order requires caching.
    ///
    /// Some selection orders need to collect all elements before iteration
    /// can begin (e.g., Shuffled, Sorted, Probabilistic).
    pub fn requires_caching(&self) -> bool {
        matches!(
            self,
            SelectionOrder::Shuffled | SelectionOrder::Sorted | SelectionOrder::Probabilistic
        )
    }

    /// Converts from a boolean random selection flag.
    ///
    /// # Arguments
    ///
    /// * `random` - `true` for `Random`, `false` for `Original`
    pub fn from_random_selection(random: bool) -> Self {
        if random {
            SelectionOrder::Random
        } else {
            SelectionOrder::Original
        }
    }

    /// Converts to a boolean random selection flag.
    ///
    /// Returns `None` for orders other than `Random` and `Original`.
    pub fn to_random_selection(&self) -> Option<bool> {
        match self {
            SelectionOrder::Random => Some(true),
            SelectionOrder::Original => Some(false),
            _ => None,
        }
    }

    /// Returns the configuration name of this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionOrder::Inherit => "inherit",
            SelectionOrder::Original => "original",
            SelectionOrder::Sorted => "sorted",
            SelectionOrder::Random => "random",
            SelectionOrder::Shuffled => "shuffled",
            SelectionOrder::Probabilistic => "probabilistic",
        }
    }
}

impl fmt::Display for SelectionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved_orders() -> impl Iterator<Item = SelectionOrder> {
        SelectionOrder::ALL.into_iter().filter(SelectionOrder::is_resolved)
    }

    #[test]
    fn test_resolve_absent_takes_inherited() {
        for inherited in resolved_orders() {
            assert_eq!(
                SelectionOrder::resolve(None, Some(inherited)).unwrap(),
                inherited
            );
        }
    }

    #[test]
    fn test_resolve_inherit_takes_inherited() {
        for inherited in resolved_orders() {
            assert_eq!(
                SelectionOrder::resolve(Some(SelectionOrder::Inherit), Some(inherited)).unwrap(),
                inherited
            );
        }
    }

    #[test]
    fn test_resolve_explicit_wins() {
        for configured in resolved_orders() {
            for inherited in resolved_orders() {
                assert_eq!(
                    SelectionOrder::resolve(Some(configured), Some(inherited)).unwrap(),
                    configured
                );
            }
        }
    }

    #[test]
    fn test_resolve_missing_inherited_fails() {
        for configured in SelectionOrder::ALL {
            let err = SelectionOrder::resolve(Some(configured), None).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidArgument(_)));
        }
        let err = SelectionOrder::resolve(None, None).unwrap_err();
        assert!(err.to_string().contains("inherited selection order (none)"));
    }

    #[test]
    fn test_resolve_unresolved_inherited_fails() {
        let err =
            SelectionOrder::resolve(Some(SelectionOrder::Original), Some(SelectionOrder::Inherit))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArgument(_)));
        assert!(err.to_string().contains("(inherit)"));
    }

    #[test]
    fn test_resolve_never_inherit() {
        let configured = SelectionOrder::ALL.into_iter().map(Some).chain([None]);
        for c in configured {
            for inherited in resolved_orders() {
                let order = SelectionOrder::resolve(c, Some(inherited)).unwrap();
                assert_ne!(order, SelectionOrder::Inherit);
            }
        }
    }

    #[test]
    fn test_resolve_idempotent() {
        for order in resolved_orders() {
            assert_eq!(
                SelectionOrder::resolve(Some(order), Some(order)).unwrap(),
                order
            );
        }
    }

    #[test]
    fn test_resolve_chain() {
        let root = SelectionOrder::resolve(None, Some(SelectionOrder::Random)).unwrap();
        let child = SelectionOrder::resolve(Some(SelectionOrder::Sorted), Some(root)).unwrap();
        let grandchild =
            SelectionOrder::resolve(Some(SelectionOrder::Inherit), Some(child)).unwrap();

        assert_eq!(root, SelectionOrder::Random);
        assert_eq!(child, SelectionOrder::Sorted);
        assert_eq!(grandchild, SelectionOrder::Sorted);
    }

    #[test]
    fn test_is_random() {
        assert!(SelectionOrder::Random.is_random());
        assert!(SelectionOrder::Shuffled.is_random());
        assert!(SelectionOrder::Probabilistic.is_random());

        assert!(!SelectionOrder::Original.is_random());
        assert!(!SelectionOrder::Sorted.is_random());
        assert!(!SelectionOrder::Inherit.is_random());
    }

    #[test]
    fn test_requires_caching() {
        assert!(SelectionOrder::Shuffled.requires_caching());
        assert!(SelectionOrder::Sorted.requires_caching());
        assert!(SelectionOrder::Probabilistic.requires_caching());

        assert!(!SelectionOrder::Original.requires_caching());
        assert!(!SelectionOrder::Random.requires_caching());
        assert!(!SelectionOrder::Inherit.requires_caching());
    }

    #[test]
    fn test_random_selection_flag() {
        assert_eq!(
            SelectionOrder::from_random_selection(true),
            SelectionOrder::Random
        );
        assert_eq!(
            SelectionOrder::from_random_selection(false),
            SelectionOrder::Original
        );
        assert_eq!(SelectionOrder::Random.to_random_selection(), Some(true));
        assert_eq!(SelectionOrder::Original.to_random_selection(), Some(false));
        assert_eq!(SelectionOrder::Shuffled.to_random_selection(), None);
    }

    #[test]
    fn test_default() {
        assert_eq!(SelectionOrder::default(), SelectionOrder::Inherit);
    }

    #[test]
    fn test_display_matches_serde_name() {
        assert_eq!(SelectionOrder::Probabilistic.to_string(), "probabilistic");
        assert_eq!(SelectionOrder::Inherit.to_string(), "inherit");
    }
}

//! End-to-end selection order resolution from a configuration document.

use selectorforge_config::{ConfigError, SelectionCacheType, SelectionOrder, SolverConfig};
use selectorforge_solver::{build_phase_plans, IterationStrategy, SelectorKind};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("selectorforge_solver=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_toml_tree_resolves_top_down() {
    init_tracing();

    let config = SolverConfig::from_toml_str(
        r#"
        [[phases]]
        type = "local_search"
        [phases.move_selector]
        type = "union_move_selector"

        [[phases.move_selector.selectors]]
        type = "change_move_selector"
        selection_order = "sorted"
        cache_type = "step"
        [phases.move_selector.selectors.entity_selector]
        selection_order = "inherit"
        cache_type = "phase"

        [[phases.move_selector.selectors]]
        type = "swap_move_selector"
        [phases.move_selector.selectors.entity_selector]
        selection_order = "original"
        "#,
    )
    .unwrap();

    let plans = build_phase_plans(&config).unwrap();
    let tree = plans[0].move_selector.as_ref().unwrap();

    // Root: (none, random) -> random
    assert_eq!(tree.kind(), SelectorKind::UnionMove);
    assert_eq!(tree.selection_order(), SelectionOrder::Random);

    // Child: (sorted, random) -> sorted
    let change = &tree.children()[0];
    assert_eq!(change.selection_order(), SelectionOrder::Sorted);
    assert_eq!(change.cache_type(), SelectionCacheType::Step);

    // Grandchild: (inherit, sorted) -> sorted
    let entity = &change.children()[0];
    assert_eq!(entity.selection_order(), SelectionOrder::Sorted);
    assert_eq!(entity.strategy(), IterationStrategy::Sorted);

    let swap = &tree.children()[1];
    assert_eq!(swap.selection_order(), SelectionOrder::Random);
    assert_eq!(swap.children()[0].selection_order(), SelectionOrder::Original);
    assert_eq!(
        swap.children()[0].path(),
        "union_move_selector/1/swap_move_selector/entity_selector"
    );
}

#[test]
fn test_yaml_tree_with_uncached_shuffle_rejected() {
    init_tracing();

    let config = SolverConfig::from_yaml_str(
        r#"
        phases:
          - type: local_search
            move_selector:
              type: change_move_selector
              value_selector:
                selection_order: shuffled
        "#,
    )
    .unwrap();

    let err = build_phase_plans(&config).unwrap_err();
    let ConfigError::Invalid(message) = err else {
        panic!("expected invalid configuration");
    };
    assert!(message.contains("change_move_selector/value_selector"));
    assert!(message.contains("shuffled"));
}

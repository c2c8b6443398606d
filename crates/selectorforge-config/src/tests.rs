//! Tests for selector configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [[phases]]
        type = "construction_heuristic"

        [[phases]]
        type = "local_search"
        [phases.move_selector]
        type = "union_move_selector"
        selection_order = "random"

        [[phases.move_selector.selectors]]
        type = "change_move_selector"
        selection_order = "sorted"
        cache_type = "phase"
        [phases.move_selector.selectors.entity_selector]
        entity_class = "Lecture"
        selection_order = "inherit"

        [[phases.move_selector.selectors]]
        type = "swap_move_selector"
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.phases.len(), 2);
    assert!(config.phases[0].move_selector().is_none());

    let Some(MoveSelectorConfig::UnionMoveSelector(union)) = config.phases[1].move_selector()
    else {
        panic!("expected union move selector");
    };
    assert_eq!(union.selection_order, Some(SelectionOrder::Random));
    assert_eq!(union.cache_type, None);
    assert_eq!(union.selectors.len(), 2);

    let MoveSelectorConfig::ChangeMoveSelector(change) = &union.selectors[0] else {
        panic!("expected change move selector");
    };
    assert_eq!(change.selection_order, Some(SelectionOrder::Sorted));
    assert_eq!(change.cache_type, Some(SelectionCacheType::Phase));
    let entity = change.entity_selector.as_ref().unwrap();
    assert_eq!(entity.entity_class.as_deref(), Some("Lecture"));
    assert_eq!(entity.selection_order, Some(SelectionOrder::Inherit));

    assert_eq!(union.selectors[1].selection_order(), None);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        phases:
          - type: local_search
            move_selector:
              type: cartesian_product_move_selector
              selection_order: shuffled
              cache_type: step
              selectors:
                - type: change_move_selector
                  value_selector:
                    variable_name: room
                    selection_order: probabilistic
                    cache_type: solver
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    let selector = config.phases[0].move_selector().unwrap();
    assert_eq!(selector.type_name(), "cartesian_product_move_selector");
    assert_eq!(selector.selection_order(), Some(SelectionOrder::Shuffled));
    assert_eq!(selector.cache_type(), Some(SelectionCacheType::Step));
}

#[test]
fn test_unknown_selection_order_rejected() {
    let toml = r#"
        [[phases]]
        type = "local_search"
        [phases.move_selector]
        type = "change_move_selector"
        selection_order = "alphabetical"
    "#;

    let err = SolverConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_load_missing_file() {
    let err = SolverConfig::load("does/not/exist/solver.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let selector = MoveSelectorConfig::SwapMoveSelector(SwapMoveConfig::default())
        .with_selection_order(SelectionOrder::Shuffled)
        .with_cache_type(SelectionCacheType::Step);
    let config = SolverConfig::new()
        .with_phase(PhaseConfig::ConstructionHeuristic(
            ConstructionHeuristicConfig::default(),
        ))
        .with_phase(PhaseConfig::LocalSearch(LocalSearchConfig {
            move_selector: Some(selector),
        }));

    assert_eq!(config.phases.len(), 2);
    assert_eq!(config.phases[1].type_name(), "local_search");
    let selector = config.phases[1].move_selector().unwrap();
    assert_eq!(selector.selection_order(), Some(SelectionOrder::Shuffled));
    assert_eq!(selector.cache_type(), Some(SelectionCacheType::Step));
}

#[test]
fn test_serialize_round_trip_keeps_order() {
    let config = SolverConfig::new().with_phase(PhaseConfig::LocalSearch(LocalSearchConfig {
        move_selector: Some(
            MoveSelectorConfig::ChangeMoveSelector(ChangeMoveConfig::default())
                .with_selection_order(SelectionOrder::Original),
        ),
    }));

    let yaml = serde_yaml::to_string(&config).unwrap();
    assert!(yaml.contains("selection_order: original"));
    let parsed = SolverConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(
        parsed.phases[0].move_selector(),
        config.phases[0].move_selector()
    );
}

//! Unit tests for command handlers

use crate::cli::FilterArgs;
use crate::storage::PlayerFilters;

#[test]
fn test_filter_args_map_onto_player_filters() {
    let args = FilterArgs {
        search: Some("Dhoni".to_string()),
        roles: vec!["Wicketkeeper".to_string()],
        nationalities: vec!["India".to_string(), "Australia".to_string()],
        price_min: Some(50),
        price_max: Some(150),
        rating_min: Some(7),
    };

    let filters: PlayerFilters = args.into();
    assert_eq!(filters.search.as_deref(), Some("Dhoni"));
    assert_eq!(filters.roles, vec!["Wicketkeeper"]);
    assert_eq!(filters.nationalities.len(), 2);
    assert_eq!(filters.price_min, Some(50));
    assert_eq!(filters.price_max, Some(150));
    assert_eq!(filters.rating_min, Some(7));
}

#[test]
fn test_absent_filter_args_are_unrestricted() {
    let args = FilterArgs {
        search: None,
        roles: Vec::new(),
        nationalities: Vec::new(),
        price_min: None,
        price_max: None,
        rating_min: None,
    };

    let filters: PlayerFilters = args.into();
    assert!(filters.is_empty());
}

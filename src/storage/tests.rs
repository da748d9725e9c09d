//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{AuctionStatus, SkillRating};
use crate::error::ScoutError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};

fn create_test_db() -> ScoutDatabase {
    ScoutDatabase::open_in_memory().unwrap()
}

fn player(name: &str, role: &str, base_price: i64, rating: u8) -> NewPlayer {
    NewPlayer {
        name: name.to_string(),
        nationality: None,
        role: role.to_string(),
        age: None,
        matches_played: None,
        strike_rate: None,
        economy_rate: None,
        base_price,
        skill_rating: SkillRating::new(rating).unwrap(),
    }
}

fn all_players(db: &ScoutDatabase) -> Vec<Player> {
    db.fetch_players(&PlayerFilters::default()).unwrap()
}

fn batch_row(value: Value) -> BatchRow {
    value.as_object().unwrap().clone()
}

#[test]
fn test_insert_then_fetch_unfiltered() {
    let mut db = create_test_db();

    let id = db.insert_player(&player("MS Dhoni", "Wicketkeeper", 200, 10)).unwrap();
    assert_eq!(id.as_i64(), 1);

    let players = all_players(&db);
    assert_eq!(players.len(), 1);

    let p = &players[0];
    assert_eq!(p.id, id);
    assert_eq!(p.name, "MS Dhoni");
    assert_eq!(p.auction_status, AuctionStatus::Available);
    assert_eq!(p.final_price, 0);
}

#[test]
fn test_insert_fills_defaults() {
    let mut db = create_test_db();
    db.insert_player(&player("P1", "Bowler", 30, 6)).unwrap();

    let p = &all_players(&db)[0];
    assert_eq!(p.nationality, "Unknown");
    assert_eq!(p.age, 25);
    assert_eq!(p.matches_played, 0);
    assert_eq!(p.strike_rate, 0.0);
    assert_eq!(p.economy_rate, 0.0);
}

#[test]
fn test_insert_rejects_empty_name() {
    let mut db = create_test_db();

    let result = db.insert_player(&player("   ", "Batsman", 50, 5));
    assert!(matches!(
        result,
        Err(ScoutError::Validation { field: "name", .. })
    ));
    assert!(all_players(&db).is_empty());
}

#[test]
fn test_insert_rejects_non_positive_base_price() {
    let mut db = create_test_db();

    let result = db.insert_player(&player("P1", "Batsman", 0, 5));
    assert!(matches!(
        result,
        Err(ScoutError::Validation { field: "base_price", .. })
    ));
    assert!(all_players(&db).is_empty());
}

#[test]
fn test_ids_are_monotonic() {
    let mut db = create_test_db();
    let first = db.insert_player(&player("P1", "Batsman", 20, 3)).unwrap();
    let second = db.insert_player(&player("P2", "Bowler", 30, 4)).unwrap();
    assert!(second > first);
}

#[test]
fn test_search_filter_is_case_insensitive_substring() {
    let mut db = create_test_db();
    db.insert_player(&player("MS Dhoni", "Wicketkeeper", 200, 10)).unwrap();
    db.insert_player(&player("Virat Kohli", "Batsman", 180, 9)).unwrap();

    let filters = PlayerFilters {
        search: Some("dhoni".to_string()),
        ..Default::default()
    };
    let players = db.fetch_players(&filters).unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "MS Dhoni");
}

#[test]
fn test_role_and_nationality_filters_compose_with_and() {
    let mut db = create_test_db();
    let mut bumrah = player("Bumrah", "Bowler", 120, 9);
    bumrah.nationality = Some("India".to_string());
    db.insert_player(&bumrah).unwrap();

    let mut starc = player("Starc", "Bowler", 110, 8);
    starc.nationality = Some("Australia".to_string());
    db.insert_player(&starc).unwrap();

    let mut rohit = player("Rohit", "Batsman", 150, 9);
    rohit.nationality = Some("India".to_string());
    db.insert_player(&rohit).unwrap();

    let filters = PlayerFilters {
        roles: vec!["Bowler".to_string()],
        nationalities: vec!["India".to_string()],
        ..Default::default()
    };
    let players = db.fetch_players(&filters).unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Bumrah");
}

#[test]
fn test_empty_role_filter_imposes_no_restriction() {
    let mut db = create_test_db();
    db.insert_player(&player("P1", "Batsman", 20, 3)).unwrap();
    db.insert_player(&player("P2", "Bowler", 30, 4)).unwrap();

    let filters = PlayerFilters {
        roles: Vec::new(),
        ..Default::default()
    };
    assert_eq!(db.fetch_players(&filters).unwrap().len(), 2);
}

#[test]
fn test_price_bounds_are_inclusive() {
    let mut db = create_test_db();
    for (name, price) in [("A", 20), ("B", 50), ("C", 100), ("D", 150)] {
        db.insert_player(&player(name, "Batsman", price, 5)).unwrap();
    }

    let filters = PlayerFilters {
        price_min: Some(50),
        price_max: Some(100),
        ..Default::default()
    };
    let players = db.fetch_players(&filters).unwrap();

    assert_eq!(players.len(), 2);
    for p in &players {
        assert!(p.base_price >= 50 && p.base_price <= 100);
    }
}

#[test]
fn test_rating_min_filter() {
    let mut db = create_test_db();
    db.insert_player(&player("Low", "Bowler", 20, 4)).unwrap();
    db.insert_player(&player("High", "Bowler", 20, 8)).unwrap();

    let filters = PlayerFilters {
        rating_min: Some(8),
        ..Default::default()
    };
    let players = db.fetch_players(&filters).unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "High");
}

#[test]
fn test_no_match_returns_empty_not_error() {
    let mut db = create_test_db();
    db.insert_player(&player("P1", "Batsman", 20, 3)).unwrap();

    let filters = PlayerFilters {
        search: Some("nobody".to_string()),
        ..Default::default()
    };
    assert!(db.fetch_players(&filters).unwrap().is_empty());
}

#[test]
fn test_filter_values_are_bound_not_spliced() {
    let mut db = create_test_db();
    db.insert_player(&player("P1", "Batsman", 20, 3)).unwrap();

    let filters = PlayerFilters {
        search: Some("'; DROP TABLE players; --".to_string()),
        roles: vec!["Batsman' OR '1'='1".to_string()],
        ..Default::default()
    };
    // Hostile input is just an unmatched literal
    assert!(db.fetch_players(&filters).unwrap().is_empty());
    assert_eq!(all_players(&db).len(), 1);
}

#[test]
fn test_import_batch_fills_defaults() {
    let mut db = create_test_db();

    let rows = vec![
        batch_row(json!({"name": "P1", "role": "Bowler", "base_price": 30, "skill_rating": 9})),
        batch_row(json!({
            "name": "P2", "role": "All-rounder", "base_price": 40, "skill_rating": 7,
            "nationality": "India", "age": 31, "matches_played": 80,
            "strike_rate": 142.5, "economy_rate": 7.8
        })),
    ];

    assert_eq!(db.import_batch(&rows).unwrap(), 2);

    let players = all_players(&db);
    assert_eq!(players.len(), 2);

    assert_eq!(players[0].nationality, "Unknown");
    assert_eq!(players[0].age, 25);
    assert_eq!(players[0].auction_status, AuctionStatus::Available);
    assert_eq!(players[0].final_price, 0);

    assert_eq!(players[1].nationality, "India");
    assert_eq!(players[1].age, 31);
    assert_eq!(players[1].strike_rate, 142.5);
}

#[test]
fn test_import_batch_missing_column_fails_before_writes() {
    let mut db = create_test_db();
    db.insert_player(&player("Existing", "Batsman", 20, 3)).unwrap();

    let rows = vec![
        batch_row(json!({"name": "P1", "role": "Bowler", "base_price": 30, "skill_rating": 9})),
        batch_row(json!({"name": "P2", "role": "Batsman", "skill_rating": 7})),
    ];

    let result = db.import_batch(&rows);
    assert!(matches!(
        result,
        Err(ScoutError::MissingColumn { row: 2, column: "base_price" })
    ));
    assert_eq!(all_players(&db).len(), 1);
}

#[test]
fn test_import_batch_type_error_leaves_store_unchanged() {
    let mut db = create_test_db();

    let rows = vec![
        batch_row(json!({"name": "P1", "role": "Bowler", "base_price": 30, "skill_rating": 9})),
        batch_row(json!({"name": "P2", "role": "Bowler", "base_price": 35, "skill_rating": 8})),
        batch_row(json!({"name": "P3", "role": "Batsman", "base_price": "forty", "skill_rating": 7})),
        batch_row(json!({"name": "P4", "role": "Batsman", "base_price": 45, "skill_rating": 6})),
        batch_row(json!({"name": "P5", "role": "Batsman", "base_price": 50, "skill_rating": 5})),
    ];

    let result = db.import_batch(&rows);
    match result {
        Err(ScoutError::TypeConversion { row, column, .. }) => {
            assert_eq!(row, 3);
            assert_eq!(column, "base_price");
        }
        other => panic!("expected TypeConversion error, got {:?}", other),
    }
    assert!(all_players(&db).is_empty());
}

#[test]
fn test_import_batch_rejects_out_of_range_rating() {
    let mut db = create_test_db();

    let rows = vec![batch_row(
        json!({"name": "P1", "role": "Bowler", "base_price": 30, "skill_rating": 12}),
    )];

    assert!(matches!(
        db.import_batch(&rows),
        Err(ScoutError::InvalidRating { .. })
    ));
    assert!(all_players(&db).is_empty());
}

#[test]
fn test_simulate_decides_every_available_player() {
    let mut db = create_test_db();
    for i in 0..30 {
        let rating = 1 + (i % 10) as u8;
        db.insert_player(&player(&format!("P{}", i), "Batsman", 20 + i * 5, rating))
            .unwrap();
    }

    let mut rng = StdRng::seed_from_u64(42);
    let updated = db.simulate_auction(&mut rng).unwrap();
    assert_eq!(updated, 30);

    for p in all_players(&db) {
        match p.auction_status {
            AuctionStatus::Sold => assert!(
                p.final_price >= p.base_price,
                "{} sold below base: {} < {}",
                p.name,
                p.final_price,
                p.base_price
            ),
            AuctionStatus::Unsold => assert_eq!(p.final_price, 0),
            AuctionStatus::Available => panic!("{} left undecided", p.name),
        }
        if p.auction_status == AuctionStatus::Sold {
            assert_eq!(p.final_price % 5, 0, "{} not rounded to 5s", p.final_price);
        }
    }
}

#[test]
fn test_simulate_skips_already_decided_players() {
    let mut db = create_test_db();
    for i in 0..10 {
        db.insert_player(&player(&format!("P{}", i), "Bowler", 40, 5)).unwrap();
    }

    let mut rng = StdRng::seed_from_u64(7);
    db.simulate_auction(&mut rng).unwrap();
    let decided = all_players(&db);

    // Second pass finds nothing eligible and changes nothing
    let updated = db.simulate_auction(&mut rng).unwrap();
    assert_eq!(updated, 0);

    let after = all_players(&db);
    for (before, now) in decided.iter().zip(after.iter()) {
        assert_eq!(before.auction_status, now.auction_status);
        assert_eq!(before.final_price, now.final_price);
    }
}

#[test]
fn test_simulate_on_empty_store() {
    let mut db = create_test_db();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(db.simulate_auction(&mut rng).unwrap(), 0);
}

#[test]
fn test_reset_is_idempotent() {
    let mut db = create_test_db();
    for i in 0..10 {
        db.insert_player(&player(&format!("P{}", i), "Batsman", 50, 8)).unwrap();
    }

    let mut rng = StdRng::seed_from_u64(99);
    db.simulate_auction(&mut rng).unwrap();

    db.reset_auction().unwrap();
    let once = all_players(&db);
    db.reset_auction().unwrap();
    let twice = all_players(&db);

    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.auction_status, AuctionStatus::Available);
        assert_eq!(a.final_price, 0);
        assert_eq!(b.auction_status, AuctionStatus::Available);
        assert_eq!(b.final_price, 0);
    }
}

#[test]
fn test_stats_on_empty_store() {
    let db = create_test_db();
    let stats = db.get_stats().unwrap();

    assert_eq!(stats.total_players, 0);
    assert_eq!(stats.avg_base_price, 0.0);
    assert_eq!(stats.max_skill_rating, 0);
    assert!(stats.role_distribution.is_empty());
}

#[test]
fn test_stats_aggregates() {
    let mut db = create_test_db();
    db.insert_player(&player("P1", "Batsman", 100, 9)).unwrap();
    db.insert_player(&player("P2", "Batsman", 50, 6)).unwrap();
    db.insert_player(&player("P3", "Bowler", 30, 7)).unwrap();

    let stats = db.get_stats().unwrap();
    assert_eq!(stats.total_players, 3);
    assert!((stats.avg_base_price - 60.0).abs() < f64::EPSILON);
    assert_eq!(stats.max_skill_rating, 9);
    assert_eq!(
        stats.role_distribution,
        vec![
            RoleCount { role: "Batsman".to_string(), count: 2 },
            RoleCount { role: "Bowler".to_string(), count: 1 },
        ]
    );
}

#[test]
fn test_free_text_role_is_accepted() {
    let mut db = create_test_db();
    db.insert_player(&player("P1", "Mystery spinner", 60, 8)).unwrap();

    let players = all_players(&db);
    assert_eq!(players[0].role, "Mystery spinner");
}

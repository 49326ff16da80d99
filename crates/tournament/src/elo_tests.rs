use super::*;

#[test]
fn test_equal_ratings_expect_half() {
    let tracker = EloTracker::new();
    let expected = tracker.expected_score("random", "minimax");
    assert!((expected - 0.5).abs() < 0.001);
}

#[test]
fn test_elo_update() {
    let mut tracker = EloTracker::new();

    let result = MatchResult {
        wins: 10,
        losses: 0,
        draws: 0,
    };
    tracker.update_ratings("minimax", "random", &result);

    assert!(tracker.rating("minimax") > DEFAULT_ELO);
    assert!(tracker.rating("random") < DEFAULT_ELO);
    // Zero-sum between the two engines
    let total = tracker.rating("minimax") + tracker.rating("random");
    assert!((total - 2.0 * DEFAULT_ELO).abs() < 1e-9);
    assert_eq!(tracker.games_played["random"], 10);
}

#[test]
fn test_self_play_keeps_rating() {
    let mut tracker = EloTracker::new();
    let result = MatchResult {
        wins: 3,
        losses: 1,
        draws: 0,
    };
    tracker.update_ratings("tactical", "tactical", &result);

    assert_eq!(tracker.rating("tactical"), DEFAULT_ELO);
    assert_eq!(tracker.games_played["tactical"], 4);
    assert_eq!(tracker.history.len(), 1);
}

#[test]
fn test_leaderboard_sorted_best_first() {
    let mut tracker = EloTracker::new();
    let sweep = MatchResult {
        wins: 4,
        losses: 0,
        draws: 0,
    };
    tracker.update_ratings("tactical", "random", &sweep);
    tracker.update_ratings("minimax", "tactical", &sweep);

    let names: Vec<String> = tracker.leaderboard().into_iter().map(|e| e.0).collect();
    assert_eq!(names[0], "minimax");
    assert_eq!(names[2], "random");
    assert!(tracker.leaderboard_table().contains("minimax"));
}

#[test]
fn test_save_and_load() {
    let mut tracker = EloTracker::new();
    let result = MatchResult {
        wins: 1,
        losses: 1,
        draws: 1,
    };
    tracker.update_ratings("random", "minimax", &result);

    let path = std::env::temp_dir().join(format!("pente-elo-{}.json", std::process::id()));
    tracker.save(&path).unwrap();
    let loaded = EloTracker::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.ratings, tracker.ratings);
    assert_eq!(loaded.history[0].result, result);
}

#[test]
fn test_missing_file_is_read_error() {
    let path = std::env::temp_dir().join("pente-elo-missing-file.json");
    assert!(matches!(
        EloTracker::load(&path),
        Err(ResultsError::Read { .. })
    ));
}

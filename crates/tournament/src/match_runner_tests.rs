use super::*;
use pente_ai::Difficulty;
use random_engine::RandomEngine;

fn small_arena(num_games: u32, max_moves: u32) -> ArenaConfig {
    ArenaConfig {
        board_size: 9,
        num_games,
        max_moves,
        seed: Some(42),
        ..ArenaConfig::default()
    }
}

#[test]
fn test_random_self_play() {
    let mut engine1 = RandomEngine::with_seed(1);
    let mut engine2 = RandomEngine::with_seed(2);

    let runner = MatchRunner::new(small_arena(4, 81));
    let outcome = runner.run_match(&mut engine1, &mut engine2).unwrap();

    assert_eq!(outcome.result.total_games(), 4);
    assert_eq!(outcome.games.len(), 4);
    for game in &outcome.games {
        assert!(game.status.is_over());
        assert_eq!(game.notation.len(), game.record.moves.len());
        // The stored record replays to the same result
        let replayed = game.replay().unwrap();
        if replayed.winner().is_over() {
            assert_eq!(replayed.winner(), game.status);
        }
    }
}

#[test]
fn test_move_cap_is_a_draw() {
    let mut engine1 = RandomEngine::with_seed(1);
    let mut engine2 = RandomEngine::with_seed(2);

    let runner = MatchRunner::new(ArenaConfig {
        board_size: 19,
        ..small_arena(2, 3)
    });
    let outcome = runner.run_match(&mut engine1, &mut engine2).unwrap();

    assert_eq!(outcome.result.draws, 2);
    for game in &outcome.games {
        assert_eq!(game.status, GameStatus::Draw);
        assert_eq!(game.record.moves.len(), 3);
    }
}

#[test]
fn test_colours_alternate() {
    let mut config = small_arena(4, 12);
    config.ai.seed = Some(3);
    let mut engine1 = Difficulty::Tactical.engine(&config.ai);
    let mut engine2 = Difficulty::Random.engine(&config.ai);

    let runner = MatchRunner::new(config);
    let outcome = runner
        .run_match(engine1.as_mut(), engine2.as_mut())
        .unwrap();

    let firsts: Vec<&str> = outcome.games.iter().map(|g| g.first.as_str()).collect();
    assert_eq!(firsts, ["Tactical v1.0", "Random v1.0", "Tactical v1.0", "Random v1.0"]);
}

#[test]
fn test_seeded_openings_are_reproducible() {
    let config = ArenaConfig {
        board_size: 19,
        opening_moves: 4,
        ..small_arena(2, 5)
    };

    let play = || {
        let mut engine1 = RandomEngine::with_seed(5);
        let mut engine2 = RandomEngine::with_seed(6);
        MatchRunner::new(config.clone())
            .run_match(&mut engine1, &mut engine2)
            .unwrap()
    };
    let a = play();
    let b = play();

    assert_eq!(a.games, b.games);
    assert_eq!(a.games[0].record.moves.len(), 5);
    assert_ne!(a.games[0].record.moves[..4], a.games[1].record.moves[..4]);
}

#[test]
fn test_invalid_board_size_is_an_error() {
    let mut engine1 = RandomEngine::with_seed(1);
    let mut engine2 = RandomEngine::with_seed(2);
    let runner = MatchRunner::new(ArenaConfig {
        board_size: 40,
        ..small_arena(1, 10)
    });
    assert_eq!(
        runner.run_match(&mut engine1, &mut engine2).unwrap_err(),
        PenteError::InvalidBoardSize(40)
    );
}

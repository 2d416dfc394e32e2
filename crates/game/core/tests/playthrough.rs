//! Scenario-level tests driving full games through the public API.

use minefield_core::{
    ConfigError, Direction, GameConfig, GamePhase, GameState, MoveOutcome, Position,
};

#[test]
fn clear_board_playthrough_wins_in_size_minus_one_moves() {
    let config = GameConfig::new().with_hazard_count(0);
    let mut game = GameState::new(&config).unwrap();

    let mut outcome = MoveOutcome::Continue;
    for _ in 0..config.size - 1 {
        assert!(!game.is_over());
        outcome = game.attempt_move(Direction::Right);
    }

    assert_eq!(outcome, MoveOutcome::Won);
    assert_eq!(game.moves(), config.size - 1);
    assert_eq!(game.lives(), config.starting_lives);
    assert_eq!(game.player(), Position::new(4, 7));
}

#[test]
fn marching_straight_right_always_ends_the_game() {
    // Seven accepted Right moves either reach the goal column or spend
    // every life on the way; the counters must stay coherent in both
    // endings.
    let config = GameConfig::new().with_seed(0xdecade);
    let mut game = GameState::new(&config).unwrap();

    let mut last = MoveOutcome::Continue;
    for _ in 0..config.size - 1 {
        last = game.attempt_move(Direction::Right);
    }

    assert!(last.is_terminal());
    assert!(game.is_over());
    assert!(game.moves() > 0 && game.moves() <= config.size - 1);
    if game.phase() == GamePhase::Won {
        assert!(game.lives() > 0);
        assert_eq!(game.player().col, config.size as i32 - 1);
    } else {
        assert_eq!(game.lives(), 0);
    }
}

#[test]
fn three_hazard_hits_end_a_default_game() {
    let config = GameConfig::new();
    let start_row = config.size as i32 / 2;
    // Hazards on the three cells straight ahead of the start.
    let hazards = [
        Position::new(start_row, 1),
        Position::new(start_row, 2),
        Position::new(start_row, 3),
    ];
    let mut game = GameState::with_hazards(&config, &hazards).unwrap();

    assert_eq!(
        game.attempt_move(Direction::Right),
        MoveOutcome::HitHazard { lives_remaining: 2 }
    );
    assert_eq!(
        game.attempt_move(Direction::Right),
        MoveOutcome::HitHazard { lives_remaining: 1 }
    );
    assert_eq!(game.attempt_move(Direction::Right), MoveOutcome::Lost);

    assert_eq!(game.lives(), 0);
    assert_eq!(game.moves(), 3);
    assert_eq!(game.player(), Position::new(start_row, 3));
    assert!(game.is_over());
}

#[test]
fn same_seed_produces_the_same_board() {
    let config = GameConfig::new().with_seed(123456789);
    let a = GameState::new(&config).unwrap();
    let b = GameState::new(&config).unwrap();
    assert_eq!(a.board(), b.board());

    let other = GameState::new(&config.with_seed(987654321)).unwrap();
    assert_ne!(a.board(), other.board());
}

#[test]
fn overfull_hazard_count_fails_construction() {
    let config = GameConfig::new().with_hazard_count(56);
    match GameState::new(&config) {
        Err(ConfigError::TooManyHazards {
            hazard_count: 56,
            capacity: 56,
        }) => {}
        other => panic!("expected TooManyHazards, got {other:?}"),
    }

    // One below capacity is legal and must terminate placement.
    let almost_full = GameConfig::new().with_hazard_count(55);
    let game = GameState::new(&almost_full).unwrap();
    assert_eq!(
        game.board()
            .rows()
            .flatten()
            .filter(|c| c.is_hazard())
            .count(),
        55
    );
}

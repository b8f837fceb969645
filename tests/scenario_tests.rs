//! End-to-end scenarios through the public engine API.
//!
//! Each test sets up a board by hand, applies clicks and ticks, and checks
//! the resulting statuses and outcome.

use star_match::combinatorics::{subset_with_sum, sum};
use star_match::{
    Action, GameConfig, GameState, NumberStatus, Outcome, StarMatch, Transition,
};

fn classic() -> StarMatch {
    StarMatch::new(GameConfig::default())
}

/// Click through a full game, always matching the current target.
fn play_perfect_game(game: &StarMatch, seed: u64) -> GameState {
    let mut state = game.new_game(seed);

    while game.outcome(&state).is_active() {
        let pick = subset_with_sum(&state.pool_numbers(), state.target())
            .expect("target must be attainable from the pool");
        assert!(!pick.is_empty());

        for number in pick {
            game.toggle(&mut state, number);
        }
    }

    state
}

/// Matching 4 + 5 against nine stars retires both numbers.
#[test]
fn test_nine_stars_four_plus_five() {
    let game = classic();
    let mut state = GameState::from_parts(9, 1..=9, [4], 10, 42);

    let transition = game.toggle(&mut state, 5);

    assert!(matches!(transition, Transition::Matched { .. }));
    assert_eq!(state.pool_numbers(), vec![1, 2, 3, 6, 7, 8, 9]);
    assert!(state.candidates().is_empty());
    assert!(state.target() >= 1 && state.target() <= 9);
    assert!(subset_with_sum(&state.pool_numbers(), state.target()).is_some());
    assert_eq!(game.classify(&state, 4), NumberStatus::Used);
    assert_eq!(game.classify(&state, 5), NumberStatus::Used);
}

/// An overshooting selection is shown as wrong but can keep growing.
#[test]
fn test_overshoot_stays_active() {
    let game = classic();
    let mut state = GameState::from_parts(1, [1, 2, 3], [2], 10, 42);

    assert_eq!(game.classify(&state, 2), NumberStatus::Wrong);
    assert_eq!(game.classify(&state, 1), NumberStatus::Available);

    game.toggle(&mut state, 3);

    assert_eq!(state.candidates(), &[2, 3]);
    assert_eq!(state.candidate_sum(), 5);
    assert_eq!(game.classify(&state, 3), NumberStatus::Wrong);
    assert_eq!(game.outcome(&state), Outcome::Active);

    // Backing out restores a valid selection
    game.toggle(&mut state, 3);
    game.toggle(&mut state, 2);
    assert!(state.candidates().is_empty());

    game.toggle(&mut state, 1);
    assert_eq!(state.pool_numbers(), vec![2, 3]);
}

/// Matching the last number wins without drawing a new target.
#[test]
fn test_last_number_wins() {
    let game = classic();
    let mut state = GameState::new(5, [5], 10, 42);
    let rng_before = state.rng_state();

    let transition = game.toggle(&mut state, 5);

    match transition {
        Transition::Matched { next_target, .. } => assert_eq!(next_target, None),
        other => panic!("Expected a match, got {:?}", other),
    }
    assert!(state.pool().is_empty());
    assert_eq!(game.outcome(&state), Outcome::Won);
    // No draw happened
    assert_eq!(state.rng_state(), rng_before);
}

/// The last tick with numbers left loses the game.
#[test]
fn test_last_tick_loses() {
    let game = classic();
    let mut state = GameState::new(2, [1, 2], 1, 42);

    game.tick(&mut state);

    assert_eq!(state.time_left(), 0);
    assert_eq!(game.outcome(&state), Outcome::Lost);
    assert_eq!(game.frame(&state).target, None);
}

/// Clearing the board on the final second still counts as a win.
#[test]
fn test_win_checked_before_loss() {
    let game = classic();
    let mut state = GameState::new(3, [3], 1, 42);

    game.tick(&mut state);
    assert_eq!(game.outcome(&state), Outcome::Lost);

    let mut racing = GameState::new(3, [3], 1, 42);
    game.toggle(&mut racing, 3);
    game.tick(&mut racing);
    assert_eq!(game.outcome(&racing), Outcome::Won);
    assert_eq!(racing.time_left(), 1);

    let drained = GameState::new(1, Vec::<u32>::new(), 0, 42);
    assert_eq!(game.outcome(&drained), Outcome::Won);
}

#[test]
fn test_perfect_games_always_win() {
    let game = classic();

    for seed in 0..50 {
        let state = play_perfect_game(&game, seed);

        assert_eq!(game.outcome(&state), Outcome::Won, "seed {}", seed);
        assert_eq!(state.time_left(), 10);
        assert!(game
            .board(&state)
            .iter()
            .all(|&(_, status)| status == NumberStatus::Used));
    }
}

#[test]
fn test_idle_game_loses_after_time_budget() {
    let game = classic();
    let mut state = game.new_game(7);

    for expected in (0..10).rev() {
        assert_eq!(game.outcome(&state), Outcome::Active);
        game.tick(&mut state);
        assert_eq!(state.time_left(), expected);
    }

    assert_eq!(game.outcome(&state), Outcome::Lost);
    for _ in 0..5 {
        assert!(game.tick(&mut state).is_ignored());
    }
    assert_eq!(state.time_left(), 0);
}

#[test]
fn test_targets_never_exceed_ceiling() {
    let game = classic();

    for seed in 0..50 {
        let mut state = game.new_game(seed);
        assert!(state.target() <= 9);

        while game.outcome(&state).is_active() {
            let pick = subset_with_sum(&state.pool_numbers(), state.target()).unwrap();
            assert_eq!(sum(&pick), state.target());
            for number in pick {
                game.toggle(&mut state, number);
            }
            if game.outcome(&state).is_active() {
                assert!(state.target() <= 9, "seed {}", seed);
            }
        }
    }
}

#[test]
fn test_custom_ceiling() {
    let game = StarMatch::new(GameConfig::new().with_target_ceiling(20).with_time_budget(30));

    for seed in 0..20 {
        let mut state = GameState::new(1, 1..=9, 30, seed);
        game.toggle(&mut state, 1);
        assert_eq!(game.outcome(&state), Outcome::Active);
        assert!(state.target() <= 20);
    }
}

#[test]
fn test_perfect_games_win_on_other_boards() {
    for (max_number, ceiling) in [(6, 6), (4, 9), (12, 12), (15, 30)] {
        let game = StarMatch::new(
            GameConfig::new()
                .with_max_number(max_number)
                .with_target_ceiling(ceiling),
        );

        for seed in 0..30 {
            let state = play_perfect_game(&game, seed);

            assert_eq!(
                game.outcome(&state),
                Outcome::Won,
                "board {} ceiling {} seed {}",
                max_number,
                ceiling,
                seed
            );
            assert_eq!(game.board(&state).len(), max_number as usize);
        }
    }
}

#[test]
#[should_panic(expected = "Target ceiling 9 is below the largest number 12")]
fn test_board_larger_than_ceiling_is_rejected() {
    let _ = StarMatch::new(GameConfig::new().with_max_number(12));
}

#[test]
fn test_replay_reproduces_game() {
    let game = classic();
    let played = play_perfect_game(&game, 1234);

    let actions: Vec<Action> = played.history().iter().map(|r| r.action).collect();
    let replayed = game.replay(1234, &actions);

    assert_eq!(replayed.pool(), played.pool());
    assert_eq!(replayed.history(), played.history());
    assert_eq!(game.outcome(&replayed), Outcome::Won);
}

#[test]
fn test_frame_serializes_for_clients() {
    let game = classic();
    let state = GameState::from_parts(4, [1, 2, 3], [3, 2], 8, 0);

    let json = serde_json::to_value(game.frame(&state)).unwrap();

    assert_eq!(json["target"], 4);
    assert_eq!(json["time_left"], 8);
    assert_eq!(json["outcome"], "active");
    assert_eq!(json["numbers"][0], serde_json::json!([1, "available"]));
    assert_eq!(json["numbers"][1], serde_json::json!([2, "wrong"]));
    assert_eq!(json["numbers"][3], serde_json::json!([4, "used"]));
}

//! Engine properties exercised through the public API only.

use tui_snake::core::{GameEngine, TickOutcome};
use tui_snake::types::{
    Difficulty, Direction, GameOverReason, GameStatus, GridSize, Position, SCORE_PER_FOOD,
};

fn manhattan(a: Position, b: Position) -> i32 {
    (a.x as i32 - b.x as i32).abs() + (a.y as i32 - b.y as i32).abs()
}

/// Greedy steering toward the food that avoids walls and the body when it can.
fn steer(engine: &mut GameEngine) {
    let Some(head) = engine.snake().head() else {
        return;
    };
    let current = engine.direction();
    let food = engine.food();
    let safe = |d: Direction| {
        let next = head.step(d);
        engine.grid().contains(next) && !engine.snake().hits_body(next)
    };
    let best = Direction::ALL
        .iter()
        .copied()
        .filter(|&d| !current.is_opposite(d))
        .filter(|&d| safe(d))
        .min_by_key(|&d| manhattan(head.step(d), food));
    if let Some(dir) = best {
        engine.submit_direction(dir);
    }
}

#[test]
fn test_session_invariants_hold_under_play() {
    let grid = GridSize::new(12, 12).unwrap();

    for seed in 1..40 {
        let mut engine = GameEngine::new(grid, seed);
        engine.start(Difficulty::Normal);

        for _ in 0..600 {
            steer(&mut engine);
            let before = engine.snake().to_vec();
            let score = engine.score();

            match engine.tick() {
                TickOutcome::Moved => {
                    assert_eq!(engine.snake().len(), before.len());
                    assert_eq!(engine.score(), score);
                }
                TickOutcome::Ate => {
                    assert_eq!(engine.snake().len(), before.len() + 1);
                    assert_eq!(engine.score(), score + SCORE_PER_FOOD);

                    let food = engine.food();
                    let head = engine.snake().head().unwrap();
                    assert!(!engine.snake().contains(food));
                    assert_ne!(food, head.step(engine.direction()));
                    assert!(grid.is_interior(food));
                }
                TickOutcome::GameOver(GameOverReason::BoardFull) => break,
                TickOutcome::GameOver(_) => {
                    assert_eq!(engine.snake().to_vec(), before);
                    assert_eq!(engine.status(), GameStatus::GameOver);
                    break;
                }
                TickOutcome::Idle => panic!("idle tick while playing"),
            }

            assert!(engine.snake().iter().all(|p| grid.contains(p)));
        }
    }
}

#[test]
fn test_running_straight_up_hits_the_wall() {
    let mut engine = GameEngine::new(GridSize::new(10, 10).unwrap(), 7);
    engine.start(Difficulty::Easy);

    let outcome = loop {
        let outcome = engine.tick();
        if let TickOutcome::GameOver(_) = outcome {
            break outcome;
        }
    };

    assert_eq!(outcome, TickOutcome::GameOver(GameOverReason::Wall));
    assert_eq!(engine.snake().head(), Some(Position::new(5, 0)));
    assert_eq!(engine.game_over_reason(), Some(GameOverReason::Wall));
    assert_eq!(
        engine.game_over_message(),
        format!("Game Over! Score: {}", engine.score())
    );
    assert_eq!(engine.tick(), TickOutcome::Idle);
}

#[test]
fn test_reversal_is_ignored() {
    let mut engine = GameEngine::new(GridSize::default(), 1);
    engine.start(Difficulty::Normal);

    assert!(!engine.submit_direction(Direction::Down));
    assert_eq!(engine.pending_direction(), Direction::Up);

    // Last write wins, but only a reversal of the applied direction is refused.
    assert!(engine.submit_direction(Direction::Left));
    assert!(engine.submit_direction(Direction::Right));
    assert_eq!(engine.pending_direction(), Direction::Right);
}

#[test]
fn test_pause_freezes_the_board() {
    let mut engine = GameEngine::new(GridSize::default(), 3);
    engine.start(Difficulty::Hard);
    engine.tick();

    assert!(engine.toggle_pause());
    assert!(engine.paused());
    let frozen = engine.snapshot();

    assert_eq!(engine.tick(), TickOutcome::Idle);
    assert!(!engine.submit_direction(Direction::Left));
    assert_eq!(engine.snapshot(), frozen);

    assert!(engine.toggle_pause());
    assert!(!engine.paused());
    assert_eq!(engine.status(), GameStatus::Playing);
}

#[test]
fn test_start_resets_from_any_status() {
    let mut engine = GameEngine::new(GridSize::new(8, 8).unwrap(), 11);

    engine.start(Difficulty::Easy);
    while engine.status() == GameStatus::Playing {
        engine.tick();
    }
    let first_episode = engine.episode_id();

    engine.start(Difficulty::Hard);
    assert_eq!(engine.status(), GameStatus::Playing);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.snake().len(), 3);
    assert_eq!(engine.difficulty(), Difficulty::Hard);
    assert_eq!(engine.game_over_reason(), None);
    assert!(engine.game_over_message().is_empty());
    assert_eq!(engine.episode_id(), first_episode + 1);

    engine.toggle_pause();
    engine.start(Difficulty::Normal);
    assert_eq!(engine.status(), GameStatus::Playing);
}

#[test]
fn test_menu_keeps_last_score_and_allows_resize() {
    let mut engine = GameEngine::new(GridSize::default(), 5);
    engine.start(Difficulty::Normal);

    let small = GridSize::new(6, 6).unwrap();
    assert!(!engine.resize(small));
    assert!(!engine.to_menu());

    engine.toggle_pause();
    assert!(engine.to_menu());
    assert_eq!(engine.status(), GameStatus::Menu);
    assert_eq!(engine.tick(), TickOutcome::Idle);

    assert!(engine.resize(small));
    engine.start(Difficulty::Normal);
    assert_eq!(engine.grid(), small);
    assert_eq!(engine.snake().head(), Some(Position::new(3, 3)));
}

//! Integration tests for the engine driven the way the binary drives it

use bucket_tetris::core::{GameSnapshot, GameState, PieceGenerator, SimpleRng};
use bucket_tetris::types::{
    GameAction, MoveDirection, BASE_GRAVITY_NS, SOFT_DROP_GRAVITY_NS, TICK_NS,
};

/// Number of fixed ticks after the spawn tick until the piece's first descent.
fn ticks_until_descent(state: &mut GameState) -> u32 {
    let y = state.active().unwrap().y;
    let mut ticks = 0;
    while state.active().unwrap().y == y {
        state.tick(TICK_NS);
        ticks += 1;
        assert!(ticks < 1_000, "piece never fell");
    }
    ticks
}

fn assert_active_on_board(state: &GameState) {
    if let Some(active) = state.active() {
        for (x, y) in active.minos() {
            assert!(state.board().is_occupied(x, y), "active mino ({x}, {y}) not on grid");
        }
    }
}

/// Drive a game with a reproducible action script.
fn play(seed: u32, ticks: usize) -> Vec<GameSnapshot> {
    let mut state = GameState::new(seed);
    let mut script = SimpleRng::new(seed ^ 0x5eed);
    let mut snapshots = Vec::with_capacity(ticks);

    for _ in 0..ticks {
        match script.next_range(8) {
            0 => state.apply_action(GameAction::MoveLeft),
            1 => state.apply_action(GameAction::MoveRight),
            2 => state.apply_action(GameAction::Rotate),
            3 => state.apply_action(GameAction::SoftDropStart),
            4 => state.apply_action(GameAction::SoftDropStop),
            _ => false,
        };
        state.tick(TICK_NS);
        snapshots.push(state.snapshot());
    }
    snapshots
}

#[test]
fn test_spawn_then_gravity_cadence() {
    let mut state = GameState::new(12345);
    assert!(state.tick(TICK_NS));

    // 63 slices of 16ms reach 1008ms; the spawn tick already counted one.
    assert_eq!(ticks_until_descent(&mut state), 62);
    // Overshoot is discarded when the timer resets.
    assert_eq!(ticks_until_descent(&mut state), 63);
    assert_eq!(ticks_until_descent(&mut state), 63);
    assert_eq!(state.gravity_interval_ns(), BASE_GRAVITY_NS);
}

#[test]
fn test_soft_drop_cadence() {
    let mut state = GameState::new(12345);
    state.tick(0);
    state.apply_action(GameAction::SoftDropStart);
    assert_eq!(state.gravity_interval_ns(), SOFT_DROP_GRAVITY_NS);

    // 7 * 16ms = 112ms is the first multiple past 100ms.
    assert_eq!(ticks_until_descent(&mut state), 7);
    assert_eq!(ticks_until_descent(&mut state), 7);

    state.apply_action(GameAction::SoftDropStop);
    assert_eq!(ticks_until_descent(&mut state), 63);
}

#[test]
fn test_intents_apply_once() {
    let mut state = GameState::new(99);
    state.tick(0);
    let x = state.active().unwrap().x;

    state.set_move(MoveDirection::Right);
    state.set_move(MoveDirection::Right);
    assert!(state.tick(0));
    assert_eq!(state.active().unwrap().x, x + 1);

    assert!(!state.tick(0));
    assert_eq!(state.active().unwrap().x, x + 1);

    // A later intent replaces an earlier one within the same tick.
    state.set_move(MoveDirection::Left);
    state.set_move(MoveDirection::None);
    assert!(!state.tick(0));
    assert_eq!(state.active().unwrap().x, x + 1);
}

#[test]
fn test_piece_slides_to_wall_and_stops() {
    let mut state = GameState::new(7);
    state.tick(0);

    let mut moves = 0;
    loop {
        state.set_move(MoveDirection::Left);
        if !state.tick(0) {
            break;
        }
        moves += 1;
    }

    let min_x = state.active().unwrap().minos().iter().map(|&(x, _)| x).min();
    assert_eq!(min_x, Some(0));
    assert!(moves >= 3);
    assert_eq!(state.board().occupied_count(), 4);
}

#[test]
fn test_invariants_hold_under_random_play() {
    for seed in [1, 42, 2024, 0xdead_beef] {
        let mut state = GameState::new(seed);
        let mut script = SimpleRng::new(seed);
        let mut prev = state.snapshot();

        for _ in 0..20_000 {
            match script.next_range(6) {
                0 => state.set_move(MoveDirection::Left),
                1 => state.set_move(MoveDirection::Right),
                2 => state.request_rotate(),
                3 => state.set_soft_drop(script.next_range(2) == 0),
                _ => {}
            }
            state.tick(TICK_NS);
            let snap = state.snapshot();

            assert!(snap.score >= prev.score);
            assert!(snap.lines >= prev.lines);
            assert!(snap.level >= prev.level);
            assert!(snap.level <= 1 + snap.lines / 10);
            assert_active_on_board(&state);

            if state.active().is_none() && !snap.game_over {
                // Just locked: every full row was collapsed.
                assert!((0..20).all(|y| !state.board().is_row_full(y)));
            }

            prev = snap;
            if snap.game_over {
                break;
            }
        }
    }
}

#[test]
fn test_idle_game_tops_out_and_freezes() {
    let mut state = GameState::new(3);
    state.apply_action(GameAction::SoftDropStart);

    let mut ticks = 0;
    while !state.game_over() {
        state.tick(TICK_NS);
        ticks += 1;
        assert!(ticks < 100_000, "stack never reached the spawn point");
    }

    let frozen = state.snapshot();
    assert!(frozen.game_over);

    for action in [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::SoftDropStop,
    ] {
        state.apply_action(action);
        assert!(!state.tick(BASE_GRAVITY_NS));
    }
    assert_eq!(state.snapshot(), frozen);

    assert!(state.apply_action(GameAction::Reset));
    let fresh = state.snapshot();
    assert!(!fresh.game_over);
    assert_eq!(fresh.score, 0);
    assert_eq!(fresh.lines, 0);
    assert_eq!(fresh.level, 1);
    assert_eq!(fresh.occupied_count(), 0);
    assert!(state.tick(TICK_NS));
}

#[test]
fn test_same_seed_same_game() {
    assert_eq!(play(777, 3_000), play(777, 3_000));
    assert_ne!(play(777, 3_000), play(778, 3_000));
}

#[test]
fn test_reset_continues_piece_stream() {
    let mut state = GameState::new(5);
    let mut generator = PieceGenerator::new(5);
    assert_eq!(state.next_piece(), generator.next_piece());

    state.reset();
    // Reset draws a fresh next piece instead of replaying the first one.
    assert_eq!(state.next_piece(), generator.next_piece());
    assert_eq!(state.seed(), 5);
}

#[test]
fn test_lock_events_are_taken_once() {
    let mut state = GameState::new(11);
    state.apply_action(GameAction::SoftDropStart);

    let mut events = 0;
    while events < 3 && !state.game_over() {
        state.tick(TICK_NS);
        if let Some(event) = state.take_last_event() {
            assert_eq!(event.points, [0, 40, 100, 300, 1200][event.lines_filled as usize]);
            assert!(state.take_last_event().is_none());
            events += 1;
        }
    }
    assert_eq!(events, 3);
}

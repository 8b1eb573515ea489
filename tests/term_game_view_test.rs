use bucket_tetris::core::GameState;
use bucket_tetris::term::{FrameBuffer, GameView, Viewport, SCREEN_HEIGHT, SCREEN_WIDTH};
use bucket_tetris::types::{SPAWN_X, SPAWN_Y, TICK_NS};

fn render(state: &GameState) -> FrameBuffer {
    GameView::new().render(&state.snapshot(), Viewport::new(SCREEN_WIDTH, SCREEN_HEIGHT))
}

/// Count "[ ]" cells inside the bucket columns.
fn bucket_blocks(fb: &FrameBuffer) -> usize {
    (0..20)
        .map(|y| fb.row_text(y)[22..52].matches("[ ]").count())
        .sum()
}

/// Count "[ ]" cells in the preview panel left of the bucket.
fn preview_blocks(fb: &FrameBuffer) -> usize {
    (11..=13)
        .map(|y| fb.row_text(y)[..20].matches("[ ]").count())
        .sum()
}

#[test]
fn term_view_shows_spawned_piece_and_preview() {
    let mut state = GameState::new(1);
    let before = render(&state);
    assert_eq!(bucket_blocks(&before), 0);
    assert_eq!(preview_blocks(&before), 4);

    state.tick(TICK_NS);
    let fb = render(&state);
    assert_eq!(bucket_blocks(&fb), 4);
    assert_eq!(preview_blocks(&fb), 4);

    // The pivot mino sits at the spawn anchor.
    let x = 22 + 3 * SPAWN_X as usize;
    assert_eq!(&fb.row_text(SPAWN_Y as u16)[x..x + 3], "[ ]");
}

#[test]
fn term_view_counters_follow_game() {
    let state = GameState::new(1);
    let fb = render(&state);

    assert!(fb.row_text(0).starts_with("LINES CLEARED:    0"));
    assert!(fb.row_text(1).starts_with("LEVEL:            1"));
    assert!(fb.row_text(2).starts_with("  SCORE:       0"));
}

#[test]
fn term_view_shows_game_over_after_top_out() {
    let mut state = GameState::new(8);
    state.set_soft_drop(true);
    while !state.game_over() {
        state.tick(TICK_NS);
    }

    let fb = render(&state);
    assert!(fb.row_text(9).contains("GAME OVER"));

    state.reset();
    let fb = render(&state);
    assert!(!fb.row_text(9).contains("GAME OVER"));
    assert_eq!(bucket_blocks(&fb), 0);
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let state = GameState::new(1);
    let view = GameView::new();
    let mut fb = FrameBuffer::new(1, 1);

    view.render_into(&state.snapshot(), Viewport::new(90, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (90, 30));

    let again = view.render(&state.snapshot(), Viewport::new(90, 30));
    assert_eq!(fb, again);
}

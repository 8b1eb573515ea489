//! Terminal Tetris runner (default binary).
//!
//! Reads crossterm key events, feeds the game fixed-size time slices from a
//! lag accumulator, and redraws through the framebuffer renderer only when
//! something visible changed.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use bucket_tetris::config::Config;
use bucket_tetris::core::{FixedStep, GameState};
use bucket_tetris::input::{should_quit, InputHandler};
use bucket_tetris::logging;
use bucket_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use bucket_tetris::types::GameAction;

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    for warning in &config.warnings {
        warn!("{warning}");
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!(error = %err, "exiting with error");
    }
    result
}

/// Everything the loop mutates besides the terminal.
struct Session {
    game: GameState,
    input: InputHandler,
    step: FixedStep,
    dirty: bool,
}

impl Session {
    fn apply(&mut self, action: GameAction) {
        if action == GameAction::Reset {
            self.input.reset();
            self.step.reset();
            info!(seed = self.game.seed(), "reset requested");
        }
        self.dirty |= self.game.apply_action(action);
    }
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let key_events = term.reports_key_events();
    info!(seed, tick_ms = config.tick_ms, key_events, "starting game");

    let mut session = Session {
        game: GameState::new(seed),
        input: InputHandler::new()
            .with_key_release_timeout_ms(config.key_release_timeout_ms)
            .with_release_events(key_events),
        step: FixedStep::new(config.tick_ns()),
        dirty: true,
    };

    let view = GameView::new();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let poll_timeout = Duration::from_nanos(session.step.slice_ns());
    let mut was_over = false;
    let mut last = Instant::now();

    loop {
        if session.dirty {
            view.render_into(&session.game.snapshot(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            session.dirty = false;
        }

        if event::poll(poll_timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            info!(score = session.game.score(), "quit");
                            return Ok(());
                        }
                        if let Some(action) = session.input.handle_key_press(key.code) {
                            session.apply(action);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = session.input.handle_key_release(key.code) {
                            session.apply(action);
                        }
                    }
                },
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    session.dirty = true;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last);
        last = now;

        let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        if let Some(action) = session.input.update(elapsed_ms) {
            session.apply(action);
        }

        let elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        session.step.accumulate(elapsed_ns);
        session.dirty |= session.step.run(&mut session.game);

        if let Some(event) = session.game.take_last_event() {
            if event.lines_filled > 0 {
                info!(
                    lines = event.lines_filled,
                    points = event.points,
                    level_up = event.level_up,
                    score = session.game.score(),
                    "rows cleared"
                );
            }
        }

        let over = session.game.game_over();
        if over != was_over {
            was_over = over;
            session.dirty = true;
        }
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}

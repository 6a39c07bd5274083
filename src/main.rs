//! Terminal 2048 runner (default binary).
//!
//! Reads one key at a time and resolves it completely (move, spawn, win and
//! game-over checks) before reading the next. Rendering uses crossterm and the
//! framebuffer renderer in `tui_2048::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_2048::config::Config;
use tui_2048::engine::GameState;
use tui_2048::input::{handle_key_event, handle_prompt_key, should_quit};
use tui_2048::logging::init_tracing;
use tui_2048::term::{FrameBuffer, GameView, MergeFlash, TerminalRenderer, Viewport};
use tui_2048::types::TICK_MS;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    let result = term.enter("2048").and_then(|()| run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameState::with_target(config.seed, config.target);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut flash = MergeFlash::new();

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&game.snapshot(), flash.events(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), moves = game.moves(), "quit");
                        return Ok(());
                    }

                    if game.prompt().is_some() {
                        if let Some(decision) = handle_prompt_key(key) {
                            debug!(?decision, "prompt answered");
                            game = game.resolve(decision);
                            flash.clear();
                            dirty = true;
                        }
                    } else if let Some(action) = handle_key_event(key) {
                        let step = game.apply_action(action);
                        if step.moved || step.state != game {
                            flash.start(&step.merges, config.flash_ms);
                            game = step.state;
                            dirty = true;
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            if flash.tick(elapsed.as_millis() as u32) {
                dirty = true;
            }
        }
    }
}

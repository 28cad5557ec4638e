//! Terminal snake runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and the framebuffer renderer from
//! `tui_snake::term`. All intents and ticks go through one `Session`.

use std::collections::hash_map::DefaultHasher;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tui_snake::config::{Cli, RunConfig};
use tui_snake::core::{GameEngine, GameSnapshot};
use tui_snake::driver::{Flow, Session};
use tui_snake::input::{map_key, SwipeTracker};
use tui_snake::term::{FrameBuffer, FrameThrottle, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{Difficulty, GridSize, Intent};

/// Upper bound on how long the loop sleeps waiting for input.
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let config = RunConfig::from_cli(Cli::parse())?;
    init_logging(config.log_file.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "run loop failed");
    }
    result
}

/// Log to a file when one is configured; the terminal belongs to the game.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let view = GameView::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    if let Some(fixed) = config.grid {
        if !view.fits(fixed, viewport) {
            warn!(
                cols = fixed.cols(),
                rows = fixed.rows(),
                width = w,
                height = h,
                "fixed grid is larger than the terminal; the board will be clipped"
            );
        }
    }
    let grid = config
        .grid
        .or_else(|| view.grid_for(viewport))
        .unwrap_or_default();
    let seed = config.seed.unwrap_or_else(seed_from_clock);
    info!(cols = grid.cols(), rows = grid.rows(), seed, "starting");

    let mut session = Session::new(GameEngine::new(grid, seed), config.difficulty);
    let mut swipes = SwipeTracker::new();
    let mut throttle = FrameThrottle::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(w, h);
    // Grid wanted after a terminal resize; applied once back in the menu.
    let mut pending_grid: Option<GridSize> = None;
    let mut last_status = session.engine().status();

    let epoch = Instant::now();
    let now_ms = || epoch.elapsed().as_millis() as u64;

    loop {
        if let Some(grid) = pending_grid {
            if session.resize(grid) {
                pending_grid = None;
            }
        }

        let now = now_ms();
        session.advance(now);

        // Render.
        session.snapshot_into(&mut snap);
        // A drag that spans a pause or restart would steer the new state.
        if snap.status != last_status {
            swipes.cancel();
            last_status = snap.status;
        }
        let fingerprint = frame_fingerprint(&snap, session.cursor(), viewport);
        if throttle.should_render(now, fingerprint) {
            view.render_into(&snap, session.cursor(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until the next tick.
        let timeout = session
            .timeout_ms(now_ms())
            .unwrap_or(IDLE_POLL_MS)
            .min(IDLE_POLL_MS);
        if !event::poll(Duration::from_millis(timeout))? {
            continue;
        }

        let intent = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
            Event::Mouse(mouse) => swipes.handle(mouse).map(Intent::Direction),
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
                throttle.reset();
                if config.grid.is_none() {
                    pending_grid = view.grid_for(viewport);
                }
                None
            }
            _ => None,
        };

        let Some(intent) = intent else {
            continue;
        };
        if session.handle(intent, now_ms()) == Flow::Quit {
            info!(score = session.engine().score(), "quit");
            return Ok(());
        }
    }
}

fn frame_fingerprint(snap: &GameSnapshot, cursor: Difficulty, viewport: Viewport) -> u64 {
    let mut h = DefaultHasher::new();
    snap.fingerprint().hash(&mut h);
    cursor.hash(&mut h);
    viewport.width.hash(&mut h);
    viewport.height.hash(&mut h);
    h.finish()
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

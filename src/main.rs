//! Terminal runner (default binary).
//!
//! Owns the pieces the engine deliberately leaves out: the clock, the
//! terminal and the keyboard. Gravity is driven by a [`TickScheduler`] that is
//! replaced whenever the engine reports a new tick interval.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::{parse_args, CliCommand, GameConfig, USAGE};
use blockfall::core::GameState;
use blockfall::event_log::EventLog;
use blockfall::input::{handle_key_event, should_quit, should_restart};
use blockfall::scheduler::TickScheduler;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll timeout while nothing is scheduled (game over screen).
const IDLE_POLL: Duration = Duration::from_millis(250);

struct Summary {
    score: u32,
    level: u32,
    lines: u32,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(GameConfig::from_env(), &args)? {
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Run(config) => config,
    };

    let mut log = EventLog::open_optional(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, &config, &mut log));

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();

    let summary = result?;
    println!(
        "{}: score {}  level {}  lines {}",
        config, summary.score, summary.level, summary.lines
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, log: &mut EventLog) -> Result<Summary> {
    let mut game = config.new_game();
    log.note("start", &game);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = game.snapshot();
    let mut scheduler = TickScheduler::new(game.tick_interval(), Instant::now());
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        let timeout = if game.game_over() {
            IDLE_POLL
        } else {
            scheduler.time_until_due(Instant::now())
        };

        if event::poll(timeout)? {
            match event::read()? {
                // Terminal auto-repeat doubles as held-key movement.
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        break;
                    }
                    if game.game_over() && should_restart(key) {
                        game = config.new_game();
                        scheduler.reschedule(game.tick_interval(), Instant::now());
                        log.note("restart", &game);
                        dirty = true;
                        continue;
                    }
                    if let Some(command) = handle_key_event(key) {
                        dirty |= game.apply_command(command);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if !game.game_over() && scheduler.is_due(now) {
            game.tick();
            scheduler.advance(now);
            dirty = true;
        }

        drain_events(&mut game, &mut scheduler, log);
    }

    log.note("quit", &game);
    Ok(Summary {
        score: game.score(),
        level: game.level(),
        lines: game.lines(),
    })
}

fn drain_events(game: &mut GameState, scheduler: &mut TickScheduler, log: &mut EventLog) {
    let events = game.take_events();
    if events.is_empty() {
        return;
    }
    let now = Instant::now();
    for event in &events {
        log.record(event, game);
        scheduler.handle_event(event, now);
    }
}

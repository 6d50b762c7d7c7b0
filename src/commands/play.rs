//! Play subcommand handler
//!
//! Drives the playback loop in the foreground: one tick, then a fixed-delay
//! wait spent polling the keyboard. The delay is whatever the player
//! returned for that tick, so the loop inherits the engine's open-loop
//! timing (including the hold before each wrap).
//!
//! Keys: space toggles pause, `n` steps one frame while paused, `q`, Esc or
//! Ctrl-C quits.

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal;

use tempo::captions::{parse_instant, CaptionTrack};
use tempo::display::term::TermRenderer;
use tempo::playback::{Player, TimeWindow, Timeline};
use tempo::Config;

use crate::cli::PlayArgs;

pub fn run(args: PlayArgs) -> Result<()> {
    let config = Config::load()?;
    let track = CaptionTrack::load(&args.file)?;

    let (start, end) = resolve_window(&args, &track)?;
    let window = TimeWindow::new(start, end)?;

    let mut options = config.player_options();
    if let Some(fps) = args.fps {
        options.fps = fps;
    }
    if let Some(steps) = args.steps {
        options.steps = steps;
    }
    if let Some(hold_ms) = args.hold_ms {
        options.hold = Duration::from_millis(hold_ms);
    }
    if let Some(clock) = args.clock {
        options.clock = clock != 0;
    }
    if let Some(captions) = args.captions {
        options.captions = captions != 0;
    }

    if !atty::is(atty::Stream::Stdout) {
        bail!("Refusing to play: stdout is not a terminal");
    }

    let timeline = Timeline::new(window, options.steps)?;
    let marks: Vec<u32> = track
        .records()
        .iter()
        .map(|c| timeline.frame_of(c.from))
        .collect();
    let total_secs = window.duration().num_milliseconds() as f64 / 1000.0;

    let renderer = TermRenderer::new(options.steps, total_secs, marks);
    let mut player = Player::new(window, options, Box::new(renderer))?;
    player.set_captions(track);

    terminal::enable_raw_mode().context("Failed to enter raw mode")?;
    let result = play_loop(&mut player, args.cycles);
    terminal::disable_raw_mode().context("Failed to leave raw mode")?;

    // Move past the three-line widget
    println!("\x1b[2B");
    result
}

fn resolve_window(args: &PlayArgs, track: &CaptionTrack) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let bounds = track.bounds();
    let start = match &args.start {
        Some(s) => parse_instant(s)?,
        None => {
            bounds
                .context("Track has no records; pass --start and --end")?
                .0
        }
    };
    let end = match &args.end {
        Some(s) => parse_instant(s)?,
        None => {
            bounds
                .context("Track has no records; pass --start and --end")?
                .1
        }
    };
    Ok((start, end))
}

fn play_loop(player: &mut Player, cycles: u32) -> Result<()> {
    player.play();
    let mut completed = 0u32;
    let mut prev_frame = player.frame();

    loop {
        if player.is_running() {
            let generation = player.generation();
            let Some(delay) = player.tick(generation) else {
                continue;
            };

            let frame = player.frame();
            if frame < prev_frame {
                completed += 1;
                if cycles > 0 && completed >= cycles {
                    return Ok(());
                }
            }
            prev_frame = frame;

            if !poll_keys(player, delay)? {
                return Ok(());
            }
        } else if !poll_keys(player, Duration::from_millis(100))? {
            return Ok(());
        }
    }
}

/// Poll the keyboard for the given window. Returns false on quit.
fn poll_keys(player: &mut Player, window: Duration) -> Result<bool> {
    let deadline = Instant::now() + window;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(true);
        }
        if !event::poll(remaining)? {
            return Ok(true);
        }
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(false)
                }
                KeyCode::Char(' ') => player.toggle(),
                KeyCode::Char('n') => {
                    if !player.is_running() {
                        player.advance_once();
                    }
                }
                _ => {}
            }
        }
    }
}

//! The playback controller
//!
//! [`Player`] owns a cursor over a [`Timeline`] and advances it one step per
//! tick, pushing the resulting frame index (and optionally a clock string
//! and the active caption) through a [`Renderer`].
//!
//! # Timing model
//!
//! The loop is open-loop fixed-delay: every tick returns the delay to wait
//! before the next tick, computed from the frame interval alone. There is no
//! deadline tracking, so a slow renderer accumulates drift. On the tick
//! whose advance pushes the cursor past the window end, the returned delay
//! is stretched by the configured hold, producing a visible pause on the
//! last frame before the cursor wraps back to the start.
//!
//! # State machine
//!
//! Two states, Stopped (initial) and Running. `play` moves to Running,
//! `stop` back to Stopped, `configure` resets to Stopped from anywhere. The
//! controller never blocks; the embedding drives it by calling [`Player::tick`]
//! and sleeping the returned delay.
//!
//! # Stale ticks
//!
//! `stop` and `configure` bump a generation counter. A tick carrying an old
//! generation is ignored, so a delayed callback scheduled before a
//! reconfiguration cannot advance the fresh cursor even if the embedding
//! delivers it late or from another thread.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::captions::CaptionTrack;
use crate::display::{clock, Renderer};

use super::error::ConfigError;
use super::timeline::{TimeWindow, Timeline};

/// Playback tuning, passed explicitly at construction and reconfiguration.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    /// Number of discrete frames the window is divided into
    pub steps: u32,
    /// Tick rate in frames per second
    pub fps: f64,
    /// Extra delay inserted before the wrap tick
    pub hold: Duration,
    /// Push formatted cursor instants to the renderer
    pub clock: bool,
    /// Look up and push matching captions to the renderer
    pub captions: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            steps: 250,
            fps: 24.0,
            hold: Duration::from_millis(2500),
            clock: false,
            captions: false,
        }
    }
}

impl PlayerOptions {
    /// Delay between ticks at the configured frame rate.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(ConfigError::InvalidFrameRate(self.fps));
        }
        Ok(())
    }
}

/// Timer-driven cursor over a bounded time window.
pub struct Player {
    timeline: Timeline,
    options: PlayerOptions,
    cursor: DateTime<Utc>,
    running: bool,
    generation: u64,
    renderer: Box<dyn Renderer>,
    captions: Option<CaptionTrack>,
}

impl Player {
    /// Create a configured player in the Stopped state.
    pub fn new(
        window: TimeWindow,
        options: PlayerOptions,
        renderer: Box<dyn Renderer>,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        let timeline = Timeline::new(window, options.steps)?;
        Ok(Self {
            timeline,
            options,
            cursor: window.start(),
            running: false,
            generation: 0,
            renderer,
            captions: None,
        })
    }

    /// Replace the window and options, resetting the cursor to the start.
    ///
    /// Validation happens before any mutation: on error the previous
    /// configuration, cursor, and run state are all untouched. On success
    /// the player is Stopped and pending ticks are invalidated.
    pub fn configure(
        &mut self,
        window: TimeWindow,
        options: PlayerOptions,
    ) -> Result<(), ConfigError> {
        options.validate()?;
        let timeline = Timeline::new(window, options.steps)?;

        self.timeline = timeline;
        self.options = options;
        self.cursor = window.start();
        self.running = false;
        self.generation += 1;
        debug!(
            start = %window.start(),
            end = %window.end(),
            steps = self.timeline.steps(),
            "player configured"
        );
        Ok(())
    }

    /// Attach a caption track for lookups when the captions option is on.
    pub fn set_captions(&mut self, track: CaptionTrack) {
        self.captions = Some(track);
    }

    /// Stopped -> Running. No effect while already running.
    pub fn play(&mut self) {
        if !self.running {
            self.running = true;
            trace!("playback started");
        }
    }

    /// Running -> Stopped. The cursor keeps its current value.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.generation += 1;
            trace!("playback stopped");
        }
    }

    /// The public pause control: stops when running, starts when stopped.
    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.play();
        }
    }

    /// Manual single step, decoupled from the timer.
    ///
    /// Advances (or wraps) the cursor and notifies the renderer with the new
    /// frame index. No delay is computed and the clock/caption sinks are not
    /// touched. Returns the new frame index.
    pub fn advance_once(&mut self) -> u32 {
        self.advance();
        let frame = self.frame();
        self.renderer.frame(frame);
        frame
    }

    /// One loop iteration.
    ///
    /// Ignored (returns `None`) when `generation` is stale or the player is
    /// stopped. Otherwise advances the cursor, notifies the renderer, and
    /// returns the fixed delay to wait before the next tick.
    pub fn tick(&mut self, generation: u64) -> Option<Duration> {
        if generation != self.generation || !self.running {
            trace!(generation, "stale tick ignored");
            return None;
        }

        let overshot = self.advance();

        if self.options.clock {
            self.renderer.clock(&clock::format_clock(self.cursor));
        }
        if self.options.captions {
            if let Some(track) = &self.captions {
                if let Some(caption) = track.caption_at(self.cursor) {
                    self.renderer.caption(caption);
                }
            }
        }
        self.renderer.frame(self.timeline.frame_of(self.cursor));

        let mut delay = self.options.interval();
        if overshot {
            delay += self.options.hold;
        }
        Some(delay)
    }

    /// Wrap-or-advance the cursor. Returns true when this advance pushed the
    /// cursor past the window end (the next tick will wrap).
    fn advance(&mut self) -> bool {
        let window = self.timeline.window();
        if self.cursor < window.end() {
            self.cursor = self.cursor + self.timeline.step();
            window.end() < self.cursor
        } else {
            self.cursor = window.start();
            false
        }
    }

    /// Current frame index, in `[0, steps]`.
    pub fn frame(&self) -> u32 {
        self.timeline.frame_of(self.cursor)
    }

    pub fn cursor(&self) -> DateTime<Utc> {
        self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current generation; pass it back through [`Player::tick`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }
}

//! Time window discretization
//!
//! A [`TimeWindow`] is a bounded `[start, end]` interval of wall-clock
//! instants. A [`Timeline`] discretizes that window into a fixed number of
//! steps and maps any instant back to an integer frame index.

use chrono::{DateTime, Duration, Utc};

use super::error::ConfigError;

/// Endpoints of the animatable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a window, rejecting `end < start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ConfigError> {
        if end < start {
            return Err(ConfigError::WindowInverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// A time window divided into a fixed number of frames.
///
/// The step size is the window duration divided by the step count, floored
/// to whole milliseconds and clamped to at least 1 ms so a degenerate
/// window can never stall the cursor.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    window: TimeWindow,
    steps: u32,
    step_ms: i64,
}

impl Timeline {
    pub fn new(window: TimeWindow, steps: u32) -> Result<Self, ConfigError> {
        if steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        let step_ms = (window.duration().num_milliseconds() / i64::from(steps)).max(1);
        Ok(Self {
            window,
            steps,
            step_ms,
        })
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Duration between successive frame positions.
    pub fn step(&self) -> Duration {
        Duration::milliseconds(self.step_ms)
    }

    /// Frame index of an instant, clamped to `[0, steps]`.
    ///
    /// Clamping covers instants outside the window: anything before `start`
    /// maps to frame 0, and a cursor that overshot `end` (possible when the
    /// step count does not divide the window evenly) maps to the last frame.
    pub fn frame_of(&self, t: DateTime<Utc>) -> u32 {
        let offset_ms = (t - self.window.start).num_milliseconds();
        (offset_ms / self.step_ms).clamp(0, i64::from(self.steps)) as u32
    }
}

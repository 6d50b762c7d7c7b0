//! Playback configuration errors.

use chrono::{DateTime, Utc};

/// Errors raised when a playback configuration is rejected.
///
/// Configuration is the only fallible surface of the playback engine;
/// a rejected call leaves the previous configuration untouched.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("time window ends before it starts ({end} < {start})")]
    WindowInverted {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("step count must be greater than zero")]
    ZeroSteps,

    #[error("frame rate must be positive and finite (got {0})")]
    InvalidFrameRate(f64),
}

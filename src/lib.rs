//! tempo - temporal playback engine
//!
//! Plays a bounded `[start, end]` time window as a sequence of discrete
//! animation frames at a fixed rate, pushing frame indices (and optionally a
//! formatted clock and timed captions) to an external renderer. The cursor
//! wraps back to the start after reaching the end, with a configurable hold
//! on the final frame.
//!
//! Modules:
//! - [`playback`]: the playback controller, time window, and timeline math
//! - [`captions`]: caption track loading and interval lookup
//! - [`display`]: renderer trait, clock formatting, terminal renderer
//! - [`config`]: CLI defaults file

pub mod captions;
pub mod config;
pub mod display;
pub mod playback;

pub use captions::{Caption, CaptionTrack};
pub use config::Config;
pub use display::Renderer;
pub use playback::{ConfigError, Player, PlayerOptions, TimeWindow, Timeline};

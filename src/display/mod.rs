//! Rendering seams for playback output
//!
//! The playback engine pushes output through the [`Renderer`] trait and
//! never draws anything itself. Submodules:
//! - `clock`: instant and timecode formatting
//! - `term`: in-place terminal renderer used by `tempo play`

pub mod clock;
pub mod term;

use crate::captions::Caption;

/// Callback contract between the playback engine and whatever draws frames.
///
/// `frame` is invoked synchronously on every advance with the new frame
/// index. `clock` and `caption` fire only when the corresponding player
/// option is enabled, and `caption` only when a record actually matches the
/// cursor; a display keeps its previous caption across gaps.
pub trait Renderer {
    /// A new frame index was reached.
    fn frame(&mut self, frame: u32);

    /// The formatted cursor instant for a clock display.
    fn clock(&mut self, _text: &str) {}

    /// The caption record active at the cursor.
    fn caption(&mut self, _caption: &Caption) {}
}

//! Timer-driven playback over a bounded time window
//!
//! The engine is organized into submodules:
//! - `timeline`: time window endpoints and frame discretization
//! - `player`: the playback controller and its tick loop
//! - `error`: configuration errors
//!
//! # Usage
//!
//! ```no_run
//! use tempo::display::Renderer;
//! use tempo::playback::{Player, PlayerOptions, TimeWindow};
//!
//! struct Overlay;
//!
//! impl Renderer for Overlay {
//!     fn frame(&mut self, frame: u32) {
//!         println!("frame {}", frame);
//!     }
//! }
//!
//! let start = "2012-10-04T09:03:00-05:00".parse().unwrap();
//! let end = "2012-10-04T10:33:56-05:00".parse().unwrap();
//! let window = TimeWindow::new(start, end).unwrap();
//!
//! let mut player = Player::new(window, PlayerOptions::default(), Box::new(Overlay)).unwrap();
//! player.play();
//! let generation = player.generation();
//! while let Some(delay) = player.tick(generation) {
//!     std::thread::sleep(delay);
//! }
//! ```

mod error;
mod player;
mod timeline;

pub use error::ConfigError;
pub use player::{Player, PlayerOptions};
pub use timeline::{TimeWindow, Timeline};

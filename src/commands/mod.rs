//! Command handlers for the CLI.

pub mod info;
pub mod play;

//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "tempo",
    version,
    about = "Plays a time window as animation frames with clock and caption overlays"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a caption track in the terminal
    Play(PlayArgs),
    /// Show information about a caption track
    Info(InfoArgs),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug)]
pub struct PlayArgs {
    /// Caption track file (JSON)
    pub file: PathBuf,

    /// Frames per second
    #[arg(long, value_name = "N")]
    pub fps: Option<f64>,

    /// Number of discrete frames in the window
    #[arg(long, value_name = "N")]
    pub steps: Option<u32>,

    /// Hold on the last frame before wrapping, in milliseconds
    #[arg(long = "hold-ms", value_name = "MS")]
    pub hold_ms: Option<u64>,

    /// Window start (RFC 3339); defaults to the track's earliest record
    #[arg(long, value_name = "TIME")]
    pub start: Option<String>,

    /// Window end (RFC 3339); defaults to the track's latest record
    #[arg(long, value_name = "TIME")]
    pub end: Option<String>,

    /// Show the clock line (overrides the config file)
    #[arg(long, value_name = "0|1")]
    pub clock: Option<u8>,

    /// Show captions (overrides the config file)
    #[arg(long, value_name = "0|1")]
    pub captions: Option<u8>,

    /// Stop after this many full cycles (0 = play until quit)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub cycles: u32,
}

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Caption track file (JSON)
    pub file: PathBuf,

    /// Step count used to report the effective step size
    #[arg(long, value_name = "N")]
    pub steps: Option<u32>,
}

//! Info subcommand handler

use anyhow::Result;

use tempo::captions::CaptionTrack;
use tempo::display::clock::{format_clock, format_timecode};
use tempo::playback::{TimeWindow, Timeline};
use tempo::Config;

use crate::cli::InfoArgs;

pub fn run(args: InfoArgs) -> Result<()> {
    let config = Config::load()?;
    let track = CaptionTrack::load(&args.file)?;

    println!("Track:    {}", args.file.display());
    println!("Records:  {}", track.len());

    let Some((start, end)) = track.bounds() else {
        println!("Window:   (empty track)");
        return Ok(());
    };

    let steps = args.steps.unwrap_or(config.playback.steps);
    let window = TimeWindow::new(start, end)?;
    let timeline = Timeline::new(window, steps)?;

    let secs = window.duration().num_milliseconds() as f64 / 1000.0;
    println!("Start:    {}", format_clock(start));
    println!("End:      {}", format_clock(end));
    println!("Duration: {}", format_timecode(secs));
    println!(
        "Step:     {} ms at {} steps",
        timeline.step().num_milliseconds(),
        steps
    );

    Ok(())
}

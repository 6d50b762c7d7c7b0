//! In-place terminal renderer for `tempo play`
//!
//! Draws a three-line widget that is rewritten on every frame:
//! clock + frame counter, progress bar with caption-start markers, and the
//! active caption line. The cursor is parked at the top-left of the widget
//! between draws so the whole block overwrites itself.

use std::io::{self, Write};

use unicode_width::UnicodeWidthChar;

use crate::captions::Caption;
use crate::display::clock::format_timecode;
use crate::display::Renderer;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const WHITE: &str = "\x1b[97m";
const DARK_GREY: &str = "\x1b[90m";
const GREY: &str = "\x1b[37m";
const RESET: &str = "\x1b[0m";
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Build the progress bar character array.
///
/// The playhead sits at the current frame's position; caption starts are
/// marked with a diamond. Returns the characters and the filled count.
pub fn build_bar_chars(bar_width: usize, frame: u32, steps: u32, marks: &[u32]) -> (Vec<char>, usize) {
    let progress = if steps > 0 {
        (frame as f64 / steps as f64).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    for &mark in marks {
        let mark_pos = if steps > 0 {
            ((mark as f64 / steps as f64) * bar_width as f64) as usize
        } else {
            0
        };
        if mark_pos < bar_width && bar[mark_pos] != '⏺' {
            bar[mark_pos] = '◆';
        }
    }

    (bar, filled)
}

/// Collapse a caption into a single display line.
pub fn caption_line(caption: &Caption) -> String {
    let text = caption.text.split_whitespace().collect::<Vec<_>>().join(" ");
    match &caption.speaker {
        Some(speaker) => format!("{}: {}", speaker, text),
        None => text,
    }
}

/// Truncate a line to the given display width, appending an ellipsis.
pub fn truncate_to_width(line: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

/// Terminal-drawing implementation of [`Renderer`].
pub struct TermRenderer {
    steps: u32,
    total_secs: f64,
    marks: Vec<u32>,
    frame: u32,
    clock_text: String,
    caption_text: String,
    stdout: io::Stdout,
}

impl TermRenderer {
    /// `marks` are frame positions of caption starts, shown on the bar.
    pub fn new(steps: u32, total_secs: f64, marks: Vec<u32>) -> Self {
        Self {
            steps,
            total_secs,
            marks,
            frame: 0,
            clock_text: String::new(),
            caption_text: String::new(),
            stdout: io::stdout(),
        }
    }

    fn term_width(&self) -> usize {
        crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(80)
    }

    fn draw(&mut self) -> io::Result<()> {
        let width = self.term_width().max(20);

        // Line 1: clock on the left, frame counter on the right
        let counter = format!("frame {:>5}/{}", self.frame, self.steps);
        let pad = width
            .saturating_sub(self.clock_text.len())
            .saturating_sub(counter.len());
        let header = format!(
            "{}{}{}{}{}{}",
            WHITE,
            self.clock_text,
            " ".repeat(pad),
            GREY,
            counter,
            RESET
        );

        // Line 2: progress bar with timecode
        let elapsed = if self.steps > 0 {
            self.total_secs * f64::from(self.frame) / f64::from(self.steps)
        } else {
            0.0
        };
        let time_display = format!(" {}/{}", format_timecode(elapsed), format_timecode(self.total_secs));
        let bar_width = width.saturating_sub(time_display.len() + 1);
        let (bar, filled) = build_bar_chars(bar_width, self.frame, self.steps, &self.marks);

        let mut bar_out = String::with_capacity(width * 4);
        bar_out.push_str(GREEN);
        for (i, &c) in bar.iter().enumerate() {
            if i < filled {
                if c == '◆' {
                    bar_out.push_str(YELLOW);
                    bar_out.push(c);
                    bar_out.push_str(GREEN);
                } else {
                    bar_out.push('━');
                }
            } else if i == filled {
                bar_out.push_str(WHITE);
                bar_out.push(c);
                bar_out.push_str(GREEN);
            } else if c == '◆' {
                bar_out.push_str(YELLOW);
                bar_out.push(c);
                bar_out.push_str(GREEN);
            } else {
                bar_out.push_str(DARK_GREY);
                bar_out.push(c);
                bar_out.push_str(GREEN);
            }
        }
        bar_out.push_str(GREY);
        bar_out.push_str(&time_display);
        bar_out.push_str(RESET);

        // Line 3: active caption
        let caption = truncate_to_width(&self.caption_text, width);

        write!(
            self.stdout,
            "{}{}\r\n{}{}\r\n{}{}\x1b[2A\r",
            CLEAR_LINE, header, CLEAR_LINE, bar_out, CLEAR_LINE, caption
        )?;
        self.stdout.flush()
    }
}

impl Renderer for TermRenderer {
    fn frame(&mut self, frame: u32) {
        self.frame = frame;
        // Renderer callbacks cannot fail; a broken pipe just stops drawing.
        let _ = self.draw();
    }

    fn clock(&mut self, text: &str) {
        self.clock_text = text.to_string();
    }

    fn caption(&mut self, caption: &Caption) {
        self.caption_text = caption_line(caption);
    }
}

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

use crate::carousel::Carousel;
use crate::engine::{Engine, Input};
use crate::script::ScriptedInput;
use crate::state::CarouselState;

const RULE_WIDTH: usize = 72;

/// Prints the active slide to a writer whenever it changes.
///
/// Plays for a fixed length of show time. In real-time mode each frame sleeps
/// for the frame time; otherwise frames run back to back, which gives the same
/// slide sequence without waiting.
pub struct TerminalEngine<W: Write> {
    out: W,
    frame_time: Duration,
    run_length: Duration,
    realtime: bool,
    clock: Duration,
    script: VecDeque<ScriptedInput>,
    shown: Option<(usize, CarouselState)>,
}

impl<W: Write> TerminalEngine<W> {
    pub fn new(out: W, frame_time: Duration, run_length: Duration) -> Self {
        Self {
            out,
            frame_time,
            run_length,
            realtime: true,
            clock: Duration::ZERO,
            script: VecDeque::new(),
            shown: None,
        }
    }

    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    pub fn with_script(mut self, script: Vec<ScriptedInput>) -> Self {
        self.script = script.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_slide(&mut self, carousel: &Carousel) -> Result<()> {
        let out = &mut self.out;
        let secs = self.clock.as_secs_f32();
        match carousel.current_slide() {
            Some(slide) => {
                let status = if carousel.is_running() { "" } else { " (paused)" };
                writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
                writeln!(
                    out,
                    "[{:>6.1}s] {}/{}  {}{}",
                    secs,
                    carousel.current_index() + 1,
                    carousel.len(),
                    slide.title(),
                    status
                )?;
                writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
                for line in wrap(slide.content(), RULE_WIDTH) {
                    writeln!(out, "{}", line)?;
                }
            }
            None => writeln!(out, "[{:>6.1}s] (no slides)", secs)?,
        }
        out.flush().context("Failed to flush terminal output")?;
        Ok(())
    }
}

impl<W: Write> Engine for TerminalEngine<W> {
    fn frame_time(&self) -> Duration {
        self.frame_time
    }

    fn poll_input(&mut self) -> Vec<Input> {
        let mut inputs = Vec::new();
        while self.script.front().is_some_and(|s| s.at <= self.clock) {
            if let Some(scripted) = self.script.pop_front() {
                inputs.push(scripted.input);
            }
        }
        inputs
    }

    fn render_frame(&mut self, carousel: &Carousel) -> Result<bool> {
        let current = (carousel.current_index(), carousel.state());
        if self.shown != Some(current) {
            self.print_slide(carousel)?;
            self.shown = Some(current);
        }

        if self.realtime {
            std::thread::sleep(self.frame_time);
        }
        self.clock += self.frame_time;
        Ok(self.clock < self.run_length)
    }
}

/// Greedy word wrap on whitespace; words longer than `width` get their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

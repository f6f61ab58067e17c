use anyhow::Result;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::carousel::Carousel;

/// UI events a display surface forwards to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Next,
    Prev,
    GoTo(usize),
    HoverEnter, // pointer over the carousel: pause
    HoverLeave, // pointer left: resume
    Quit,
}

/// A display surface driving a carousel one frame at a time.
pub trait Engine {
    /// Time that passes per frame; fed to the carousel's auto-advance timer.
    fn frame_time(&self) -> Duration;

    /// Events collected since the previous frame, in arrival order.
    fn poll_input(&mut self) -> Vec<Input>;

    /// Draws the active slide. Returning `false` ends the loop.
    fn render_frame(&mut self, carousel: &Carousel) -> Result<bool>;
}

/// Runs the frame loop until the engine stops or a `Quit` arrives, then tears
/// the carousel down exactly once, whichever way the loop ended.
///
/// A loop error takes precedence over a teardown error.
pub fn run<E: Engine>(engine: &mut E, carousel: &mut Carousel) -> Result<()> {
    let result = run_frames(engine, carousel);
    let teardown = carousel.teardown();
    result?;
    teardown?;
    Ok(())
}

fn run_frames<E: Engine>(engine: &mut E, carousel: &mut Carousel) -> Result<()> {
    let mut frames: u64 = 0;
    loop {
        for input in engine.poll_input() {
            if input == Input::Quit {
                info!(frames, "Quit requested");
                return Ok(());
            }
            apply_input(carousel, input)?;
        }

        carousel.tick(engine.frame_time())?;

        if !engine.render_frame(carousel)? {
            info!(frames, "Engine finished");
            return Ok(());
        }
        frames += 1;
    }
}

/// Maps one UI event onto a carousel operation. Out-of-range jumps are
/// logged and dropped so a stray click cannot stop the show.
pub fn apply_input(carousel: &mut Carousel, input: Input) -> Result<()> {
    debug!(?input, index = carousel.current_index(), "Input");
    match input {
        Input::Next => carousel.next()?,
        Input::Prev => carousel.prev()?,
        Input::GoTo(index) => {
            if let Err(e) = carousel.go_to(index) {
                warn!("Ignoring jump: {}", e);
            }
        }
        Input::HoverEnter => carousel.pause()?,
        Input::HoverLeave => carousel.resume()?,
        Input::Quit => {}
    }
    Ok(())
}

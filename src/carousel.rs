//! Slide rotation state machine.
//!
//! A [`Carousel`] owns its slides, the current index and, while auto-advance
//! is running, an [`IntervalTimer`]. The host loop feeds elapsed frame time
//! through [`Carousel::tick`]; every completed interval advances one slide.
//!
//! States:
//! - `Idle`: no timer (paused, auto-play off, or fewer than two slides)
//! - `Running`: timer active
//! - `TornDown`: terminal, every operation is rejected

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::slide::Slide;
use crate::state::CarouselState;
use crate::timer::IntervalTimer;

#[derive(Debug)]
pub struct Carousel {
    slides: Vec<Slide>,
    current_index: usize,
    auto_play: bool,
    interval: Duration,
    timer: Option<IntervalTimer>,
    torn_down: bool,
}

impl Carousel {
    /// Builds the carousel and starts auto-advance when it applies.
    pub fn new(slides: Vec<Slide>, config: &CarouselConfig) -> Result<Self> {
        let interval = config.interval()?;
        let mut carousel = Self {
            slides,
            current_index: 0,
            auto_play: config.auto_play,
            interval,
            timer: None,
            torn_down: false,
        };
        carousel.start_timer();
        info!(
            slides = carousel.slides.len(),
            auto_play = carousel.auto_play,
            interval_ms = interval.as_millis() as u64,
            state = ?carousel.state(),
            "Carousel initialized"
        );
        Ok(carousel)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current_index)
    }

    pub fn is_auto_play(&self) -> bool {
        self.auto_play
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> CarouselState {
        if self.torn_down {
            CarouselState::TornDown
        } else if self.timer.is_some() {
            CarouselState::Running
        } else {
            CarouselState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == CarouselState::Running
    }

    /// Stops auto-advance. Calling it while already idle does nothing.
    pub fn pause(&mut self) -> Result<()> {
        self.ensure_live()?;
        if self.timer.take().is_some() {
            debug!(index = self.current_index, "Auto-advance paused");
        }
        Ok(())
    }

    /// Restarts auto-advance with a fresh interval. A running timer is kept as is.
    pub fn resume(&mut self) -> Result<()> {
        self.ensure_live()?;
        if self.timer.is_none() {
            self.start_timer();
            if self.timer.is_some() {
                debug!(index = self.current_index, "Auto-advance resumed");
            }
        }
        Ok(())
    }

    /// Releases the timer for good. Every later call fails with `UseAfterTeardown`.
    pub fn teardown(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.timer = None;
        self.torn_down = true;
        info!(index = self.current_index, "Carousel torn down");
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        self.ensure_live()?;
        let len = self.slides.len();
        if len > 0 {
            self.current_index = (self.current_index + 1) % len;
        }
        Ok(())
    }

    pub fn prev(&mut self) -> Result<()> {
        self.ensure_live()?;
        let len = self.slides.len();
        if len > 0 {
            self.current_index = (self.current_index + len - 1) % len;
        }
        Ok(())
    }

    /// Jumps to `index`.
    ///
    /// An index past the end is rejected with `InvalidIndex` and the current
    /// slide is kept. With no slides every index is past the end, so even
    /// `go_to(0)` is signaled rather than silently ignored.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        self.ensure_live()?;
        let len = self.slides.len();
        if index >= len {
            return Err(CarouselError::InvalidIndex { index, len });
        }
        self.current_index = index;
        Ok(())
    }

    /// Feeds elapsed time to the auto-advance timer.
    ///
    /// Returns how many timer-driven advances happened. Idle carousels never advance.
    pub fn tick(&mut self, dt: Duration) -> Result<u64> {
        self.ensure_live()?;
        let fires = match self.timer.as_mut() {
            Some(timer) => timer.advance(dt),
            None => return Ok(0),
        };
        // A running timer implies at least two slides
        let len = self.slides.len();
        let steps = (fires % len as u64) as usize;
        self.current_index = (self.current_index + steps) % len;
        if fires > 0 {
            debug!(fires, index = self.current_index, "Auto-advanced");
        }
        Ok(fires)
    }

    fn start_timer(&mut self) {
        if self.auto_play && self.slides.len() > 1 {
            self.timer = Some(IntervalTimer::start(self.interval));
        }
    }

    fn ensure_live(&self) -> Result<()> {
        if self.torn_down {
            return Err(CarouselError::UseAfterTeardown);
        }
        Ok(())
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        if !self.torn_down && self.timer.take().is_some() {
            warn!("Carousel dropped while auto-advancing; releasing timer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("Slide {i}"), format!("Content {i}")))
            .collect()
    }

    fn config(auto_play: bool, interval_ms: u64) -> CarouselConfig {
        CarouselConfig {
            auto_play,
            interval_ms,
            ..Default::default()
        }
    }

    fn manual(n: usize) -> Carousel {
        Carousel::new(slides(n), &config(false, 5000)).unwrap()
    }

    #[test]
    fn test_goto_next_prev_scenario() {
        let mut carousel = manual(3);
        carousel.go_to(2).unwrap();
        assert_eq!(carousel.current_index(), 2);
        carousel.next().unwrap();
        assert_eq!(carousel.current_index(), 0);
        carousel.prev().unwrap();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut carousel = manual(4);
        for step in 0..50 {
            if step % 3 == 0 {
                carousel.prev().unwrap();
            } else {
                carousel.next().unwrap();
            }
            assert!(carousel.current_index() < 4);
        }
    }

    #[test]
    fn test_next_prev_round_trip() {
        for start in 0..5 {
            let mut carousel = manual(5);
            carousel.go_to(start).unwrap();
            carousel.next().unwrap();
            carousel.prev().unwrap();
            assert_eq!(carousel.current_index(), start);
            carousel.prev().unwrap();
            carousel.next().unwrap();
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[test]
    fn test_cycle_closure() {
        let mut carousel = manual(7);
        carousel.go_to(3).unwrap();
        for _ in 0..7 {
            carousel.next().unwrap();
        }
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_goto_out_of_range_leaves_index() {
        let mut carousel = manual(3);
        carousel.go_to(1).unwrap();
        assert_eq!(
            carousel.go_to(3),
            Err(CarouselError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(Vec::new(), &config(true, 5000)).unwrap();
        assert_eq!(carousel.state(), CarouselState::Idle);
        carousel.next().unwrap();
        carousel.prev().unwrap();
        assert!(carousel.go_to(0).is_err());
        carousel.resume().unwrap();
        assert_eq!(carousel.tick(Duration::from_secs(60)).unwrap(), 0);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.current_slide().is_none());
        assert_eq!(carousel.state(), CarouselState::Idle);
    }

    #[test]
    fn test_single_slide_stays_idle() {
        let mut carousel = Carousel::new(slides(1), &config(true, 5000)).unwrap();
        assert_eq!(carousel.state(), CarouselState::Idle);
        carousel.resume().unwrap();
        assert_eq!(carousel.tick(Duration::from_secs(3600)).unwrap(), 0);
        carousel.next().unwrap();
        carousel.prev().unwrap();
        carousel.go_to(0).unwrap();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.state(), CarouselState::Idle);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = Carousel::new(slides(3), &config(true, 0)).unwrap_err();
        assert_eq!(err, CarouselError::InvalidInterval(0));
    }

    #[test]
    fn test_auto_advance_runs_on_interval() {
        let mut carousel = Carousel::new(slides(3), &config(true, 1000)).unwrap();
        assert!(carousel.is_running());
        assert_eq!(carousel.tick(Duration::from_millis(999)).unwrap(), 0);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.tick(Duration::from_millis(1)).unwrap(), 1);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.tick(Duration::from_millis(2000)).unwrap(), 2);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_long_stall_advances_by_remainder() {
        let mut carousel = Carousel::new(slides(3), &config(true, 1)).unwrap();
        carousel.go_to(1).unwrap();
        // 200_000_000 fires, 200_000_000 % 3 == 2
        assert_eq!(carousel.tick(Duration::from_secs(200_000)).unwrap(), 200_000_000);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_running());
    }

    #[test]
    fn test_auto_play_disabled_never_starts() {
        let mut carousel = Carousel::new(slides(3), &config(false, 1000)).unwrap();
        assert_eq!(carousel.state(), CarouselState::Idle);
        carousel.resume().unwrap();
        assert_eq!(carousel.state(), CarouselState::Idle);
        assert_eq!(carousel.tick(Duration::from_secs(10)).unwrap(), 0);
    }

    #[test]
    fn test_pause_stops_advances() {
        let mut carousel = Carousel::new(slides(3), &config(true, 1000)).unwrap();
        carousel.tick(Duration::from_millis(600)).unwrap();
        carousel.pause().unwrap();
        carousel.pause().unwrap();
        assert_eq!(carousel.state(), CarouselState::Idle);
        assert_eq!(carousel.tick(Duration::from_secs(30)).unwrap(), 0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_resume_fires_within_one_interval() {
        let mut carousel = Carousel::new(slides(3), &config(true, 1000)).unwrap();
        carousel.tick(Duration::from_millis(900)).unwrap();
        carousel.pause().unwrap();
        carousel.resume().unwrap();
        assert!(carousel.is_running());
        // the interval restarts on resume
        assert_eq!(carousel.tick(Duration::from_millis(500)).unwrap(), 0);
        assert_eq!(carousel.tick(Duration::from_millis(500)).unwrap(), 1);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_resume_while_running_keeps_timer() {
        let mut carousel = Carousel::new(slides(3), &config(true, 1000)).unwrap();
        carousel.tick(Duration::from_millis(700)).unwrap();
        carousel.resume().unwrap();
        assert_eq!(carousel.tick(Duration::from_millis(300)).unwrap(), 1);
    }

    #[test]
    fn test_manual_navigation_keeps_state() {
        let mut carousel = Carousel::new(slides(3), &config(true, 1000)).unwrap();
        carousel.go_to(2).unwrap();
        carousel.prev().unwrap();
        assert!(carousel.is_running());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_operations_after_teardown_rejected() {
        let mut carousel = Carousel::new(slides(3), &config(true, 1000)).unwrap();
        carousel.go_to(1).unwrap();
        carousel.teardown().unwrap();
        assert_eq!(carousel.state(), CarouselState::TornDown);
        assert_eq!(carousel.next(), Err(CarouselError::UseAfterTeardown));
        assert_eq!(carousel.prev(), Err(CarouselError::UseAfterTeardown));
        assert_eq!(carousel.go_to(0), Err(CarouselError::UseAfterTeardown));
        assert_eq!(carousel.resume(), Err(CarouselError::UseAfterTeardown));
        assert_eq!(carousel.pause(), Err(CarouselError::UseAfterTeardown));
        assert_eq!(carousel.teardown(), Err(CarouselError::UseAfterTeardown));
        assert_eq!(
            carousel.tick(Duration::from_secs(5)),
            Err(CarouselError::UseAfterTeardown)
        );
        assert_eq!(carousel.current_index(), 1);
    }
}

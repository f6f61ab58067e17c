//! Carousel configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! TOML file, then command-line overrides applied by the binary.
//!
//! ```toml
//! auto_play = true
//! interval_ms = 5000
//! slides = "my-slides.toml"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::constants::*;
use crate::error::CarouselError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Advance automatically while the pointer is not over the carousel
    pub auto_play: bool,

    /// Time each slide stays up before auto-advancing
    pub interval_ms: u64,

    /// Optional TOML file with `[[slides]]` tables replacing the built-in dataset
    pub slides: Option<PathBuf>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_play: DEFAULT_AUTO_PLAY,
            interval_ms: DEFAULT_INTERVAL_MS,
            slides: None,
        }
    }
}

impl CarouselConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        // Relative slide paths are resolved against the config file's directory
        if let Some(slides) = config.slides.take() {
            let resolved = match path.parent() {
                Some(dir) if slides.is_relative() => dir.join(slides),
                _ => slides,
            };
            config.slides = Some(resolved);
        }

        debug!(?config, path = %path.display(), "Loaded carousel config");
        Ok(config)
    }

    /// The auto-advance period, rejecting a zero interval.
    pub fn interval(&self) -> std::result::Result<Duration, CarouselError> {
        if self.interval_ms == 0 {
            return Err(CarouselError::InvalidInterval(self.interval_ms));
        }
        Ok(Duration::from_millis(self.interval_ms))
    }
}

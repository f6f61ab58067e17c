use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::portfolio::PORTFOLIO;
use crate::slide::Slide;

/// Anything that can hand the carousel an ordered, finite list of slides.
pub trait SlideProvider {
    fn load(&self) -> Result<Vec<Slide>>;
}

/// The built-in portfolio topics.
#[derive(Debug, Default, Clone, Copy)]
pub struct PortfolioSlides;

impl SlideProvider for PortfolioSlides {
    fn load(&self) -> Result<Vec<Slide>> {
        Ok(PORTFOLIO
            .iter()
            .map(|(title, content)| Slide::new(*title, *content))
            .collect())
    }
}

/// Slides read from `[[slides]]` tables of a TOML file.
#[derive(Debug, Clone)]
pub struct TomlSlides {
    path: PathBuf,
}

#[derive(Deserialize)]
struct SlideDeck {
    #[serde(default)]
    slides: Vec<Slide>,
}

impl TomlSlides {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SlideProvider for TomlSlides {
    fn load(&self) -> Result<Vec<Slide>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read slides from {}", self.path.display()))?;
        let deck: SlideDeck = toml::from_str(&content)
            .with_context(|| format!("Failed to parse slides in {}", self.path.display()))?;

        if deck.slides.is_empty() {
            warn!(path = %self.path.display(), "Slide file contains no slides");
        } else {
            info!(path = %self.path.display(), count = deck.slides.len(), "Loaded slides");
        }
        Ok(deck.slides)
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use carousel::constants::*;
use carousel::engine;
use carousel::provider::{PortfolioSlides, SlideProvider, TomlSlides};
use carousel::script::parse_script;
use carousel::terminal::TerminalEngine;
#[cfg(feature = "window")]
use carousel::window::WindowEngine;
use carousel::{Carousel, CarouselConfig};

#[derive(Parser)]
#[command(name = "carousel")]
#[command(about = "Rotating portfolio slide carousel")]
struct Args {
    /// TOML config file (auto_play, interval_ms, slides)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// TOML file with [[slides]] tables instead of the built-in portfolio
    #[arg(long)]
    slides: Option<PathBuf>,

    /// Time each slide is shown before auto-advancing
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Disable auto-advance
    #[arg(long)]
    no_auto_play: bool,

    /// How long the terminal show runs
    #[arg(long, default_value_t = DEFAULT_RUN_SECONDS)]
    duration_secs: f32,

    /// Run frames back to back instead of in real time
    #[arg(long)]
    fast: bool,

    /// Scripted inputs, e.g. "2.5:next,4:hover,9:leave,12:goto=3"
    #[arg(long)]
    script: Option<String>,

    /// Open a window instead of printing to the terminal
    #[cfg(feature = "window")]
    #[arg(long)]
    window: bool,

    /// Log at debug level
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => CarouselConfig::load(path)?,
        None => CarouselConfig::default(),
    };
    if let Some(interval_ms) = args.interval_ms {
        config.interval_ms = interval_ms;
    }
    if args.no_auto_play {
        config.auto_play = false;
    }
    if let Some(slides) = &args.slides {
        config.slides = Some(slides.clone());
    }

    let slides = match &config.slides {
        Some(path) => TomlSlides::new(path).load()?,
        None => PortfolioSlides.load()?,
    };

    let run_length = Duration::try_from_secs_f32(args.duration_secs)
        .context("--duration-secs must be a non-negative number")?;
    let script = match &args.script {
        Some(spec) => parse_script(spec)?,
        None => Vec::new(),
    };

    let mut carousel = Carousel::new(slides, &config).context("Invalid carousel configuration")?;

    #[cfg(feature = "window")]
    if args.window {
        let mut window = WindowEngine::open(carousel.len());
        return engine::run(&mut window, &mut carousel);
    }

    info!(duration_secs = args.duration_secs, fast = args.fast, "Starting terminal show");
    let mut terminal = TerminalEngine::new(
        std::io::stdout(),
        Duration::from_secs_f32(FRAME_TIME),
        run_length,
    )
    .realtime(!args.fast)
    .with_script(script);
    engine::run(&mut terminal, &mut carousel)
}

//! Rotating slide carousel for a portfolio page.
//!
//! A [`Carousel`] cycles through a fixed list of [`Slide`]s on a timer, with
//! previous/next/jump controls and pause-on-hover. Display surfaces implement
//! [`engine::Engine`] and drive it through [`engine::run`].

pub mod carousel;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod portfolio;
pub mod provider;
pub mod script;
pub mod slide;
pub mod state;
pub mod terminal;
pub mod timer;
#[cfg(feature = "window")]
pub mod window;

pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use error::CarouselError;
pub use slide::Slide;
pub use state::CarouselState;

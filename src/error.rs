use thiserror::Error;

/// Caller-usage errors reported by [`crate::Carousel`].
///
/// None of these leave the carousel in a changed state: a rejected operation
/// is a no-op that tells the caller why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide index {index} is out of range for {len} slide(s)")]
    InvalidIndex { index: usize, len: usize },

    #[error("auto-advance interval must be positive, got {0} ms")]
    InvalidInterval(u64),

    #[error("carousel has been torn down")]
    UseAfterTeardown,
}

pub type Result<T> = std::result::Result<T, CarouselError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselState {
    Idle,     // No timer: paused, auto-play off, or fewer than two slides
    Running,  // Timer active, auto-advancing
    TornDown, // Released; no further transitions
}

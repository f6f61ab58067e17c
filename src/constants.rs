pub const DEFAULT_AUTO_PLAY: bool = true;
pub const DEFAULT_INTERVAL_MS: u64 = 5000;     // Time each slide is shown before auto-advancing

pub const FPS: u32 = 60;                       // Frames per second of the host loop
pub const FRAME_TIME: f32 = 1.0 / FPS as f32;  // Time per frame (seconds)

pub const DEFAULT_RUN_SECONDS: f32 = 30.0;     // How long the terminal host plays before tearing down

pub const RENDER_WIDTH: i32 = 1280;            // Window host width
pub const RENDER_HEIGHT: i32 = 720;            // Window host height
pub const TITLE_FONT_SIZE: i32 = 36;
pub const CONTENT_FONT_SIZE: i32 = 22;

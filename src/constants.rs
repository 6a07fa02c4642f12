pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 5000; // Automatic advance period (milliseconds)
pub const DEFAULT_EASE_MS: u64 = 400;          // Track easing duration, 0 jumps directly (milliseconds)

pub const DEFAULT_SLIDE_WIDTH: i32 = 960;      // Viewport / slide frame width
pub const DEFAULT_SLIDE_HEIGHT: i32 = 540;     // Viewport / slide frame height
pub const FPS: u32 = 60;                       // Target frames per second

pub const WINDOW_MARGIN: i32 = 80;             // Space around the viewport for arrows and dots
pub const ARROW_SIZE: f32 = 48.0;              // Side of the square arrow hit box
pub const DOT_RADIUS: f32 = 7.0;               // Indicator dot radius
pub const DOT_SPACING: f32 = 26.0;             // Distance between dot centers

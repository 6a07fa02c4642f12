use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod engine;
mod render;
mod texture_loader;

use carousel::CarouselConfig;
use carousel::constants::*;

use crate::engine::CarouselEngine;
use crate::render::{Layout, SlideImage};
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation, shuffle_paths};

/// Image carousel with previous/next arrows, indicator dots and autoplay.
#[derive(Parser, Debug)]
#[command(name = "carousel", version, about)]
struct Args {
    /// Directory containing the slide images
    dir: PathBuf,

    /// Automatic advance period in milliseconds
    #[arg(long, default_value_t = DEFAULT_AUTO_ADVANCE_MS)]
    interval_ms: u64,

    /// Slide (viewport) width in pixels
    #[arg(long, default_value_t = DEFAULT_SLIDE_WIDTH)]
    width: i32,

    /// Slide (viewport) height in pixels
    #[arg(long, default_value_t = DEFAULT_SLIDE_HEIGHT)]
    height: i32,

    /// Index of the slide shown first
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Randomize slide order
    #[arg(long)]
    shuffle: bool,

    /// Seed for --shuffle
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Start with autoplay paused (Space toggles it)
    #[arg(long)]
    no_autoplay: bool,

    /// Restart the autoplay period after each manual move
    #[arg(long)]
    reset_on_interaction: bool,

    /// Track easing duration in milliseconds, 0 to jump
    #[arg(long, default_value_t = DEFAULT_EASE_MS)]
    ease_ms: u64,

    #[arg(long, default_value_t = FPS)]
    fps: u32,
}

impl Args {
    fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig {
            auto_advance_interval: Duration::from_millis(self.interval_ms),
            autoplay: !self.no_autoplay,
            reset_timer_on_interaction: self.reset_on_interaction,
            initial_index: self.start,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if args.width <= 0 || args.height <= 0 {
        bail!("slide size must be positive, got {}x{}", args.width, args.height);
    }
    let config = args.carousel_config();
    config.validate()?;

    let mut paths = load_sorted_image_paths(&args.dir)?;
    if args.shuffle {
        shuffle_paths(&mut paths, args.seed);
    }
    info!(dir = %args.dir.display(), images = paths.len(), "found images");

    let (window_width, window_height) = Layout::window_size(args.width, args.height);
    let (mut rl, thread) = raylib::init()
        .size(window_width, window_height)
        .title("Carousel")
        .vsync()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(SlideImage::new(texture, args.width, args.height)),
            Err(e) => warn!(path = %path.display(), "skipping image: {:#}", e),
        }
    }
    if slides.is_empty() {
        bail!("none of the images in {} could be loaded", args.dir.display());
    }

    let layout = Layout::new(args.width, args.height, slides.len());
    let mut engine = CarouselEngine::new(slides, layout, Duration::from_millis(args.ease_ms), &config)?;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        engine.render_frame(dt, &mut rl, &thread);
    }

    Ok(())
}

use thiserror::Error;

/// Errors raised while building a carousel. Transitions themselves never fail.
#[derive(Debug, Error, PartialEq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    NoSlides,

    #[error("found {indicators} indicators for {slides} slides")]
    IndicatorCountMismatch { slides: usize, indicators: usize },

    #[error("slide width must be a positive number, got {0}")]
    InvalidSlideWidth(f32),

    #[error("initial slide {index} does not exist ({count} slides)")]
    InitialIndexOutOfRange { index: usize, count: usize },

    #[error("auto-advance interval must be greater than zero")]
    ZeroInterval,
}

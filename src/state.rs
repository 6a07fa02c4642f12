use crate::error::CarouselError;
use crate::slide::{Indicator, Slide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Visibility of the previous / next arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triggers {
    pub previous: Visibility,
    pub next: Visibility,
}

/// Arrow visibility for a carousel of `count` slides showing `target`.
///
/// A single slide has nowhere to go, so both arrows are hidden.
pub fn trigger_visibility(target: usize, count: usize) -> Triggers {
    use Visibility::*;

    if count <= 1 {
        Triggers { previous: Hidden, next: Hidden }
    } else if target == 0 {
        Triggers { previous: Hidden, next: Shown }
    } else if target == count - 1 {
        Triggers { previous: Shown, next: Hidden }
    } else {
        Triggers { previous: Shown, next: Shown }
    }
}

/// Outcome of an applied transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub track_offset: f32,
    pub triggers: Triggers,
}

/// Position of the carousel. Only `current_index` is stored; whether a slide or
/// an indicator is current is derived from it.
#[derive(Debug, Clone)]
pub struct CarouselState {
    slides: Vec<Slide>,
    indicators: Vec<Indicator>,
    slide_width: f32,
    current_index: usize,
    track_offset: f32,
    triggers: Triggers,
}

impl CarouselState {
    pub fn new(
        slide_count: usize,
        indicator_count: usize,
        slide_width: f32,
        initial_index: usize,
    ) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }
        if indicator_count != slide_count {
            return Err(CarouselError::IndicatorCountMismatch {
                slides: slide_count,
                indicators: indicator_count,
            });
        }
        if !slide_width.is_finite() || slide_width <= 0.0 {
            return Err(CarouselError::InvalidSlideWidth(slide_width));
        }
        if initial_index >= slide_count {
            return Err(CarouselError::InitialIndexOutOfRange {
                index: initial_index,
                count: slide_count,
            });
        }

        let slides: Vec<Slide> = (0..slide_count).map(|i| Slide::new(i, slide_width)).collect();
        let indicators = (0..indicator_count).map(Indicator::new).collect();
        let track_offset = -slides[initial_index].offset();

        Ok(Self {
            slides,
            indicators,
            slide_width,
            current_index: initial_index,
            track_offset,
            triggers: trigger_visibility(initial_index, slide_count),
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Translation applied to the whole track, `-offset(current)`.
    pub fn track_offset(&self) -> f32 {
        self.track_offset
    }

    pub fn triggers(&self) -> Triggers {
        self.triggers
    }

    pub fn offset(&self, index: usize) -> Option<f32> {
        self.slides.get(index).map(Slide::offset)
    }

    pub fn is_slide_current(&self, index: usize) -> bool {
        index == self.current_index
    }

    pub fn is_indicator_current(&self, index: usize) -> bool {
        index == self.current_index && index < self.indicators.len()
    }

    /// Moves to `target`. Returns `None` and changes nothing when the target
    /// slide does not exist.
    pub fn transition_to(&mut self, target: usize) -> Option<Transition> {
        let slide = self.slides.get(target)?;

        let from = self.current_index;
        self.track_offset = -slide.offset();
        self.triggers = trigger_visibility(target, self.slides.len());
        self.current_index = target;

        Some(Transition {
            from,
            to: target,
            track_offset: self.track_offset,
            triggers: self.triggers,
        })
    }
}

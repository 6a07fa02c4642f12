/// One slide of the track. Its offset is fixed when the carousel is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    index: usize,
    offset: f32,
}

impl Slide {
    pub fn new(index: usize, slide_width: f32) -> Self {
        Self {
            index,
            offset: index as f32 * slide_width,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Horizontal distance from the start of the track.
    pub fn offset(&self) -> f32 {
        self.offset
    }
}

/// Dot matching the slide with the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    index: usize,
}

impl Indicator {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

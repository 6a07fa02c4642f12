use crate::state::Triggers;

/// Target of the controller's render step.
pub trait Surface {
    fn set_track_offset(&mut self, offset: f32);
    fn set_slide_current(&mut self, index: usize, current: bool);
    fn set_indicator_current(&mut self, index: usize, current: bool);
    fn set_triggers(&mut self, triggers: Triggers);

    /// Called once after every complete projection.
    fn finish(&mut self) {}
}

/// Surface that only remembers what was projected onto it.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub track_offset: f32,
    pub slides: Vec<bool>,
    pub indicators: Vec<bool>,
    pub triggers: Option<Triggers>,
    pub renders: usize,
}

impl RecordingSurface {
    pub fn current_slides(&self) -> Vec<usize> {
        marked(&self.slides)
    }

    pub fn current_indicators(&self) -> Vec<usize> {
        marked(&self.indicators)
    }
}

fn marked(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, current)| current.then_some(i))
        .collect()
}

fn set_flag(flags: &mut Vec<bool>, index: usize, value: bool) {
    if flags.len() <= index {
        flags.resize(index + 1, false);
    }
    flags[index] = value;
}

impl Surface for RecordingSurface {
    fn set_track_offset(&mut self, offset: f32) {
        self.track_offset = offset;
    }

    fn set_slide_current(&mut self, index: usize, current: bool) {
        set_flag(&mut self.slides, index, current);
    }

    fn set_indicator_current(&mut self, index: usize, current: bool) {
        set_flag(&mut self.indicators, index, current);
    }

    fn set_triggers(&mut self, triggers: Triggers) {
        self.triggers = Some(triggers);
    }

    fn finish(&mut self) {
        self.renders += 1;
    }
}

use std::time::Duration;

use tracing::{debug, trace};

use crate::auto_advance::AutoAdvance;
use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::state::{CarouselState, Transition};
use crate::surface::Surface;

/// Something that asks the carousel to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Previous,
    Next,
    Indicator(usize),
    AutoAdvance,
}

impl CarouselEvent {
    /// Target slide for this event, or `None` when there is nowhere to go.
    ///
    /// Manual previous/next stop at the ends of the track, the automatic
    /// advance wraps back to the first slide.
    pub fn resolve(self, current: usize, count: usize) -> Option<usize> {
        match self {
            CarouselEvent::Previous => current.checked_sub(1),
            CarouselEvent::Next => Some(current + 1).filter(|&next| next < count),
            CarouselEvent::Indicator(k) => Some(k),
            CarouselEvent::AutoAdvance => (count > 0).then(|| (current + 1) % count),
        }
    }

    pub fn is_manual(self) -> bool {
        !matches!(self, CarouselEvent::AutoAdvance)
    }
}

pub struct Controller {
    state: CarouselState,
    timer: AutoAdvance,
    reset_timer_on_interaction: bool,
}

impl Controller {
    pub fn new(
        slide_count: usize,
        indicator_count: usize,
        slide_width: f32,
        config: &CarouselConfig,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        let state = CarouselState::new(
            slide_count,
            indicator_count,
            slide_width,
            config.initial_index,
        )?;
        let timer = if config.autoplay {
            AutoAdvance::new(config.auto_advance_interval)
        } else {
            AutoAdvance::paused(config.auto_advance_interval)
        };

        Ok(Self {
            state,
            timer,
            reset_timer_on_interaction: config.reset_timer_on_interaction,
        })
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn timer(&self) -> &AutoAdvance {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut AutoAdvance {
        &mut self.timer
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    // The named handlers below only move the state. Use `dispatch` to also
    // render the result onto a surface.

    pub fn previous(&mut self) -> Option<Transition> {
        self.apply(CarouselEvent::Previous)
    }

    pub fn next(&mut self) -> Option<Transition> {
        self.apply(CarouselEvent::Next)
    }

    pub fn select_indicator(&mut self, index: usize) -> Option<Transition> {
        self.apply(CarouselEvent::Indicator(index))
    }

    pub fn auto_advance(&mut self) -> Option<Transition> {
        self.apply(CarouselEvent::AutoAdvance)
    }

    /// Resolves the event and moves the state, without touching any surface.
    /// Callers that skip `dispatch` must call `render` themselves.
    pub fn apply(&mut self, event: CarouselEvent) -> Option<Transition> {
        let Some(target) = event.resolve(self.state.current_index(), self.state.len()) else {
            trace!(?event, current = self.state.current_index(), "no slide to move to");
            return None;
        };
        let Some(transition) = self.state.transition_to(target) else {
            trace!(?event, target, "target slide does not exist");
            return None;
        };

        if event.is_manual() && self.reset_timer_on_interaction {
            self.timer.reset();
        }
        debug!(
            ?event,
            from = transition.from,
            to = transition.to,
            offset = transition.track_offset,
            "transition"
        );
        Some(transition)
    }

    /// Applies the event and, when it moved the carousel, renders once.
    pub fn dispatch<S: Surface + ?Sized>(
        &mut self,
        event: CarouselEvent,
        surface: &mut S,
    ) -> Option<Transition> {
        let transition = self.apply(event)?;
        self.render(surface);
        Some(transition)
    }

    /// Dispatches events strictly in the given order.
    pub fn dispatch_all<S, I>(&mut self, events: I, surface: &mut S) -> Vec<Transition>
    where
        S: Surface + ?Sized,
        I: IntoIterator<Item = CarouselEvent>,
    {
        events
            .into_iter()
            .filter_map(|event| self.dispatch(event, surface))
            .collect()
    }

    /// Advances the timer by `dt` and dispatches one automatic advance per
    /// completed period.
    pub fn tick<S: Surface + ?Sized>(&mut self, dt: Duration, surface: &mut S) -> Vec<Transition> {
        let fired = self.timer.tick(dt);
        (0..fired)
            .filter_map(|_| self.dispatch(CarouselEvent::AutoAdvance, surface))
            .collect()
    }

    /// Projects the full state onto `surface`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_track_offset(self.state.track_offset());
        for slide in self.state.slides() {
            surface.set_slide_current(slide.index(), self.state.is_slide_current(slide.index()));
        }
        for indicator in self.state.indicators() {
            surface.set_indicator_current(
                indicator.index(),
                self.state.is_indicator_current(indicator.index()),
            );
        }
        surface.set_triggers(self.state.triggers());
        surface.finish();
    }
}

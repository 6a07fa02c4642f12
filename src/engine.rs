use std::time::Duration;

use anyhow::{Context, Result};
use carousel::slide::Slide;
use carousel::{CarouselConfig, CarouselEvent, Controller, TimerState};
use raylib::prelude::*;
use tracing::info;

use crate::render::{Layout, RaylibSurface, SlideImage};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Carousel(CarouselEvent),
    ToggleAutoplay,
}

pub fn key_action(key: KeyboardKey) -> Option<KeyAction> {
    use KeyboardKey::*;

    let event = match key {
        KEY_LEFT => CarouselEvent::Previous,
        KEY_RIGHT => CarouselEvent::Next,
        KEY_ONE => CarouselEvent::Indicator(0),
        KEY_TWO => CarouselEvent::Indicator(1),
        KEY_THREE => CarouselEvent::Indicator(2),
        KEY_FOUR => CarouselEvent::Indicator(3),
        KEY_FIVE => CarouselEvent::Indicator(4),
        KEY_SIX => CarouselEvent::Indicator(5),
        KEY_SEVEN => CarouselEvent::Indicator(6),
        KEY_EIGHT => CarouselEvent::Indicator(7),
        KEY_NINE => CarouselEvent::Indicator(8),
        KEY_SPACE => return Some(KeyAction::ToggleAutoplay),
        _ => return None,
    };
    Some(KeyAction::Carousel(event))
}

pub struct CarouselEngine {
    controller: Controller,
    surface: RaylibSurface,
}

impl CarouselEngine {
    pub fn new(
        slides: Vec<SlideImage>,
        layout: Layout,
        ease: Duration,
        config: &CarouselConfig,
    ) -> Result<Self> {
        // Uniform width, measured on the first slide
        let slide_width = slides.first().map(SlideImage::frame_width).unwrap_or(0.0);
        let controller = Controller::new(slides.len(), layout.dots.len(), slide_width, config)
            .context("failed to build the carousel")?;

        let offsets = controller.state().slides().iter().map(Slide::offset).collect();
        let mut surface = RaylibSurface::new(slides, offsets, layout, ease.as_secs_f32());
        controller.render(&mut surface);
        surface.snap();

        info!(
            slides = controller.state().len(),
            current = controller.current_index(),
            interval_ms = controller.timer().period().as_millis() as u64,
            autoplay = controller.timer().state() == TimerState::Running,
            "carousel ready"
        );

        Ok(Self { controller, surface })
    }

    /// Input events of this frame, in the order raylib queued them.
    fn collect_events(&mut self, rl: &mut RaylibHandle) -> Vec<CarouselEvent> {
        let mut events = Vec::new();

        while let Some(key) = rl.get_key_pressed() {
            match key_action(key) {
                Some(KeyAction::Carousel(event)) => events.push(event),
                Some(KeyAction::ToggleAutoplay) => {
                    let state = self.controller.timer_mut().toggle();
                    info!(?state, "autoplay toggled");
                }
                None => {}
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = rl.get_mouse_position();
            let triggers = self.controller.state().triggers();
            if let Some(event) = self.surface.layout().hit_test(point, triggers) {
                events.push(event);
            }
        }

        events
    }

    pub fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let events = self.collect_events(rl);
        self.controller.dispatch_all(events, &mut self.surface);
        self.controller
            .tick(Duration::try_from_secs_f32(dt).unwrap_or_default(), &mut self.surface);
        self.surface.update(dt);

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);
        self.surface.draw(&mut d);

        if self.controller.timer().state() == TimerState::Paused {
            d.draw_text("paused", 12, 12, 20, Color::GRAY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_move_relative() {
        assert_eq!(
            key_action(KeyboardKey::KEY_LEFT),
            Some(KeyAction::Carousel(CarouselEvent::Previous))
        );
        assert_eq!(
            key_action(KeyboardKey::KEY_RIGHT),
            Some(KeyAction::Carousel(CarouselEvent::Next))
        );
    }

    #[test]
    fn number_keys_select_indicators() {
        assert_eq!(
            key_action(KeyboardKey::KEY_ONE),
            Some(KeyAction::Carousel(CarouselEvent::Indicator(0)))
        );
        assert_eq!(
            key_action(KeyboardKey::KEY_NINE),
            Some(KeyAction::Carousel(CarouselEvent::Indicator(8)))
        );
    }

    #[test]
    fn space_toggles_autoplay() {
        assert_eq!(key_action(KeyboardKey::KEY_SPACE), Some(KeyAction::ToggleAutoplay));
        assert_eq!(key_action(KeyboardKey::KEY_A), None);
    }
}

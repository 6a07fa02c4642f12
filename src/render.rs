use carousel::constants::*;
use carousel::{CarouselEvent, Surface, Triggers, Visibility};
use raylib::prelude::*;

/// One loaded image, scaled to fit its slide frame.
pub struct SlideImage {
    texture: Texture2D,
    frame_width: f32,
    frame_height: f32,
    scale: f32,
}

impl SlideImage {
    pub fn new(texture: Texture2D, frame_width: i32, frame_height: i32) -> Self {
        let frame_width = frame_width as f32;
        let frame_height = frame_height as f32;
        let scale = (frame_width / texture.width() as f32).min(frame_height / texture.height() as f32);

        Self {
            texture,
            frame_width,
            frame_height,
            scale,
        }
    }

    pub fn frame_width(&self) -> f32 {
        self.frame_width
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, frame_x: f32, frame_y: f32, current: bool) {
        let width = self.texture.width() as f32 * self.scale;
        let height = self.texture.height() as f32 * self.scale;

        // Centered in the frame
        let position = Vector2::new(
            frame_x + (self.frame_width - width) * 0.5,
            frame_y + (self.frame_height - height) * 0.5,
        );
        let tint = if current { Color::WHITE } else { Color::new(255, 255, 255, 140) };

        d.draw_texture_ex(&self.texture, position, 0.0, self.scale, tint);
    }
}

/// Where the viewport, arrows and dots sit in the window.
pub struct Layout {
    pub viewport: Rectangle,
    pub previous: Rectangle,
    pub next: Rectangle,
    pub dots: Vec<Vector2>,
}

impl Layout {
    pub fn new(slide_width: i32, slide_height: i32, slide_count: usize) -> Self {
        let margin = WINDOW_MARGIN as f32;
        let viewport = Rectangle::new(margin, margin, slide_width as f32, slide_height as f32);

        let arrow_x_pad = (margin - ARROW_SIZE) * 0.5;
        let arrow_y = viewport.y + (viewport.height - ARROW_SIZE) * 0.5;
        let previous = Rectangle::new(arrow_x_pad, arrow_y, ARROW_SIZE, ARROW_SIZE);
        let next = Rectangle::new(
            viewport.x + viewport.width + arrow_x_pad,
            arrow_y,
            ARROW_SIZE,
            ARROW_SIZE,
        );

        // Many slides squeeze the dots so the row stays under the viewport
        let spacing = DOT_SPACING.min(viewport.width / slide_count.max(1) as f32);
        let dots_width = slide_count.saturating_sub(1) as f32 * spacing;
        let first_dot_x = viewport.x + (viewport.width - dots_width) * 0.5;
        let dot_y = viewport.y + viewport.height + margin * 0.5;
        let dots = (0..slide_count)
            .map(|i| Vector2::new(first_dot_x + i as f32 * spacing, dot_y))
            .collect();

        Self {
            viewport,
            previous,
            next,
            dots,
        }
    }

    pub fn window_size(slide_width: i32, slide_height: i32) -> (i32, i32) {
        (slide_width + 2 * WINDOW_MARGIN, slide_height + 2 * WINDOW_MARGIN)
    }

    /// Event for a click at `point`. Hidden arrows do not react.
    pub fn hit_test(&self, point: Vector2, triggers: Triggers) -> Option<CarouselEvent> {
        if triggers.previous.is_shown() && self.previous.check_collision_point_rec(point) {
            return Some(CarouselEvent::Previous);
        }
        if triggers.next.is_shown() && self.next.check_collision_point_rec(point) {
            return Some(CarouselEvent::Next);
        }

        // Dots get a slightly larger hit area than they are drawn with
        let reach = (DOT_RADIUS * 1.8).powi(2);
        self.dots
            .iter()
            .position(|dot| (dot.x - point.x).powi(2) + (dot.y - point.y).powi(2) <= reach)
            .map(CarouselEvent::Indicator)
    }
}

struct TrackTween {
    tween: ease::Tween,
    elapsed: f32,
}

/// Raylib projection of the carousel. The logical offset is applied at once,
/// the drawn track eases toward it.
pub struct RaylibSurface {
    slides: Vec<SlideImage>,
    offsets: Vec<f32>,
    layout: Layout,

    current_slides: Vec<bool>,
    current_dots: Vec<bool>,
    triggers: Triggers,

    target_offset: f32,
    drawn_offset: f32,
    ease_duration: f32,
    tween: Option<TrackTween>,
}

impl RaylibSurface {
    /// `offsets` are the track positions fixed by the carousel state.
    pub fn new(slides: Vec<SlideImage>, offsets: Vec<f32>, layout: Layout, ease_duration: f32) -> Self {
        let count = slides.len();
        Self {
            slides,
            offsets,
            current_slides: vec![false; count],
            current_dots: vec![false; layout.dots.len()],
            layout,
            triggers: Triggers {
                previous: Visibility::Hidden,
                next: Visibility::Hidden,
            },
            target_offset: 0.0,
            drawn_offset: 0.0,
            ease_duration,
            tween: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Drops any running easing and draws the track at its logical position.
    pub fn snap(&mut self) {
        self.tween = None;
        self.drawn_offset = self.target_offset;
    }

    pub fn update(&mut self, dt: f32) {
        let Some(mut track) = self.tween.take() else {
            return;
        };

        track.elapsed += dt;
        if track.elapsed >= self.ease_duration {
            self.drawn_offset = self.target_offset;
        } else {
            self.drawn_offset = track.tween.apply(dt);
            self.tween = Some(track);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let viewport = self.layout.viewport;

        d.draw_rectangle_rec(viewport, Color::new(20, 20, 20, 255));
        {
            let mut clipped = d.begin_scissor_mode(
                viewport.x as i32,
                viewport.y as i32,
                viewport.width as i32,
                viewport.height as i32,
            );
            for (i, (slide, offset)) in self.slides.iter().zip(&self.offsets).enumerate() {
                let frame_x = viewport.x + offset + self.drawn_offset;
                if frame_x + slide.frame_width() < viewport.x || frame_x > viewport.x + viewport.width {
                    continue;
                }
                slide.draw(&mut clipped, frame_x, viewport.y, self.current_slides[i]);
            }
        }

        if self.triggers.previous.is_shown() {
            draw_arrow(d, self.layout.previous, "<");
        }
        if self.triggers.next.is_shown() {
            draw_arrow(d, self.layout.next, ">");
        }

        for (dot, &current) in self.layout.dots.iter().zip(&self.current_dots) {
            if current {
                d.draw_circle_v(*dot, DOT_RADIUS, Color::RAYWHITE);
            } else {
                d.draw_circle_lines(dot.x as i32, dot.y as i32, DOT_RADIUS, Color::GRAY);
            }
        }
    }
}

fn draw_arrow(d: &mut RaylibDrawHandle, area: Rectangle, glyph: &str) {
    let center = Vector2::new(area.x + area.width * 0.5, area.y + area.height * 0.5);
    let font_size = (area.height * 0.6) as i32;

    d.draw_circle_v(center, area.width * 0.5, Color::new(255, 255, 255, 40));
    d.draw_text(
        glyph,
        (center.x - font_size as f32 * 0.25) as i32,
        (center.y - font_size as f32 * 0.5) as i32,
        font_size,
        Color::RAYWHITE,
    );
}

impl Surface for RaylibSurface {
    fn set_track_offset(&mut self, offset: f32) {
        self.target_offset = offset;
        if self.ease_duration > 0.0 && (offset - self.drawn_offset).abs() > f32::EPSILON {
            self.tween = Some(TrackTween {
                tween: ease::Tween::new(ease::cubic_out, self.drawn_offset, offset, self.ease_duration),
                elapsed: 0.0,
            });
        } else {
            self.snap();
        }
    }

    fn set_slide_current(&mut self, index: usize, current: bool) {
        if let Some(flag) = self.current_slides.get_mut(index) {
            *flag = current;
        }
    }

    fn set_indicator_current(&mut self, index: usize, current: bool) {
        if let Some(flag) = self.current_dots.get_mut(index) {
            *flag = current;
        }
    }

    fn set_triggers(&mut self, triggers: Triggers) {
        self.triggers = triggers;
    }
}

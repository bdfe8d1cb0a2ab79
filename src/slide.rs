use raylib::prelude::*;
use crate::constants::*;
use crate::deck::Slide;
use crate::state::SlideState;

/// On-screen view of one slide. Slides rest one screen width to the left
/// (preceding) or right (upcoming) of the viewport and ease into place.
pub struct SlideView {
    slide: Slide,
    image: Option<Texture2D>,

    state: SlideState,
    offset: f32, // In screen widths, 0.0 is centred

    tween: Option<ease::Tween>,
    animation_timer: f32,
    pub is_animating: bool,
}

impl SlideView {
    pub fn new(slide: Slide, image: Option<Texture2D>) -> Self {
        Self {
            slide,
            image,
            state: SlideState::Upcoming,
            offset: SlideState::Upcoming.resting_offset(),
            tween: None,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    /// Starts easing towards the resting place of `state`. Snaps instead
    /// when `animate` is false.
    pub fn retarget(&mut self, state: SlideState, animate: bool) {
        if state == self.state {
            return;
        }
        self.state = state;
        let target = state.resting_offset();

        if animate {
            self.tween = Some(ease::Tween::new(ease::cubic_out, self.offset, target, TRANSITION_DURATION));
            self.animation_timer = 0.0;
            self.is_animating = true;
        } else {
            self.tween = None;
            self.offset = target;
            self.is_animating = false;
        }
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        if let Some(tween) = self.tween.as_mut() {
            self.offset = tween.apply(dt);
        }

        self.animation_timer += dt;
        if self.animation_timer >= TRANSITION_DURATION {
            self.is_animating = false;
            self.tween = None;
            self.offset = self.state.resting_offset();
        }
    }

    pub fn is_on_screen(&self) -> bool {
        self.offset.abs() < 1.0
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.is_on_screen() {
            return;
        }

        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;
        let left = screen_width * self.offset + SLIDE_MARGIN;
        let content_width = screen_width - SLIDE_MARGIN * 2.0;

        let mut y = SLIDE_MARGIN + 40.0;

        if let Some(title) = &self.slide.title {
            d.draw_text(title, left as i32, y as i32, TITLE_FONT_SIZE, Color::RAYWHITE);
            y += TITLE_FONT_SIZE as f32 * 1.6;
        }

        for line in &self.slide.body {
            d.draw_text(line, left as i32, y as i32, BODY_FONT_SIZE, Color::LIGHTGRAY);
            y += BODY_FONT_SIZE as f32 * 1.4;
        }

        if let Some(image) = &self.image {
            // Fit what is left of the slide, keeping some room for the chrome
            let room_height = screen_height - y - SLIDE_MARGIN * 2.0;
            if room_height <= 0.0 {
                return;
            }

            let tex_width = image.width() as f32;
            let tex_height = image.height() as f32;
            let scale = (content_width / tex_width).min(room_height / tex_height).min(1.0);

            let scaled_width = tex_width * scale;
            let scaled_height = tex_height * scale;
            let x = left + (content_width - scaled_width) * 0.5;

            d.draw_texture_pro(
                image,
                Rectangle::new(0.0, 0.0, tex_width, tex_height),
                Rectangle::new(x, y + 16.0, scaled_width, scaled_height),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }
    }
}

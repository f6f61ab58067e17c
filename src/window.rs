use anyhow::Result;
use raylib::core::text::measure_text;
use raylib::prelude::*;
use std::time::Duration;
use tracing::debug;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::engine::{Engine, Input};

const MARGIN: f32 = 60.0;
const BUTTON_WIDTH: f32 = 48.0;
const BUTTON_HEIGHT: f32 = 72.0;
const DOT_RADIUS: f32 = 8.0;
const DOT_SPACING: f32 = 28.0;

/// Screen regions of the carousel for a given window size.
#[derive(Debug, Clone)]
pub struct Layout {
    pub card: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
    pub dots: Vec<Vector2>,
}

impl Layout {
    pub fn compute(screen_width: f32, screen_height: f32, slide_count: usize) -> Self {
        let card = Rectangle::new(
            MARGIN,
            MARGIN,
            (screen_width - 2.0 * MARGIN).max(0.0),
            (screen_height - 2.5 * MARGIN).max(0.0),
        );
        let button_y = card.y + (card.height - BUTTON_HEIGHT) * 0.5;
        let prev_button = Rectangle::new(card.x + 8.0, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let next_button = Rectangle::new(
            card.x + card.width - BUTTON_WIDTH - 8.0,
            button_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        // Dots are centered under the card
        let dots_y = card.y + card.height + MARGIN * 0.5;
        let row_width = DOT_SPACING * slide_count.saturating_sub(1) as f32;
        let first_x = screen_width * 0.5 - row_width * 0.5;
        let dots = (0..slide_count)
            .map(|i| Vector2::new(first_x + DOT_SPACING * i as f32, dots_y))
            .collect();

        Self {
            card,
            prev_button,
            next_button,
            dots,
        }
    }

    /// Index of the dot under `point`, if any.
    pub fn dot_at(&self, point: Vector2) -> Option<usize> {
        self.dots.iter().position(|dot| {
            let dx = dot.x - point.x;
            let dy = dot.y - point.y;
            dx * dx + dy * dy <= DOT_RADIUS * DOT_RADIUS
        })
    }
}

/// Raylib window showing one slide at a time with arrows and dots.
///
/// The pointer over the slide card pauses auto-advance; leaving resumes it.
pub struct WindowEngine {
    rl: RaylibHandle,
    thread: RaylibThread,
    slide_count: usize,
    hovering: bool,
}

impl WindowEngine {
    pub fn open(slide_count: usize) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(RENDER_WIDTH, RENDER_HEIGHT)
            .title("Portfolio Carousel")
            .vsync()
            .resizable()
            .build();
        rl.set_target_fps(FPS);
        rl.set_trace_log(TraceLogLevel::LOG_ERROR);

        Self {
            rl,
            thread,
            slide_count,
            hovering: false,
        }
    }

    fn layout(&self) -> Layout {
        Layout::compute(
            self.rl.get_screen_width() as f32,
            self.rl.get_screen_height() as f32,
            self.slide_count,
        )
    }
}

impl Engine for WindowEngine {
    fn frame_time(&self) -> Duration {
        Duration::from_secs_f32(self.rl.get_frame_time().max(0.0))
    }

    fn poll_input(&mut self) -> Vec<Input> {
        if self.rl.window_should_close() {
            return vec![Input::Quit];
        }

        let layout = self.layout();
        let mouse = self.rl.get_mouse_position();
        let mut inputs = Vec::new();

        let hovering = layout.card.check_collision_point_rec(mouse);
        if hovering != self.hovering {
            self.hovering = hovering;
            inputs.push(if hovering { Input::HoverEnter } else { Input::HoverLeave });
        }

        if self.rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if layout.prev_button.check_collision_point_rec(mouse) {
                inputs.push(Input::Prev);
            } else if layout.next_button.check_collision_point_rec(mouse) {
                inputs.push(Input::Next);
            } else if let Some(index) = layout.dot_at(mouse) {
                inputs.push(Input::GoTo(index));
            }
        }

        if self.rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            inputs.push(Input::Next);
        }
        if self.rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            inputs.push(Input::Prev);
        }

        if !inputs.is_empty() {
            debug!(?inputs, "Window input");
        }
        inputs
    }

    fn render_frame(&mut self, carousel: &Carousel) -> Result<bool> {
        let layout = self.layout();
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);

        d.draw_rectangle_rec(layout.card, Color::new(28, 32, 44, 255));

        let Some(slide) = carousel.current_slide() else {
            d.draw_text("No slides", MARGIN as i32 + 20, MARGIN as i32 + 20, TITLE_FONT_SIZE, Color::GRAY);
            return Ok(true);
        };

        // Text sits between the two arrow buttons
        let text_x = (layout.prev_button.x + layout.prev_button.width + 24.0) as i32;
        let text_width = (layout.next_button.x - 24.0) as i32 - text_x;
        let mut y = (layout.card.y + 40.0) as i32;

        for line in wrap_to_width(slide.title(), TITLE_FONT_SIZE, text_width) {
            d.draw_text(&line, text_x, y, TITLE_FONT_SIZE, Color::WHITE);
            y += TITLE_FONT_SIZE + 6;
        }
        y += 20;
        for line in wrap_to_width(slide.content(), CONTENT_FONT_SIZE, text_width) {
            d.draw_text(&line, text_x, y, CONTENT_FONT_SIZE, Color::LIGHTGRAY);
            y += CONTENT_FONT_SIZE + 6;
        }

        if carousel.len() > 1 {
            for (button, label) in [(layout.prev_button, "<"), (layout.next_button, ">")] {
                d.draw_rectangle_rec(button, Color::new(60, 66, 84, 255));
                let label_x = button.x as i32 + (button.width as i32 - measure_text(label, TITLE_FONT_SIZE)) / 2;
                let label_y = button.y as i32 + (button.height as i32 - TITLE_FONT_SIZE) / 2;
                d.draw_text(label, label_x, label_y, TITLE_FONT_SIZE, Color::WHITE);
            }
        }

        for (i, dot) in layout.dots.iter().enumerate() {
            let color = if i == carousel.current_index() { Color::WHITE } else { Color::DARKGRAY };
            d.draw_circle(dot.x as i32, dot.y as i32, DOT_RADIUS, color);
        }

        if carousel.is_auto_play() && !carousel.is_running() && carousel.len() > 1 {
            d.draw_text("paused", (layout.card.x + layout.card.width) as i32 - 90, (layout.card.y + 12.0) as i32, 18, Color::GRAY);
        }

        Ok(true)
    }
}

/// Greedy word wrap measured in pixels with the default font.
fn wrap_to_width(text: &str, font_size: i32, max_width: i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() { word.to_string() } else { format!("{} {}", line, word) };
        if !line.is_empty() && measure_text(&candidate, font_size) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_buttons_inside_card() {
        let layout = Layout::compute(1280.0, 720.0, 13);
        assert!(layout.card.check_collision_point_rec(Vector2::new(
            layout.prev_button.x + 1.0,
            layout.prev_button.y + 1.0
        )));
        assert!(layout.next_button.x > layout.prev_button.x);
        assert_eq!(layout.dots.len(), 13);
    }

    #[test]
    fn test_dot_hit_testing() {
        let layout = Layout::compute(1280.0, 720.0, 3);
        let middle = layout.dots[1];
        assert_eq!(layout.dot_at(middle), Some(1));
        assert_eq!(layout.dot_at(Vector2::new(middle.x + DOT_SPACING * 0.5, middle.y)), None);
        assert_eq!(layout.dot_at(Vector2::new(0.0, 0.0)), None);
    }
}

//! Rendering the game state onto an abstract surface

use crate::{Config, GameState, Params};
use glam::Vec2;

/// RGBA colour, 0..=255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalised floats for GPU tints
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Drawing primitives supplied by the host
pub trait Surface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn debug_text(&mut self, text: &str, pos: Vec2);
}

/// A single recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect { pos: Vec2, size: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Text { text: String, pos: Vec2 },
}

/// Surface that records commands for later replay
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.cmds.iter()
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.cmds.push(DrawCmd::Rect { pos, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.cmds.push(DrawCmd::Circle {
            center,
            radius,
            color,
        });
    }

    fn debug_text(&mut self, text: &str, pos: Vec2) {
        self.cmds.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
        });
    }
}

/// Draw background, ball, paddles and the score line
pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, config: &Config, surface: &mut S) {
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(config.screen_width, config.screen_height),
        Color::BLACK,
    );

    surface.fill_circle(state.ball.pos, config.ball_radius, Color::WHITE);

    for paddle in [&state.left_paddle, &state.right_paddle] {
        surface.fill_rect(paddle.pos, config.paddle_size(), Color::WHITE);
    }

    surface.debug_text(
        &state.score_text(),
        Vec2::new(Params::SCORE_TEXT_X, Params::SCORE_TEXT_Y),
    );
}

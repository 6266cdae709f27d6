use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub window_title: String,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_step: f32,
    pub ai_step: f32,
    pub ball_radius: f32,
    pub ball_reset_speed: f32,
    pub ball_start_speed_min: f32,
    pub ball_start_speed_max: f32,
    /// Advance the ball a second time at the end of every update.
    /// On by default, which doubles the effective ball speed.
    pub double_advance: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            window_title: Params::WINDOW_TITLE.to_string(),
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_step: Params::PLAYER_STEP,
            ai_step: Params::AI_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_reset_speed: Params::BALL_RESET_SPEED,
            ball_start_speed_min: Params::BALL_START_SPEED_MIN,
            ball_start_speed_max: Params::BALL_START_SPEED_MAX,
            double_advance: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.screen_width - self.paddle_width,
        }
    }

    /// Lowest Y a paddle may reach before touching the bottom wall
    pub fn paddle_max_y(&self) -> f32 {
        self.screen_height - self.paddle_height
    }

    /// Clamp paddle Y (top edge) to the screen
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    /// Vertically centred paddle Y
    pub fn paddle_center_y(&self) -> f32 {
        self.paddle_max_y() / 2.0
    }

    /// Ball spawn point (screen centre)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_size(&self) -> Vec2 {
        Vec2::splat(self.ball_radius)
    }

    /// Logical resolution, independent of the outside window size
    pub fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        (self.screen_width as u32, self.screen_height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 0.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 630.0, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-10.0), 0.0);
        assert_eq!(config.clamp_paddle_y(1000.0), 410.0);
        assert_eq!(config.clamp_paddle_y(123.0), 123.0);
    }

    #[test]
    fn test_paddle_center_y() {
        let config = Config::new();
        assert_eq!(config.paddle_center_y(), 205.0);
    }

    #[test]
    fn test_layout_is_fixed() {
        let config = Config::new();
        assert_eq!(config.layout(1920, 1080), (640, 480));
        assert_eq!(config.layout(0, 0), (640, 480));
    }
}

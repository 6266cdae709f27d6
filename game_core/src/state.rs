use crate::{Config, GameRng, MovingRect, Score, Side};
use glam::Vec2;

/// The whole mutable world
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub ball: MovingRect,
    pub left_paddle: MovingRect,
    pub right_paddle: MovingRect,
    pub score: Score,
}

impl GameState {
    /// Start-up state: ball centred with a random velocity in
    /// `[min, max)` per axis, paddles against the top wall.
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        let vel = Vec2::new(
            rng.range(config.ball_start_speed_min, config.ball_start_speed_max),
            rng.range(config.ball_start_speed_min, config.ball_start_speed_max),
        );
        let ball = MovingRect::new(config.ball_spawn(), config.ball_size()).with_vel(vel);

        Self {
            ball,
            left_paddle: create_paddle(config, Side::Left, 0.0),
            right_paddle: create_paddle(config, Side::Right, 0.0),
            score: Score::new(),
        }
    }

    /// Ball and paddles centred, scores zeroed, velocity `(reset_speed, reset_speed)`
    pub fn reset(&mut self, config: &Config) {
        let speed = config.ball_reset_speed;
        self.ball.pos = config.ball_spawn();
        self.ball.vel = Vec2::splat(speed);
        self.left_paddle.pos.y = config.paddle_center_y();
        self.right_paddle.pos.y = config.paddle_center_y();
        self.score = Score::new();
        log::info!("game reset");
    }

    pub fn paddle(&self, side: Side) -> &MovingRect {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut MovingRect {
        match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        }
    }

    /// Text shown by the score overlay
    pub fn score_text(&self) -> String {
        format!(
            "Score Left: {} Score Right: {}",
            self.score.left, self.score.right
        )
    }
}

/// Helper to create a paddle at its fixed x
pub fn create_paddle(config: &Config, side: Side, y: f32) -> MovingRect {
    MovingRect::new(Vec2::new(config.paddle_x(side), y), config.paddle_size())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_matches_startup() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let state = GameState::new(&config, &mut rng);

        assert_eq!(state.ball.pos, Vec2::new(320.0, 240.0));
        assert!((1.0..3.0).contains(&state.ball.vel.x));
        assert!((1.0..3.0).contains(&state.ball.vel.y));
        assert_eq!(state.left_paddle.pos, Vec2::new(0.0, 0.0));
        assert_eq!(state.right_paddle.pos, Vec2::new(630.0, 0.0));
        assert_eq!(state.left_paddle.size(), Vec2::new(10.0, 70.0));
        assert_eq!(state.score, Score::new());
    }

    #[test]
    fn test_reset() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut state = GameState::new(&config, &mut rng);
        state.score.left = 4;
        state.score.right = 9;
        state.ball.pos = Vec2::new(17.0, 400.0);
        state.left_paddle.pos.y = 3.0;

        state.reset(&config);

        assert_eq!(state.score, Score::new(), "Scores should be zeroed");
        assert_eq!(state.left_paddle.pos.y, 205.0);
        assert_eq!(state.right_paddle.pos.y, 205.0);
        assert_eq!(state.left_paddle.pos.x, 0.0, "Paddle x is fixed");
        assert_eq!(state.right_paddle.pos.x, 630.0, "Paddle x is fixed");
        assert_eq!(state.ball.pos, Vec2::new(320.0, 240.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_score_text() {
        let config = Config::new();
        let mut state = GameState::new(&config, &mut GameRng::default());
        state.score.left = 3;
        state.score.right = 11;
        assert_eq!(state.score_text(), "Score Left: 3 Score Right: 11");
    }
}

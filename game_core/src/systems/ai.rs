use crate::{Config, GameState};

/// Right paddle chases the ball's y with its centre.
///
/// The two checks run back to back against the updated centre, so a ball
/// sitting near the centre makes the paddle jitter by one step.
pub fn move_ai_paddle(state: &mut GameState, config: &Config) {
    let ball_y = state.ball.pos.y;
    let half_height = config.paddle_height / 2.0;
    let paddle = &mut state.right_paddle;

    if ball_y < paddle.pos.y + half_height {
        paddle.pos.y = (paddle.pos.y - config.ai_step).max(0.0);
    }
    if ball_y > paddle.pos.y + half_height {
        paddle.pos.y = (paddle.pos.y + config.ai_step).min(config.paddle_max_y());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use glam::Vec2;

    fn setup_state() -> (GameState, Config) {
        let config = Config::new();
        let mut state = GameState::new(&config, &mut GameRng::default());
        state.reset(&config);
        (state, config)
    }

    #[test]
    fn test_ai_moves_up_towards_ball() {
        let (mut state, config) = setup_state();
        state.ball.pos = Vec2::new(320.0, 50.0);

        let mut last_y = state.right_paddle.pos.y;
        while state.right_paddle.pos.y + 35.0 > 50.0 {
            move_ai_paddle(&mut state, &config);
            assert!(state.right_paddle.pos.y < last_y, "Paddle should keep rising");
            last_y = state.right_paddle.pos.y;
        }
        assert!(state.right_paddle.pos.y >= 0.0);
    }

    #[test]
    fn test_ai_moves_down_towards_ball() {
        let (mut state, config) = setup_state();
        state.ball.pos = Vec2::new(320.0, 400.0);

        move_ai_paddle(&mut state, &config);

        assert_eq!(state.right_paddle.pos.y, 207.0);
    }

    #[test]
    fn test_ai_clamped_to_screen() {
        let (mut state, config) = setup_state();
        state.ball.pos = Vec2::new(320.0, -100.0);
        for _ in 0..500 {
            move_ai_paddle(&mut state, &config);
        }
        assert_eq!(state.right_paddle.pos.y, 0.0);

        state.ball.pos = Vec2::new(320.0, 900.0);
        for _ in 0..500 {
            move_ai_paddle(&mut state, &config);
        }
        assert_eq!(state.right_paddle.pos.y, 410.0);
    }

    #[test]
    fn test_ai_jitters_when_ball_is_centred() {
        let (mut state, config) = setup_state();
        // Centre is 205 + 35 = 240
        state.ball.pos = Vec2::new(320.0, 239.0);

        move_ai_paddle(&mut state, &config);
        // Up to 203 (centre 238), then down back to 205
        assert_eq!(state.right_paddle.pos.y, 205.0);
    }

    #[test]
    fn test_ai_idle_when_ball_exactly_on_centre() {
        let (mut state, config) = setup_state();
        state.ball.pos = Vec2::new(320.0, 240.0);

        move_ai_paddle(&mut state, &config);

        assert_eq!(state.right_paddle.pos.y, 205.0);
    }
}

use crate::{Config, Events, GameRng, GameState, MovingRect};
use glam::Vec2;

/// Check if ball left the screen (scoring)
pub fn check_scoring(
    state: &mut GameState,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if state.ball.pos.x < 0.0 {
        // Right player scores
        state.score.increment_right();
        events.right_scored = true;
        serve_ball(&mut state.ball, config, rng);
        log::debug!("right scored: {}", state.score_text());
    } else if state.ball.pos.x > config.screen_width {
        // Left player scores
        state.score.increment_left();
        events.left_scored = true;
        serve_ball(&mut state.ball, config, rng);
        log::debug!("left scored: {}", state.score_text());
    }
}

/// Recentre the ball and pick one of the four diagonal directions.
/// The x sign is drawn before the y sign.
pub fn serve_ball(ball: &mut MovingRect, config: &Config, rng: &mut GameRng) {
    let speed = config.ball_reset_speed;
    let dx = if rng.coin() { -speed } else { speed };
    let dy = if rng.coin() { -speed } else { speed };

    ball.pos = config.ball_spawn();
    ball.vel = Vec2::new(dx, dy);
}

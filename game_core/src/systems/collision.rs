use crate::{Config, Events, GameState, MovingRect};

/// Check ball collisions with walls and paddles
pub fn check_collisions(state: &mut GameState, config: &Config, events: &mut Events) {
    check_wall_bounce(state, config, events);
    check_paddle_bounce(state, config, events);
}

/// Invert vertical velocity when the ball is past the top or bottom wall.
/// The ball is not pushed back inside; the next advance brings it back.
pub fn check_wall_bounce(state: &mut GameState, config: &Config, events: &mut Events) {
    let ball = &mut state.ball;
    if ball.pos.y < 0.0 || ball.pos.y + config.ball_radius > config.screen_height {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}

/// Invert horizontal velocity when the ball is inside a paddle's zone.
/// The left paddle is tested first; a ball in both zones only answers to it.
pub fn check_paddle_bounce(state: &mut GameState, config: &Config, events: &mut Events) {
    let ball_x = state.ball.pos.x;
    let ball_y = state.ball.pos.y;

    let left_zone = ball_x < config.paddle_width + state.left_paddle.width();
    let right_zone =
        ball_x > config.screen_width - config.paddle_width - state.right_paddle.width();

    let hit = (left_zone && within_paddle_span(ball_y, &state.left_paddle, config))
        || (right_zone && within_paddle_span(ball_y, &state.right_paddle, config));

    if hit {
        state.ball.vel.x = -state.ball.vel.x;
        events.ball_hit_paddle = true;
    }
}

/// Ball top strictly below the paddle top and ball bottom strictly above the paddle bottom
fn within_paddle_span(ball_y: f32, paddle: &MovingRect, config: &Config) -> bool {
    ball_y > paddle.pos.y && ball_y + config.ball_radius < paddle.pos.y + config.paddle_height
}

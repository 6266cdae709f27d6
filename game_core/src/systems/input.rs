use crate::{Config, GameState, Key, Keys};

/// Move the left paddle from the held keys, clamped to the screen
pub fn move_player_paddle(state: &mut GameState, keys: &Keys, config: &Config) {
    let paddle = &mut state.left_paddle;

    if keys.is_pressed(Key::Up) {
        paddle.pos.y = (paddle.pos.y - config.player_step).max(0.0);
    }
    if keys.is_pressed(Key::Down) {
        paddle.pos.y = (paddle.pos.y + config.player_step).min(config.paddle_max_y());
    }
}

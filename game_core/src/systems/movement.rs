use crate::GameState;

/// Move ball based on velocity
pub fn move_ball(state: &mut GameState) {
    state.ball.advance();
}

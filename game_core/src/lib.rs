pub mod components;
pub mod config;
pub mod draw;
pub mod game;
pub mod host;
pub mod input;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use draw::*;
pub use game::*;
pub use host::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use systems::*;

/// Run one frame of the Pong simulation.
///
/// The ball is advanced both before the collision checks and again after
/// the paddles move, unless `config.double_advance` is off.
pub fn step(
    state: &mut GameState,
    keys: &Keys,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) -> Outcome {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(state);

    // 2. Bounce off walls, then paddles
    check_collisions(state, config, events);

    // 3. Check scoring (ball left the screen)
    check_scoring(state, config, events, rng);

    // 4. Player paddle from held keys
    move_player_paddle(state, keys, config);

    // 5. AI paddle follows the ball
    move_ai_paddle(state, config);

    // 6. Second ball advance
    if config.double_advance {
        move_ball(state);
    }

    if keys.is_pressed(Key::Quit) {
        Outcome::Quit
    } else {
        Outcome::Continue
    }
}

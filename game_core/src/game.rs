use crate::{draw_frame, step, Config, Events, GameRng, GameState, Host, Outcome, Surface};

/// Everything one running game owns: state plus the resources `step` needs
pub struct Game {
    pub state: GameState,
    pub config: Config,
    pub events: Events,
    pub rng: GameRng,
}

impl Game {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let state = GameState::new(&config, &mut rng);
        Self {
            state,
            config,
            events: Events::new(),
            rng,
        }
    }

    /// Advance one frame without drawing
    pub fn update<H: Host + ?Sized>(&mut self, host: &H) -> Outcome {
        let keys = host.pressed_keys();
        let outcome = step(
            &mut self.state,
            &keys,
            &self.config,
            &mut self.events,
            &mut self.rng,
        );
        let tick = host.frame_tick();

        if self.events.ball_hit_wall {
            log::debug!("frame {}: ball hit wall at y={}", tick, self.state.ball.pos.y);
        }
        if self.events.ball_hit_paddle {
            log::debug!("frame {}: ball hit paddle at x={}", tick, self.state.ball.pos.x);
        }
        if self.events.scored() {
            log::info!("frame {}: {}", tick, self.state.score_text());
        }
        if !outcome.is_continue() {
            log::info!("quit requested at frame {}", tick);
        }
        outcome
    }

    /// Render the current state
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        draw_frame(&self.state, &self.config, surface);
    }

    /// Update then draw, in the order the host loop expects
    pub fn frame<H, S>(&mut self, host: &H, surface: &mut S) -> Outcome
    where
        H: Host + ?Sized,
        S: Surface + ?Sized,
    {
        let outcome = self.update(host);
        self.draw(surface);
        outcome
    }

    pub fn reset(&mut self) {
        self.state.reset(&self.config);
        self.events.clear();
    }

    pub fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32) {
        self.config.layout(outside_width, outside_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCmd, DrawList, Key, Keys, ScriptedHost};
    use glam::Vec2;

    #[test]
    fn test_frame_updates_then_draws() {
        let mut game = Game::new(Config::new(), GameRng::new(5));
        let start = game.state.ball.pos;
        let vel = game.state.ball.vel;
        let host = ScriptedHost::default();
        let mut list = DrawList::new();

        let outcome = game.frame(&host, &mut list);

        assert_eq!(outcome, Outcome::Continue);
        // Drawn ball reflects the post-update position
        match &list.cmds[1] {
            DrawCmd::Circle { center, .. } => {
                assert!((*center - (start + vel * 2.0)).length() < 1e-3)
            }
            other => panic!("expected ball circle, got {:?}", other),
        }
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut game = Game::new(Config::new(), GameRng::new(5));
        let host = ScriptedHost::new(Keys::from_keys(&[Key::Quit]));
        let mut list = DrawList::new();

        assert_eq!(game.frame(&host, &mut list), Outcome::Quit);
        assert!(!list.cmds.is_empty(), "Quit frame is still drawn");
    }

    #[test]
    fn test_update_exposes_bounce_events() {
        let mut game = Game::new(Config::new(), GameRng::new(5));
        let host = ScriptedHost::default();
        game.state.ball.pos = Vec2::new(300.0, 1.0);
        game.state.ball.vel = Vec2::new(2.0, -2.0);

        game.update(&host);
        assert!(game.events.ball_hit_wall);
        assert!(!game.events.ball_hit_paddle);

        // Left paddle spans 205..275 after reset
        game.reset();
        game.state.ball.pos = Vec2::new(11.0, 240.0);
        game.state.ball.vel = Vec2::new(-2.0, 0.0);

        game.update(&host);
        assert!(game.events.ball_hit_paddle);
        assert!(!game.events.ball_hit_wall);
        assert_eq!(game.state.ball.vel.x, 2.0);
        assert_eq!(game.state.score.total(), 0);
    }

    #[test]
    fn test_layout_ignores_outside_size() {
        let game = Game::new(Config::new(), GameRng::default());
        assert_eq!(game.layout(800, 600), (640, 480));
    }
}

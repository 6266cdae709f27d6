use rand::Rng;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn total(&self) -> u32 {
        self.left + self.right
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Ambient-seeded generator for normal play
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    /// Uniform sample in `[min, max)`
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        self.0.gen_range(min..max)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.increment_left();
        assert_eq!(score.left, 2);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        score.increment_right();
        assert_eq!(score.right, 1);
        assert_eq!(score.total(), 1);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.scored());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.coin(), b.coin());
        }
        assert_eq!(a.range(1.0, 3.0), b.range(1.0, 3.0));
    }

    #[test]
    fn test_range_stays_in_bounds() {
        let mut rng = GameRng::default();
        for _ in 0..1000 {
            let v = rng.range(1.0, 3.0);
            assert!((1.0..3.0).contains(&v), "{} out of [1, 3)", v);
        }
    }
}

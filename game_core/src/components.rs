use glam::Vec2;

/// Which side of the screen a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Ball or paddle: a position, a velocity and a fixed size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingRect {
    pub pos: Vec2,
    pub vel: Vec2,
    size: Vec2,
}

impl MovingRect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Move by one step of the current velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_adds_velocity() {
        let mut rect = MovingRect::new(Vec2::new(10.0, 20.0), Vec2::splat(5.0))
            .with_vel(Vec2::new(2.0, -3.0));
        rect.advance();
        assert_eq!(rect.pos, Vec2::new(12.0, 17.0));
        assert_eq!(rect.size(), Vec2::splat(5.0), "Size never changes");
    }
}

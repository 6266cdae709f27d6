/// Logical keys polled from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Quit,
}

impl Key {
    fn bit(self) -> u8 {
        match self {
            Key::Up => 1 << 0,
            Key::Down => 1 << 1,
            Key::Quit => 1 << 2,
        }
    }
}

/// Set of keys held down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    bits: u8,
}

impl Keys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(keys: &[Key]) -> Self {
        let mut set = Self::new();
        for key in keys {
            set.press(*key);
        }
        set
    }

    pub fn press(&mut self, key: Key) {
        self.bits |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.bits &= !key.bit();
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.bits & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

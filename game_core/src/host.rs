//! Capabilities the core needs from whatever runs the frame loop

use crate::Keys;

/// Result of one frame; anything but `Continue` stops the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

impl Outcome {
    pub fn is_continue(self) -> bool {
        self == Outcome::Continue
    }
}

/// Input side of the host framework
pub trait Host {
    /// Keys held down right now
    fn pressed_keys(&self) -> Keys;

    /// Monotonic frame counter maintained by the host
    fn frame_tick(&self) -> u64;
}

/// Host with a fixed key set, for driving the game without a window
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedHost {
    pub keys: Keys,
    pub tick: u64,
}

impl ScriptedHost {
    pub fn new(keys: Keys) -> Self {
        Self { keys, tick: 0 }
    }
}

impl Host for ScriptedHost {
    fn pressed_keys(&self) -> Keys {
        self.keys
    }

    fn frame_tick(&self) -> u64 {
        self.tick
    }
}

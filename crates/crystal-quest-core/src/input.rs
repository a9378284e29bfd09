use serde::{Deserialize, Serialize};

/// Discrete key-down edges delivered since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Jump pressed. One-shot: consumed by the tick that drains it.
    Jump,
    /// Dedicated pause key.
    Pause,
    MenuUp,
    MenuDown,
    Confirm,
    /// Back / escape. Also pauses while playing.
    Cancel,
}

/// Held directional keys, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// -1 for left, +1 for right, 0 for neither. Left wins when both are held.
    pub fn direction(&self) -> i8 {
        if self.left {
            -1
        } else if self.right {
            1
        } else {
            0
        }
    }
}

/// Everything the input layer hands to one simulation tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    pub held: HeldKeys,
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn holding_left(mut self) -> Self {
        self.held.left = true;
        self
    }

    pub fn holding_right(mut self) -> Self {
        self.held.right = true;
        self
    }
}

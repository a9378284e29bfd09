use serde::{Deserialize, Serialize};

use crate::events::EventSink;
use crate::input::InputFrame;

/// Core trait for a fixed-timestep game simulation.
///
/// The embedding loop owns the window, clock, input devices and effect
/// layers; the simulation only advances its own state and reports what
/// happened through the event sink.
pub trait Simulation {
    /// Events emitted during `update`.
    type Event;

    /// Static description for launchers and title screens.
    fn metadata(&self) -> GameMetadata;

    /// Target tick rate in Hz. The frame limiter lives outside the simulation.
    fn tick_rate(&self) -> f32 {
        60.0
    }

    /// Advance one tick. `input` is drained exactly once per call.
    fn update(&mut self, dt: f32, input: &InputFrame, events: &mut impl EventSink<Self::Event>);

    /// Whether the player asked to leave. The host loop terminates the process.
    fn quit_requested(&self) -> bool;
}

/// Game metadata for launchers and title screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub level_count: usize,
}

pub mod events;
pub mod game_trait;
pub mod geometry;
pub mod input;
pub mod powerup;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::game_trait::Simulation;
    use crate::input::{InputEvent, InputFrame};

    /// Fixed frame delta used by scenario tests (60 Hz).
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Frame carrying a single key-down edge and no held keys.
    pub fn press(event: InputEvent) -> InputFrame {
        InputFrame::idle().with_event(event)
    }

    /// Run `n` ticks feeding the same frame each time, returning all events.
    pub fn run_ticks<S: Simulation>(
        sim: &mut S,
        n: usize,
        dt: f32,
        frame: &InputFrame,
    ) -> Vec<S::Event> {
        let mut events = Vec::new();
        for _ in 0..n {
            sim.update(dt, frame, &mut events);
        }
        events
    }

    /// Run idle ticks until `done` holds or `max_ticks` elapse.
    /// Returns the number of ticks that ran.
    pub fn run_until<S: Simulation>(
        sim: &mut S,
        max_ticks: usize,
        dt: f32,
        mut done: impl FnMut(&S) -> bool,
    ) -> usize {
        let idle = InputFrame::idle();
        let mut events = Vec::new();
        for tick in 0..max_ticks {
            if done(sim) {
                return tick;
            }
            sim.update(dt, &idle, &mut events);
        }
        max_ticks
    }
}
